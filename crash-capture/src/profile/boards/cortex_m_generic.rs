//! Generic Cortex-M memory map (e.g. STM32F4/nRF52-class parts): Flash at
//! the low end of the address space, SRAM starting at 0x2000_0000. Adjust
//! per board by copying this file.

pub const RAM_BEGIN: u32 = 0x2000_0000;
pub const RAM_END: u32 = 0x2002_0000; // 128 KiB SRAM

pub const CODE_BEGIN: u32 = 0x0000_0000;
pub const CODE_END: u32 = 0x0010_0000; // 1 MiB flash

/// Cortex-M stacks grow down (full-descending).
pub const STACK_GROWS_DOWN: bool = true;
