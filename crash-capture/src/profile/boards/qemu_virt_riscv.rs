//! QEMU `virt` machine memory map for RV32.

pub const RAM_BEGIN: u32 = 0x8000_0000;
pub const RAM_END: u32 = 0x8800_0000; // 128 MiB RAM window

pub const CODE_BEGIN: u32 = 0x8000_0000;
pub const CODE_END: u32 = 0x8100_0000; // kernel .text lives in the first 16 MiB

/// RV32 software stacks conventionally grow down.
pub const STACK_GROWS_DOWN: bool = true;
