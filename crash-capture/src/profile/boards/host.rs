//! Fallback profile used when no `board-*` feature is enabled. Wide enough
//! to host the synthetic RAM/stack buffers the `std-harness` test code
//! builds; never selected for an on-target build.

pub const RAM_BEGIN: u32 = 0x2000_0000;
pub const RAM_END: u32 = 0x2100_0000;

pub const CODE_BEGIN: u32 = 0x0040_0000;
pub const CODE_END: u32 = 0x0060_0000;

pub const STACK_GROWS_DOWN: bool = true;
