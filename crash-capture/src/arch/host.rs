//! Fallback arch collaborators used when no `arch-*` feature is enabled
//! (the `std-harness`/test build). There is no real exception frame or CPU
//! to read registers from, so these are no-ops that give the rest of the
//! crate something to link against.

#[cfg(feature = "hw-registers")]
use crate::profile::FAULT_STATUS_REG_COUNT;
#[cfg(feature = "hw-registers")]
use crate::record::RegisterFile;

#[cfg(feature = "hw-registers")]
/// # Safety
/// Never actually dereferences `exception_sp`; always safe to call.
pub unsafe fn register_file_from_exception_frame(_exception_sp: *const u32) -> RegisterFile {
    RegisterFile::ZERO
}

#[cfg(feature = "hw-registers")]
pub fn fault_status_registers() -> [u32; FAULT_STATUS_REG_COUNT] {
    [0; FAULT_STATUS_REG_COUNT]
}

pub fn current_sp() -> u32 {
    0
}
