//! Decodes a raw record dump (whatever bytes were read back from a
//! target's non-initialized RAM, or from the file a bootloader /
//! debug probe wrote it to) into a [`DumpRecord`].
//!
//! `DumpRecord` is `#[repr(C)]` and entirely plain-old-data, so the whole
//! decode is a bounds-checked, alignment-agnostic bitwise copy;
//! there is no wire format beyond "the struct's own in-memory layout",
//! which is also why the host binary has to be built against the same
//! feature set (`hw-registers`, `multitask`, ...) the target was.

use crash_capture::record::DumpRecord;

use crate::error::DecodeError;

pub fn decode(bytes: &[u8]) -> Result<DumpRecord, DecodeError> {
    let expected = core::mem::size_of::<DumpRecord>();
    if bytes.len() != expected {
        return Err(DecodeError::WrongSize { actual: bytes.len(), expected });
    }

    // SAFETY: length checked above; `read_unaligned` tolerates any
    // alignment, and `DumpRecord` is POD (no padding-sensitive invariants,
    // no `Drop`), so a bitwise copy out of an arbitrary byte buffer is
    // always a valid value of the type, valid or not per `is_valid()`.
    let record = unsafe { core::ptr::read_unaligned(bytes.as_ptr() as *const DumpRecord) };

    if !record.is_valid() {
        return Err(DecodeError::NotValid);
    }

    Ok(record)
}
