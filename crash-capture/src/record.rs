//! Dump record: the single statically-allocated value living in
//! non-initialized memory. Every field's at-rest representation is a
//! plain integer or byte array — never a Rust `enum` — so that reading the
//! record before its validity has been established (its initial contents
//! across a cold boot are unspecified) can never produce an invalid enum
//! discriminant, which would be undefined behavior even if nothing ever
//! matches on it. Typed views (`FaultKind`, in particular) are exposed
//! only through accessors that convert from the raw integer.

use crate::profile::{CALL_STACK_SIZE, FAULT_STATUS_REG_COUNT, FILE_NAME_LEN, REGISTER_FILE_WORDS};

#[cfg(feature = "multitask")]
use crate::profile::OS_TASKCNT;

/// Fault classification. Stored in the record as a raw `u32`;
/// `FaultKind::from_raw` is the only way to interpret it, and it returns
/// `None` for any value that isn't one of the two variants below so callers
/// can't be handed a bogus enum out of an uninitialized record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum FaultKind {
    HardwareException = 1,
    SoftwareAssertion = 2,
}

impl FaultKind {
    pub const fn from_raw(raw: u32) -> Option<FaultKind> {
        match raw {
            1 => Some(FaultKind::HardwareException),
            2 => Some(FaultKind::SoftwareAssertion),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u32 {
        self as u32
    }
}

/// General-purpose register file captured from the exception stack frame.
/// Layout matches the automatically-stacked ARM Cortex-M exception frame
/// (r0, r1, r2, r3, r12, lr, pc, xpsr); other architectures fill the same
/// eight slots with their closest equivalent (see `arch`).
#[cfg(feature = "hw-registers")]
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterFile {
    pub r0: u32,
    pub r1: u32,
    pub r2: u32,
    pub r3: u32,
    pub r12: u32,
    pub lr: u32,
    pub pc: u32,
    pub xpsr: u32,
}

#[cfg(feature = "hw-registers")]
impl RegisterFile {
    pub const ZERO: RegisterFile = RegisterFile { r0: 0, r1: 0, r2: 0, r3: 0, r12: 0, lr: 0, pc: 0, xpsr: 0 };

    pub const fn as_words(&self) -> [u32; REGISTER_FILE_WORDS] {
        [self.r0, self.r1, self.r2, self.r3, self.r12, self.lr, self.pc, self.xpsr]
    }
}

/// The fixed-layout, zero-padded, POD-like dump record.
///
/// Placed by the linker in a non-initialized region (see `crate::RECORD`
/// and the per-target linker notes there); never constructed on the stack
/// for real use, only read/written in place.
#[repr(C)]
pub struct DumpRecord {
    pub(crate) key: u32,
    pub(crate) anti_key: u32,
    pub(crate) software_version: u32,
    pub(crate) aux_code: u32,
    pub(crate) fault_kind: u32,
    pub(crate) line_number: u32,
    pub(crate) file_name: [u8; FILE_NAME_LEN],
    #[cfg(feature = "hw-registers")]
    pub(crate) cpu_registers: RegisterFile,
    #[cfg(feature = "hw-registers")]
    pub(crate) fault_status_registers: [u32; FAULT_STATUS_REG_COUNT],
    pub(crate) active_backtrace: [u32; CALL_STACK_SIZE],
    #[cfg(feature = "multitask")]
    pub(crate) task_backtraces: [[u32; CALL_STACK_SIZE]; OS_TASKCNT],
}

impl DumpRecord {
    /// A record in the "cleared" state: keys zero, every other field zero.
    /// This is the value the linker-section initializer carries; on a real
    /// target the section is NOLOAD so this initializer is never actually
    /// written to RAM — it exists only to give the static a type-correct
    /// value for builds (hosted tests, `cargo doc`) where the section
    /// genuinely is zero-initialized.
    pub const fn cleared() -> DumpRecord {
        DumpRecord {
            key: 0,
            anti_key: 0,
            software_version: 0,
            aux_code: 0,
            fault_kind: 0,
            line_number: 0,
            file_name: [0; FILE_NAME_LEN],
            #[cfg(feature = "hw-registers")]
            cpu_registers: RegisterFile::ZERO,
            #[cfg(feature = "hw-registers")]
            fault_status_registers: [0; FAULT_STATUS_REG_COUNT],
            active_backtrace: [0; CALL_STACK_SIZE],
            #[cfg(feature = "multitask")]
            task_backtraces: [[0; CALL_STACK_SIZE]; OS_TASKCNT],
        }
    }

    /// `file_name` as a `&str`, truncated at the first NUL. Empty if the
    /// buffer was never written (a null `file_name` argument to `capture`
    /// leaves the buffer as-is).
    pub fn file_name(&self) -> &str {
        let nul = self.file_name.iter().position(|&b| b == 0).unwrap_or(self.file_name.len());
        core::str::from_utf8(&self.file_name[..nul]).unwrap_or("<invalid utf-8>")
    }

    pub fn fault_kind(&self) -> Option<FaultKind> {
        FaultKind::from_raw(self.fault_kind)
    }

    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    pub fn aux_code(&self) -> u32 {
        self.aux_code
    }

    pub fn software_version(&self) -> u32 {
        self.software_version
    }

    /// The active backtrace as captured at fault time, zero-padded:
    /// entries `[0..k)` are candidate return addresses, entries
    /// `[k..CALL_STACK_SIZE)` are zero.
    pub fn active_backtrace(&self) -> &[u32; CALL_STACK_SIZE] {
        &self.active_backtrace
    }

    #[cfg(feature = "hw-registers")]
    pub fn cpu_registers(&self) -> &RegisterFile {
        &self.cpu_registers
    }

    #[cfg(feature = "hw-registers")]
    pub fn fault_status_registers(&self) -> &[u32; FAULT_STATUS_REG_COUNT] {
        &self.fault_status_registers
    }

    #[cfg(feature = "multitask")]
    pub fn task_backtrace(&self, task: usize) -> Option<&[u32; CALL_STACK_SIZE]> {
        self.task_backtraces.get(task)
    }

    #[cfg(feature = "multitask")]
    pub fn task_backtraces(&self) -> &[[u32; CALL_STACK_SIZE]; OS_TASKCNT] {
        &self.task_backtraces
    }
}

/// Bounded, NUL-terminating copy into `file_name`: copies as many bytes of
/// `src` as fit, and always leaves a terminating NUL in place.
pub(crate) fn write_file_name(dst: &mut [u8; FILE_NAME_LEN], src: Option<&str>) {
    let Some(src) = src else { return };
    let bytes = src.as_bytes();
    let n = core::cmp::min(bytes.len(), FILE_NAME_LEN - 1);
    dst[..n].copy_from_slice(&bytes[..n]);
    dst[n] = 0;
    for b in &mut dst[n + 1..] {
        *b = 0;
    }
}
