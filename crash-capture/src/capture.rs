//! Capture orchestrator: the single public capture entry point.
//! Classifies the fault, populates the record, invokes the active stack
//! walker, and enforces first-writer-wins.
//!
//! The heavy lifting lives in [`capture_into`], which takes the record and
//! the memory view it should scan as explicit parameters rather than
//! reaching for global state. That makes it exercisable with a local,
//! stack-allocated `DumpRecord` and a fabricated stack buffer — no shared
//! mutable singleton involved — which is how this crate's own tests and
//! `crash-capture-sim`'s scenarios drive it. [`capture`] is the thin
//! wrapper that points that logic at the process-wide singleton, which is
//! the only thing callers on a real target ever see.

use crate::profile::{WalkProfile, CALL_STACK_SIZE};
use crate::record::{write_file_name, DumpRecord, FaultKind};
use crate::walker::StackMemory;

/// Runs the capture algorithm against an explicit record and memory view.
///
/// `stack_pointer`: `None` means "from caller context, determine
/// automatically" — the software-assertion path. `Some(sp)` means the ISR
/// entry path handed us the auto-pushed exception frame pointer — the
/// hardware-exception path.
pub fn capture_into(
    record: &mut DumpRecord,
    mem: &dyn StackMemory,
    profile: &WalkProfile,
    stack_pointer: Option<u32>,
    file_name: Option<&str>,
    line_number: u32,
    aux_code: u32,
) {
    // Step 1: idempotence guard. First capture wins.
    if record.is_valid() {
        return;
    }

    // Step 2: mark valid first. No concurrent reader exists during fault
    // handling, so writing the keys before the rest of the record is
    // populated is safe on targets without relevant reordering.
    record.mark_valid();

    // Step 3.
    record.software_version = crate::profile::SOFTWARE_VERSION;
    record.aux_code = aux_code;

    // Step 4: fault classification.
    let fault_kind = if stack_pointer.is_some() {
        FaultKind::HardwareException
    } else {
        FaultKind::SoftwareAssertion
    };
    record.fault_kind = fault_kind.as_raw();

    // Step 5: register capture, only on the hardware path and only when the
    // record carries register fields at all.
    #[cfg(feature = "hw-registers")]
    if let (FaultKind::HardwareException, Some(sp)) = (fault_kind, stack_pointer) {
        // SAFETY: `sp` is the auto-pushed exception frame pointer the ISR
        // was entered with, by the fault-dispatch collaborator's contract.
        record.cpu_registers = unsafe { crate::arch::register_file_from_exception_frame(sp as *const u32) };
        record.fault_status_registers = crate::arch::fault_status_registers();
    }

    // Step 6 + 7.
    write_file_name(&mut record.file_name, file_name);
    record.line_number = line_number;

    // Step 8: resolve the stack pointer to walk. An explicit one always
    // wins; otherwise, on a hardware profile, ask the CPU for its current
    // stack pointer. With no hardware profile and no explicit pointer there
    // is nothing safe to read and the backtrace stays zero-filled — a
    // degraded but still-readable outcome.
    let resolved_sp = stack_pointer.unwrap_or_else(current_sp_if_available);

    // Step 9.
    walk_active_stack(resolved_sp, mem, profile, &mut record.active_backtrace);

    // Step 10: no acknowledgement; the caller resets the CPU.
}

#[cfg(any(feature = "arch-cortex-m", feature = "arch-riscv"))]
fn current_sp_if_available() -> u32 {
    crate::arch::current_sp()
}

#[cfg(not(any(feature = "arch-cortex-m", feature = "arch-riscv")))]
fn current_sp_if_available() -> u32 {
    0
}

fn walk_active_stack(sp: u32, mem: &dyn StackMemory, profile: &WalkProfile, out: &mut [u32; CALL_STACK_SIZE]) {
    #[cfg(feature = "host-backtrace")]
    {
        let _ = (sp, mem, profile);
        crate::walker::host::host_backtrace_walk(out);
        return;
    }

    #[cfg(all(not(feature = "host-backtrace"), feature = "strategy-frame-pointer"))]
    {
        crate::walker::frame_pointer_walk(sp, profile, mem, out);
        return;
    }

    #[cfg(all(not(feature = "host-backtrace"), not(feature = "strategy-frame-pointer")))]
    {
        crate::walker::scan_walk(sp, profile, mem, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::StackMemory;

    struct NoMemory;
    impl StackMemory for NoMemory {
        fn read_word(&self, _addr: u32) -> Option<u32> {
            None
        }
    }

    fn profile() -> WalkProfile {
        WalkProfile {
            ram_begin: 0x2000_0000,
            ram_end: 0x2000_1000,
            code_begin: 0x0040_0000,
            code_end: 0x0060_0000,
            stack_grows_down: true,
        }
    }

    #[test]
    fn software_assertion_captures_location() {
        let mut record = DumpRecord::cleared();
        capture_into(&mut record, &NoMemory, &profile(), None, Some("path/to/file.c"), 42, 0);

        assert!(record.is_valid());
        assert_eq!(record.fault_kind(), Some(FaultKind::SoftwareAssertion));
        assert_eq!(record.file_name(), "path/to/file.c");
        assert_eq!(record.line_number(), 42);
        assert_eq!(record.aux_code(), 0);
    }

    #[test]
    fn first_writer_wins() {
        let mut record = DumpRecord::cleared();
        capture_into(&mut record, &NoMemory, &profile(), None, Some("first"), 1, 0);
        capture_into(&mut record, &NoMemory, &profile(), None, Some("second"), 2, 9);

        assert_eq!(record.file_name(), "first");
        assert_eq!(record.line_number(), 1);
        assert_eq!(record.aux_code(), 0);
    }

    #[test]
    fn capture_is_idempotent_across_many_calls() {
        let mut record = DumpRecord::cleared();
        capture_into(&mut record, &NoMemory, &profile(), None, Some("first"), 1, 0);
        let after_first = record.line_number();
        for _ in 0..5 {
            capture_into(&mut record, &NoMemory, &profile(), None, Some("ignored"), 99, 99);
        }
        assert_eq!(record.line_number(), after_first);
        assert_eq!(record.file_name(), "first");
    }

    #[test]
    fn null_stack_pointer_without_hardware_profile_yields_empty_backtrace() {
        let mut record = DumpRecord::cleared();
        capture_into(&mut record, &NoMemory, &profile(), None, None, 0, 0);
        assert_eq!(record.active_backtrace(), &[0u32; CALL_STACK_SIZE]);
    }

    #[test]
    fn reset_round_trip_allows_a_fresh_capture() {
        let mut record = DumpRecord::cleared();
        capture_into(&mut record, &NoMemory, &profile(), None, Some("first"), 1, 0);
        assert!(record.is_valid());
        record.reset();
        assert!(!record.is_valid());
        assert_eq!(record.file_name(), "first");
        capture_into(&mut record, &NoMemory, &profile(), None, Some("second"), 2, 0);
        assert!(record.is_valid());
        assert_eq!(record.file_name(), "second");
    }
}
