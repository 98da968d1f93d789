//! Survivable-RAM crash capture and heuristic stack walker.
//!
//! A fault handler calls [`capture`] with whatever location information it
//! has; the call is idempotent, so the first fault in a cascade is the one
//! that's kept. On a scheduler target, [`capture_tasks`] (behind the
//! `multitask` feature) additionally walks every other task's saved stack.
//! After reboot, [`is_saved`]/[`get`]/[`reset`] let a recovery path read
//! back what happened and clear the slate for the next run.
//!
//! Built `no_std` with no allocator by default. Enable `std` (pulled in
//! automatically by `host-backtrace`) to build the host-side pieces that do
//! need it, such as `walker::host`.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod arch;
pub mod capture;
pub mod export;
pub mod profile;
pub mod record;
pub mod report;
#[cfg(feature = "multitask")]
pub mod tasks;
pub mod validity;
pub mod walker;

use record::DumpRecord;

/// The process-wide record. On a real target this is placed in a
/// non-initialized linker section (a NOLOAD region the linker script
/// carves out of RAM and the startup code is told not to zero) so its
/// contents survive a reset; the `cleared()` initializer below only ever
/// actually runs for hosted builds, where the section is ordinary
/// zero-initialized `.bss`.
///
/// `static mut` is the only way to get a single place-addressed object the
/// linker can put in that section; every access to it funnels through the
/// narrow wrapper functions below, which is the one place in this crate
/// that touches it directly.
#[cfg_attr(not(feature = "std"), link_section = ".noinit.crash_capture")]
static mut RECORD: DumpRecord = DumpRecord::cleared();

/// Captures a fault into the process-wide record. Safe to call from
/// fault-handler context; does nothing if a capture is already present
/// (first-writer-wins).
///
/// `stack_pointer`: `None` for a software assertion captured from the
/// caller's own context; `Some(exception_sp)` for a hardware exception,
/// where `exception_sp` is the address of the CPU's auto-pushed exception
/// frame.
pub fn capture(stack_pointer: Option<u32>, file_name: Option<&str>, line_number: u32, aux_code: u32) {
    // SAFETY: a fault handler runs with interrupts effectively disabled
    // for other capture-calling contexts, so this is not racing another
    // mutable access to RECORD.
    let record = unsafe { &mut *core::ptr::addr_of_mut!(RECORD) };
    capture::capture_into(record, &walker::RawMemory, &profile::WalkProfile::ACTIVE, stack_pointer, file_name, line_number, aux_code);
}

/// `true` iff the process-wide record holds a capture from a previous run.
pub fn is_saved() -> bool {
    // SAFETY: shared read of a value only ever mutated through `capture`,
    // which is never called concurrently with this on a single-core
    // target.
    let record = unsafe { &*core::ptr::addr_of!(RECORD) };
    export::is_saved_in(record)
}

/// Returns a reference to the process-wide record if a capture is present.
pub fn get() -> Option<&'static DumpRecord> {
    // SAFETY: see `is_saved`.
    let record = unsafe { &*core::ptr::addr_of!(RECORD) };
    export::get_in(record)
}

/// Clears the process-wide record's validity keys.
pub fn reset() {
    // SAFETY: see `capture`.
    let record = unsafe { &mut *core::ptr::addr_of_mut!(RECORD) };
    export::reset_in(record)
}

/// Walks every task's saved stack into the process-wide record, in
/// addition to the faulting task's own backtrace already captured by
/// [`capture`]. Called from the recovery task after the active capture,
/// against the scheduler's own view of each task's saved stack pointer.
#[cfg(feature = "multitask")]
pub fn capture_tasks(tasks: &dyn tasks::TaskTable) {
    // SAFETY: see `capture`.
    let record = unsafe { &mut *core::ptr::addr_of_mut!(RECORD) };
    tasks::capture_tasks(record, tasks, &walker::RawMemory, &profile::WalkProfile::ACTIVE)
}
