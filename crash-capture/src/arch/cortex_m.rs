//! ARM Cortex-M collaborators.
//!
//! The automatically-stacked exception frame (r0, r1, r2, r3, r12, lr, pc,
//! xpsr) is pushed by hardware at exception entry in that exact order, so
//! `register_file_from_exception_frame` is a straight 8-word read at a
//! known offset from the stack pointer the ISR was handed — no unwinding
//! needed for this part.

use crate::profile::FAULT_STATUS_REG_COUNT;
use crate::record::RegisterFile;

const SCB_CFSR: *const u32 = 0xE000_ED28 as *const u32;
const SCB_HFSR: *const u32 = 0xE000_ED2C as *const u32;
const SCB_MMFAR: *const u32 = 0xE000_ED34 as *const u32;
const SCB_BFAR: *const u32 = 0xE000_ED38 as *const u32;

/// Reads the 8-word frame the CPU automatically pushed at `exception_sp`.
///
/// # Safety
/// `exception_sp` must point at a genuine, fully-pushed exception frame —
/// true for the stack pointer an ISR is entered with, and nothing else.
pub unsafe fn register_file_from_exception_frame(exception_sp: *const u32) -> RegisterFile {
    // SAFETY: caller guarantees `exception_sp` addresses a pushed frame of
    // at least 8 words.
    unsafe {
        RegisterFile {
            r0: core::ptr::read_volatile(exception_sp),
            r1: core::ptr::read_volatile(exception_sp.add(1)),
            r2: core::ptr::read_volatile(exception_sp.add(2)),
            r3: core::ptr::read_volatile(exception_sp.add(3)),
            r12: core::ptr::read_volatile(exception_sp.add(4)),
            lr: core::ptr::read_volatile(exception_sp.add(5)),
            pc: core::ptr::read_volatile(exception_sp.add(6)),
            xpsr: core::ptr::read_volatile(exception_sp.add(7)),
        }
    }
}

/// CFSR, HFSR, MMFAR, BFAR — the secondary fault-status registers captured
/// alongside the register file.
pub fn fault_status_registers() -> [u32; FAULT_STATUS_REG_COUNT] {
    // SAFETY: these are always-mapped System Control Block registers.
    unsafe {
        [
            core::ptr::read_volatile(SCB_CFSR),
            core::ptr::read_volatile(SCB_HFSR),
            core::ptr::read_volatile(SCB_MMFAR),
            core::ptr::read_volatile(SCB_BFAR),
        ]
    }
}

/// Reads the active stack pointer (MSP, since exceptions are always taken
/// onto the main stack) via inline assembly, for the case where
/// `capture()` is invoked with a null `stack_pointer`.
#[inline(always)]
pub fn current_sp() -> u32 {
    let sp: u32;
    // SAFETY: reading MSP has no side effects.
    unsafe {
        core::arch::asm!("mrs {}, MSP", out(reg) sp, options(nomem, nostack, preserves_flags));
    }
    sp
}
