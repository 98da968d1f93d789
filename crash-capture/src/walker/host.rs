//! Strategy C — host-runtime backtrace: a thin adapter over a host OS's
//! native unwinder, used only when this crate is built with
//! `host-backtrace` (which pulls in the `backtrace` crate and `std`).
//! Useful for exercising the walker dispatch itself on a machine with a
//! real unwinder rather than a fabricated stack buffer; selected at
//! compile time like the other two strategies, never at runtime.
//!
//! Symbol resolution, if the host unwinder performs any, is discarded: only
//! raw addresses are retained, so the record's on-disk shape is identical
//! whether it came from a microcontroller or from this adapter.

use crate::profile::CALL_STACK_SIZE;

pub fn host_backtrace_walk(out: &mut [u32; CALL_STACK_SIZE]) {
    *out = [0; CALL_STACK_SIZE];
    let mut filled = 0usize;
    backtrace::trace(|frame| {
        if filled >= CALL_STACK_SIZE {
            return false;
        }
        out[filled] = frame.ip() as usize as u32;
        filled += 1;
        filled < CALL_STACK_SIZE
    });
}

#[cfg(all(test, feature = "host-backtrace"))]
mod tests {
    use super::*;

    #[inline(never)]
    fn inner(out: &mut [u32; CALL_STACK_SIZE]) {
        host_backtrace_walk(out);
    }

    #[inline(never)]
    fn outer(out: &mut [u32; CALL_STACK_SIZE]) {
        inner(out);
    }

    #[test]
    fn captures_a_nonzero_frame_through_nested_calls() {
        let mut out = [0u32; CALL_STACK_SIZE];
        outer(&mut out);

        let filled = out.iter().filter(|&&addr| addr != 0).count();
        assert!(filled > 0, "expected at least one captured frame, got {out:x?}");
        assert!(filled <= CALL_STACK_SIZE);
    }
}
