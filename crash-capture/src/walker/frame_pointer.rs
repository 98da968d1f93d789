//! Strategy B — frame-pointer chain: used when the toolchain preserves
//! frame pointers (e.g. built with
//! `-C force-frame-pointers=yes`). Skips local-variable words entirely, so
//! it produces fewer spurious entries than the scan strategy, at the cost
//! of depending on frame-pointer discipline the compiler doesn't guarantee
//! by default.
//!
//! Frame layout assumed: at `fp`, the first word is the saved (caller's)
//! frame pointer and the word immediately after is the saved return
//! address — the layout `aapcs`/most calling conventions use when frame
//! pointers are enabled.

use super::StackMemory;
use crate::profile::{WalkProfile, CALL_STACK_SIZE, STACK_MARKER};

pub fn frame_pointer_walk(fp: u32, profile: &WalkProfile, mem: &dyn StackMemory, out: &mut [u32; CALL_STACK_SIZE]) {
    *out = [0; CALL_STACK_SIZE];

    let mut fp = fp;
    let mut filled = 0usize;

    loop {
        if !profile.in_ram(fp) {
            break;
        }
        let Some(saved_fp) = mem.read_word(fp) else { break };
        let Some(return_addr) = mem.read_word(fp.wrapping_add(4)) else { break };

        if saved_fp == STACK_MARKER && return_addr == STACK_MARKER {
            break;
        }

        if profile.in_code(return_addr) {
            out[filled] = return_addr;
            filled += 1;
            if filled == CALL_STACK_SIZE {
                break;
            }
        }

        // A valid link points strictly further along the stack.
        if !frame_link_advances(fp, saved_fp, profile.stack_grows_down) {
            break;
        }
        fp = saved_fp;
    }
}

#[inline]
fn frame_link_advances(current: u32, next: u32, stack_grows_down: bool) -> bool {
    if stack_grows_down {
        next > current
    } else {
        next < current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SliceMemory<'a> {
        base: u32,
        words: &'a [u32],
    }

    impl StackMemory for SliceMemory<'_> {
        fn read_word(&self, addr: u32) -> Option<u32> {
            if addr < self.base {
                return None;
            }
            let idx = ((addr - self.base) / 4) as usize;
            self.words.get(idx).copied()
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
    fn follows_frame_chain_to_marker() {
        let p = profile();
        // Frame 0 at +0: [saved_fp = +8, ret = 0x400100]
        // Frame 1 at +8: [saved_fp = +16, ret = 0x400200]
        // Frame 2 at +16: [marker, marker]
        let mut words = [0u32; 16];
        words[0] = 0x2000_0008;
        words[1] = 0x0040_0100;
        words[2] = 0x2000_0010;
        words[3] = 0x0040_0200;
        words[4] = STACK_MARKER;
        words[5] = STACK_MARKER;
        let mem = SliceMemory { base: 0x2000_0000, words: &words };

        let mut out = [0u32; CALL_STACK_SIZE];
        frame_pointer_walk(0x2000_0000, &p, &mem, &mut out);
        assert_eq!(out, [0x0040_0100, 0x0040_0200, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn invalid_link_stops_walk() {
        let p = profile();
        let mut words = [0u32; 8];
        words[0] = 0x1000_0000; // outside RAM: invalid link
        words[1] = 0x0040_0100;
        let mem = SliceMemory { base: 0x2000_0000, words: &words };

        let mut out = [0u32; CALL_STACK_SIZE];
        frame_pointer_walk(0x2000_0000, &p, &mem, &mut out);
        assert_eq!(out, [0x0040_0100, 0, 0, 0, 0, 0, 0, 0]);
    }
}
