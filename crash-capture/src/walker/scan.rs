//! Strategy A — address-range scan: the default walker, used whenever the
//! toolchain gives no other hint. Requires no library support, just the
//! code-segment range as an oracle.

use super::StackMemory;
use crate::profile::{WalkProfile, CALL_STACK_SIZE, MAX_STACK_DEPTH_SEARCH, STACK_MARKER};

/// Fills `out` with up to `CALL_STACK_SIZE` candidate return addresses
/// found by scanning raw stack memory from `sp` towards the stack base.
///
/// `out` is always fully zeroed first; on any early exit (bad `sp`, no
/// readable memory) it is left that way — no error is raised, the output
/// just stays zero-padded.
pub fn scan_walk(sp: u32, profile: &WalkProfile, mem: &dyn StackMemory, out: &mut [u32; CALL_STACK_SIZE]) {
    *out = [0; CALL_STACK_SIZE];

    if !profile.in_ram(sp) {
        return;
    }

    let mut filled = 0usize;
    let mut d: u32 = 0;

    while (d as usize) < MAX_STACK_DEPTH_SEARCH {
        let addr = step(sp, d, profile.stack_grows_down);
        let Some(word) = mem.read_word(addr) else {
            break;
        };

        let neighbor_addr = step(sp, d + 1, profile.stack_grows_down);
        let neighbor = mem.read_word(neighbor_addr);
        if word == STACK_MARKER && neighbor == Some(STACK_MARKER) {
            break;
        }

        if profile.in_code(word) {
            out[filled] = word;
            filled += 1;
            if filled == CALL_STACK_SIZE {
                break;
            }
        }

        d += 1;
    }
}

/// `sp` offset by `d` words, in the direction the stack walker advances
/// (towards the stack base).
#[inline]
fn step(sp: u32, d: u32, stack_grows_down: bool) -> u32 {
    let byte_offset = d.wrapping_mul(4);
    if stack_grows_down {
        sp.wrapping_add(byte_offset)
    } else {
        sp.wrapping_sub(byte_offset)
    }
}
