//! Hosted test harness: a fabricated stack buffer plus the host platform
//! profile, standing in for real target RAM. RAM and code ranges are the
//! test-host ranges, with a synthetic stack buffer in place of the real
//! thing.

use crash_capture::profile::WalkProfile;
use crash_capture::walker::StackMemory;

/// A `StackMemory` backed by an explicit base address and a `Vec<u32>` of
/// words starting there. Reads outside the vector, or unaligned, return
/// `None` — the same "nothing more to find here" signal the real
/// bounds-checked primitive gives the walker.
pub struct SyntheticStack {
    base: u32,
    words: Vec<u32>,
}

impl SyntheticStack {
    pub fn new(base: u32, words: Vec<u32>) -> SyntheticStack {
        SyntheticStack { base, words }
    }
}

impl StackMemory for SyntheticStack {
    fn read_word(&self, addr: u32) -> Option<u32> {
        if addr % 4 != 0 || addr < self.base {
            return None;
        }
        let idx = ((addr - self.base) / 4) as usize;
        self.words.get(idx).copied()
    }
}

/// The profile active for a hosted build (no `board-*` feature enabled):
/// matches `crash_capture::profile::boards::host`, whose ranges were
/// chosen to line up with the addresses this crate's scenarios use.
pub fn host_profile() -> WalkProfile {
    WalkProfile::ACTIVE
}
