//! Platform profile: the compile-time memory map and record-shape
//! constants every other module in this crate is parameterized over.
//!
//! The active board is chosen with Cargo features, the same way a
//! multi-target embedded kernel selects a platform implementation per
//! target, except here the choice has to happen at compile time: the dump
//! record's layout depends on `CALL_STACK_SIZE`/`OS_TASKCNT`, and it must
//! be read bit-exact by the host decoder, so there is no room for a
//! runtime-pluggable profile.

/// Backtrace depth per stack.
pub const CALL_STACK_SIZE: usize = 8;

/// Cap on words examined per walk; bounds the worst case when no stack
/// marker is ever found.
pub const MAX_STACK_DEPTH_SEARCH: usize = 1024;

/// Length of the `file_name` buffer, including the mandatory trailing NUL.
pub const FILE_NAME_LEN: usize = 128;

/// Multi-task walk cap. Only meaningful with the `multitask` feature; the
/// walk itself uses an exclusive bound (`t < OS_TASKCNT`) so it never reads
/// one element past the table.
pub const OS_TASKCNT: usize = 8;

/// Pair of consecutive words equal to this value terminates a stack scan.
pub const STACK_MARKER: u32 = 0xEFEF_EFEF;

/// `key` value a valid record carries; `anti_key` must be its bitwise
/// complement.
pub const KEY_SENTINEL: u32 = 0xDEAD_BEEF;

/// Number of general-purpose words captured from the exception frame:
/// matches the automatically-stacked ARM Cortex-M frame (r0, r1, r2, r3,
/// r12, lr, pc, xpsr).
pub const REGISTER_FILE_WORDS: usize = 8;

/// Target-specific secondary fault-status registers captured alongside the
/// register file when `hw-registers` is enabled.
pub const FAULT_STATUS_REG_COUNT: usize = 4;

/// Build-identity tag. Derived from the short commit hash `build.rs`
/// stamps into the environment; folded into a u32 because the record
/// field is fixed-width.
pub const SOFTWARE_VERSION: u32 = {
    let tag = env!("CRASH_CAPTURE_VERSION").as_bytes();
    let mut hash: u32 = 0x811c_9dc5;
    let mut i = 0;
    while i < tag.len() {
        hash ^= tag[i] as u32;
        hash = hash.wrapping_mul(0x0100_0193);
        i += 1;
    }
    hash
};

mod boards;
pub use boards::*;

/// Inclusive bounds and search parameters consumed by the stack walker.
///
/// This is a plain value type wrapping the active board's constants so the
/// walker (which is generic over "a profile") can also be exercised in
/// tests against a profile different from the one selected at compile time
/// for the crate's own global record — useful for the synthetic harness in
/// `crash-capture-sim`, which wants a profile whose ranges match its
/// fabricated buffers rather than whatever board feature happens to be
/// enabled for the crate under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkProfile {
    pub ram_begin: u32,
    pub ram_end: u32,
    pub code_begin: u32,
    pub code_end: u32,
    pub stack_grows_down: bool,
}

impl WalkProfile {
    /// The profile selected at compile time via board features.
    pub const ACTIVE: WalkProfile = WalkProfile {
        ram_begin: RAM_BEGIN,
        ram_end: RAM_END,
        code_begin: CODE_BEGIN,
        code_end: CODE_END,
        stack_grows_down: STACK_GROWS_DOWN,
    };

    #[inline]
    pub fn in_ram(&self, addr: u32) -> bool {
        addr >= self.ram_begin && addr <= self.ram_end
    }

    #[inline]
    pub fn in_code(&self, addr: u32) -> bool {
        addr >= self.code_begin && addr <= self.code_end
    }
}
