//! Hosted scenario harness and property tests for `crash-capture`.
//!
//! Exercises the core crate entirely through its public `std`-feature
//! surface against a fabricated stack buffer, driving it through a
//! simulated environment rather than real hardware.

pub mod harness;
pub mod scenarios;

#[cfg(test)]
mod tests {
    use super::scenarios::run_all;

    #[test]
    fn all_named_scenarios_pass() {
        for r in run_all() {
            assert!(r.passed, "scenario {:?} failed: {}", r.name, r.detail);
        }
    }
}

#[cfg(test)]
mod properties {
    use crash_capture::profile::KEY_SENTINEL;
    use crash_capture::record::DumpRecord;
    use proptest::prelude::*;

    fn set_keys(record: &mut DumpRecord, key: u32, anti_key: u32) {
        // `DumpRecord`'s validity fields are `pub(crate)` inside
        // `crash-capture`; from outside the crate the only path to a
        // record with arbitrary key bytes is the raw byte representation,
        // matching how a real cold boot hands the validity check
        // genuinely arbitrary RAM contents rather than a value this crate
        // constructed field-by-field.
        let bytes = unsafe { core::slice::from_raw_parts_mut((record as *mut DumpRecord).cast::<u8>(), core::mem::size_of::<DumpRecord>()) };
        bytes[0..4].copy_from_slice(&key.to_ne_bytes());
        bytes[4..8].copy_from_slice(&anti_key.to_ne_bytes());
    }

    proptest! {
        /// For an arbitrary cold boot, the probability that `is_valid()`
        /// returns true should be ~2^-64. Exhaustively trying every key
        /// pair is infeasible; this samples broadly (uniform random, plus
        /// the deliberately adversarial all-zero/all-one/alternating
        /// patterns proptest's shrinker gravitates towards) and asserts
        /// the only pair that validates is the real one.
        #[test]
        fn only_the_real_key_pair_validates(key in any::<u32>(), anti_key in any::<u32>()) {
            let mut record = DumpRecord::cleared();
            set_keys(&mut record, key, anti_key);

            let should_be_valid = key == KEY_SENTINEL && anti_key == !KEY_SENTINEL;
            prop_assert_eq!(record.is_valid(), should_be_valid);
        }
    }

    #[test]
    fn named_adversarial_patterns_are_rejected() {
        let patterns: [(u32, u32); 4] = [(0, 0), (0xFFFF_FFFF, 0xFFFF_FFFF), (0xAAAA_AAAA, 0xAAAA_AAAA), (KEY_SENTINEL, 0)];
        for (key, anti_key) in patterns {
            let mut record = DumpRecord::cleared();
            set_keys(&mut record, key, anti_key);
            assert!(!record.is_valid(), "pattern ({key:#x}, {anti_key:#x}) incorrectly validated");
        }
    }
}
