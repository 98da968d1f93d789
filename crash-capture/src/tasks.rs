//! Multi-task backtrace capture (`multitask` feature): walks every other
//! task's saved stack in addition to the one the fault happened on, for
//! targets running a cooperative or preemptive scheduler the RTOS
//! integration knows about.
//!
//! With `OS_TASKCNT` tasks indexed `0..OS_TASKCNT`, an inclusive loop bound
//! would read one element past the table; [`capture_tasks`] uses the
//! exclusive bound instead.

use crate::profile::{WalkProfile, CALL_STACK_SIZE, OS_TASKCNT};
use crate::record::DumpRecord;
use crate::walker::{scan_walk, StackMemory};

/// A scheduler's view of its own task table: for each task index, the
/// saved stack pointer to walk. Kept separate from `StackMemory` because
/// the two vary independently — a target's RTOS integration supplies this,
/// while `StackMemory` stays whatever the platform profile already uses.
pub trait TaskTable {
    /// The saved stack pointer for `task`, or `None` if `task` is not a
    /// live task index (including out of range).
    fn saved_stack_pointer(&self, task: usize) -> Option<u32>;
}

/// Walks every task's saved stack into `record.task_backtraces`. Only
/// ever called on the hardware-exception path, after the active task's own
/// backtrace has already been captured by [`crate::capture::capture_into`];
/// this function does not touch `active_backtrace` or any of the
/// validity/classification fields.
pub fn capture_tasks(record: &mut DumpRecord, tasks: &dyn TaskTable, mem: &dyn StackMemory, profile: &WalkProfile) {
    for t in 0..OS_TASKCNT {
        let mut out = [0u32; CALL_STACK_SIZE];
        if let Some(sp) = tasks.saved_stack_pointer(t) {
            scan_walk(sp, profile, mem, &mut out);
        }
        record.task_backtraces[t] = out;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedMemory<'a> {
        base: u32,
        words: &'a [u32],
    }

    impl StackMemory for FixedMemory<'_> {
        fn read_word(&self, addr: u32) -> Option<u32> {
            if addr % 4 != 0 || addr < self.base {
                return None;
            }
            let idx = ((addr - self.base) / 4) as usize;
            self.words.get(idx).copied()
        }
    }

    struct FixedTasks<'a>(&'a [Option<u32>]);

    impl TaskTable for FixedTasks<'_> {
        fn saved_stack_pointer(&self, task: usize) -> Option<u32> {
            self.0.get(task).copied().flatten()
        }
    }

    fn profile() -> WalkProfile {
        WalkProfile { ram_begin: 0x2000_0000, ram_end: 0x2000_1000, code_begin: 0x0040_0000, code_end: 0x0060_0000, stack_grows_down: true }
    }

    #[test]
    fn only_tasks_with_a_saved_pointer_produce_a_nonempty_backtrace() {
        let mem = FixedMemory { base: 0x2000_0000, words: &[0xEFEF_EFEF, 0xEFEF_EFEF] };
        let tasks = FixedTasks(&[Some(0x2000_0000), None]);
        let mut record = DumpRecord::cleared();
        capture_tasks(&mut record, &tasks, &mem, &profile());

        assert_eq!(record.task_backtrace(0), Some(&[0u32; CALL_STACK_SIZE]));
        assert_eq!(record.task_backtrace(1), Some(&[0u32; CALL_STACK_SIZE]));
    }

    #[test]
    fn walk_covers_exactly_os_taskcnt_tasks() {
        let mem = FixedMemory { base: 0x2000_0000, words: &[] };
        let tasks = FixedTasks(&[]);
        let mut record = DumpRecord::cleared();
        capture_tasks(&mut record, &tasks, &mem, &profile());

        assert_eq!(record.task_backtraces().len(), OS_TASKCNT);
        assert!(record.task_backtrace(OS_TASKCNT).is_none());
    }
}
