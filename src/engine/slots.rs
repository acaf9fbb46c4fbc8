//! Slot search within a single day.
//!
//! Finds concrete slot indices for one block, contiguous-first with a
//! scattered fallback. The fallback is the relaxation that lets later
//! placement tiers achieve partial coverage instead of failing outright.
//!
//! # Algorithm
//! 1. Scan start offsets `0..=slots_per_day - block` ascending; return the
//!    first offset where all `block` consecutive slots are class-free.
//!    Earliest contiguous run wins — this is the canonical tie-break.
//! 2. If no contiguous run exists, scan all slots ascending and collect up
//!    to `block` individually free slots; return them only if `block` were
//!    found.
//!
//! Only class occupancy is checked here. Teacher availability and the
//! daily cap are verified by the placer before commit.

use crate::engine::ConstraintChecker;
use crate::models::Ledger;
use crate::provider::DataProvider;

/// Finds `block` slot indices for `class_id` on `day`, or empty.
pub fn find_block_slots<P: DataProvider>(
    checker: &ConstraintChecker<'_, P>,
    ledger: &Ledger,
    class_id: &str,
    day: usize,
    block: usize,
    slots_per_day: usize,
) -> Vec<usize> {
    if block == 0 || block > slots_per_day {
        return Vec::new();
    }

    // Contiguous pass: earliest run wins.
    for start in 0..=slots_per_day - block {
        let run_free = (start..start + block)
            .all(|slot| checker.class_free(ledger, day, slot, class_id));
        if run_free {
            return (start..start + block).collect();
        }
    }

    // Scattered fallback: any free slots in ascending order.
    let mut found = Vec::with_capacity(block);
    for slot in 0..slots_per_day {
        if checker.class_free(ledger, day, slot, class_id) {
            found.push(slot);
            if found.len() == block {
                return found;
            }
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AvailabilityPolicy;
    use crate::models::{ScheduleEntry, Teacher};
    use crate::provider::MemoryProvider;

    fn setup() -> MemoryProvider {
        MemoryProvider::new().with_teacher(Teacher::new("t1"))
    }

    fn book(ledger: &mut Ledger, class_id: &str, day: usize, slot: usize) {
        ledger.commit(ScheduleEntry::new(class_id, "t1", "math", day, slot));
    }

    #[test]
    fn test_earliest_contiguous_run_wins() {
        let provider = setup();
        let checker = ConstraintChecker::new(&provider, AvailabilityPolicy::Strict);
        let ledger = Ledger::new();

        assert_eq!(
            find_block_slots(&checker, &ledger, "c1", 0, 2, 6),
            vec![0, 1]
        );
    }

    #[test]
    fn test_contiguous_skips_booked_runs() {
        let provider = setup();
        let checker = ConstraintChecker::new(&provider, AvailabilityPolicy::Strict);
        let mut ledger = Ledger::new();
        book(&mut ledger, "c1", 0, 1);

        // Slot 1 booked: [0,1] and [1,2] blocked, earliest run is [2,3]
        assert_eq!(
            find_block_slots(&checker, &ledger, "c1", 0, 2, 6),
            vec![2, 3]
        );
    }

    #[test]
    fn test_scattered_fallback() {
        let provider = setup();
        let checker = ConstraintChecker::new(&provider, AvailabilityPolicy::Strict);
        let mut ledger = Ledger::new();
        // Free slots: 0, 2, 4 — no contiguous pair anywhere
        for slot in [1, 3, 5] {
            book(&mut ledger, "c1", 0, slot);
        }

        assert_eq!(
            find_block_slots(&checker, &ledger, "c1", 0, 2, 6),
            vec![0, 2]
        );
    }

    #[test]
    fn test_insufficient_free_slots_empty() {
        let provider = setup();
        let checker = ConstraintChecker::new(&provider, AvailabilityPolicy::Strict);
        let mut ledger = Ledger::new();
        for slot in 0..5 {
            book(&mut ledger, "c1", 0, slot);
        }

        // Only slot 5 free, need 2
        assert!(find_block_slots(&checker, &ledger, "c1", 0, 2, 6).is_empty());
        assert_eq!(find_block_slots(&checker, &ledger, "c1", 0, 1, 6), vec![5]);
    }

    #[test]
    fn test_block_larger_than_day_empty() {
        let provider = setup();
        let checker = ConstraintChecker::new(&provider, AvailabilityPolicy::Strict);
        let ledger = Ledger::new();

        assert!(find_block_slots(&checker, &ledger, "c1", 0, 7, 6).is_empty());
        assert!(find_block_slots(&checker, &ledger, "c1", 0, 0, 6).is_empty());
    }

    #[test]
    fn test_other_class_bookings_ignored() {
        let provider = setup();
        let checker = ConstraintChecker::new(&provider, AvailabilityPolicy::Strict);
        let mut ledger = Ledger::new();
        book(&mut ledger, "c2", 0, 0);

        // c2's booking does not block c1 at the class-occupancy level
        assert_eq!(
            find_block_slots(&checker, &ledger, "c1", 0, 2, 6),
            vec![0, 1]
        );
    }
}
