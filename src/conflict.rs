//! Residual conflict detection and best-effort resolution.
//!
//! The constraint checker's fail-closed commits should keep the ledger
//! conflict-free; this module is defense-in-depth that re-verifies the
//! finished ledger and, optionally, repairs what it finds. It recovers
//! from upstream bugs — it is not a correctness mechanism the engine
//! relies on.
//!
//! # Detection
//! One O(n) pass over the entries builds two key→first-entry maps, keyed
//! by `(teacher, day, slot)` and `(class, day, slot)`. A repeated key
//! yields a [`Conflict`] of the matching kind, in entry iteration order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::{find_block_slots, ConstraintChecker};
use crate::models::{CalendarConfig, Conflict, ConflictKind, Ledger, ScheduleEntry};
use crate::provider::DataProvider;

/// Scans entries for residual double-bookings.
///
/// Pure, no mutation; conflict order follows entry order. An entry that
/// collides on both keys yields two conflicts.
pub fn scan_all(entries: &[ScheduleEntry]) -> Vec<Conflict> {
    let mut by_teacher: HashMap<(String, usize, usize), &ScheduleEntry> = HashMap::new();
    let mut by_class: HashMap<(String, usize, usize), &ScheduleEntry> = HashMap::new();
    let mut conflicts = Vec::new();

    for entry in entries {
        let teacher_key = (entry.teacher_id.clone(), entry.day, entry.slot);
        match by_teacher.get(&teacher_key) {
            Some(first) => conflicts.push(Conflict {
                kind: ConflictKind::TeacherDoubleBooking,
                entry_a: (*first).clone(),
                entry_b: entry.clone(),
            }),
            None => {
                by_teacher.insert(teacher_key, entry);
            }
        }

        let class_key = (entry.class_id.clone(), entry.day, entry.slot);
        match by_class.get(&class_key) {
            Some(first) => conflicts.push(Conflict {
                kind: ConflictKind::ClassDoubleBooking,
                entry_a: (*first).clone(),
                entry_b: entry.clone(),
            }),
            None => {
                by_class.insert(class_key, entry);
            }
        }
    }

    conflicts
}

/// Counts from one resolution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionStats {
    /// Entries moved to a conflict-free cell.
    pub relocated: usize,
    /// Entries removed because no free cell existed.
    pub dropped: usize,
}

impl ResolutionStats {
    /// Total conflicts acted on.
    pub fn resolved(&self) -> usize {
        self.relocated + self.dropped
    }
}

/// Best-effort repair: relocate or drop the later entry of each collision.
///
/// Entries are replayed in order against a fresh ledger. The first entry
/// at a cell always stays; a colliding later entry is moved to the
/// earliest day/slot that passes the class, teacher, and cap checks, or
/// dropped when none exists. Returns the repaired entries (order of kept
/// entries preserved) and the action counts.
pub fn resolve_conflicts<P: DataProvider>(
    entries: Vec<ScheduleEntry>,
    checker: &ConstraintChecker<'_, P>,
    calendar: CalendarConfig,
    daily_cap: Option<u32>,
) -> (Vec<ScheduleEntry>, ResolutionStats) {
    let mut kept = Ledger::new();
    let mut stats = ResolutionStats::default();

    for entry in entries {
        let collides = kept.is_class_booked(&entry.class_id, entry.day, entry.slot)
            || kept.is_teacher_booked(&entry.teacher_id, entry.day, entry.slot);
        if !collides {
            kept.commit(entry);
            continue;
        }

        match relocation_target(&entry, &kept, checker, calendar, daily_cap) {
            Some((day, slot)) => {
                let mut moved = entry;
                moved.day = day;
                moved.slot = slot;
                kept.commit(moved);
                stats.relocated += 1;
            }
            None => {
                warn!(
                    class = %entry.class_id,
                    teacher = %entry.teacher_id,
                    day = entry.day,
                    slot = entry.slot,
                    "dropping unresolvable conflicting entry"
                );
                stats.dropped += 1;
            }
        }
    }

    (kept.into_entries(), stats)
}

/// Earliest free cell for a displaced entry, if any.
fn relocation_target<P: DataProvider>(
    entry: &ScheduleEntry,
    kept: &Ledger,
    checker: &ConstraintChecker<'_, P>,
    calendar: CalendarConfig,
    daily_cap: Option<u32>,
) -> Option<(usize, usize)> {
    for day in 0..calendar.days {
        let slots = find_block_slots(
            checker,
            kept,
            &entry.class_id,
            day,
            1,
            calendar.slots_per_day,
        );
        let Some(&slot) = slots.first() else {
            continue;
        };
        if !checker.teacher_free(kept, day, slot, &entry.teacher_id) {
            continue;
        }
        let under_cap = match daily_cap {
            Some(cap) => checker.teacher_under_daily_cap(kept, &entry.teacher_id, day, 1, cap),
            None => true,
        };
        if under_cap {
            return Some((day, slot));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AvailabilityPolicy;
    use crate::models::Teacher;
    use crate::provider::MemoryProvider;

    #[test]
    fn test_scan_clean_ledger_no_conflicts() {
        let entries = vec![
            ScheduleEntry::new("c1", "t1", "math", 0, 0),
            ScheduleEntry::new("c1", "t1", "math", 0, 1),
            ScheduleEntry::new("c2", "t2", "art", 0, 0),
        ];
        assert!(scan_all(&entries).is_empty());
    }

    #[test]
    fn test_scan_teacher_double_booking() {
        // Two classes, same teacher, same cell
        let entries = vec![
            ScheduleEntry::new("c1", "t1", "math", 1, 2),
            ScheduleEntry::new("c2", "t1", "math", 1, 2),
        ];
        let conflicts = scan_all(&entries);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::TeacherDoubleBooking);
        assert_eq!(conflicts[0].entry_a.class_id, "c1");
        assert_eq!(conflicts[0].entry_b.class_id, "c2");
    }

    #[test]
    fn test_scan_class_double_booking() {
        let entries = vec![
            ScheduleEntry::new("c1", "t1", "math", 0, 0),
            ScheduleEntry::new("c1", "t2", "art", 0, 0),
        ];
        let conflicts = scan_all(&entries);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::ClassDoubleBooking);
    }

    #[test]
    fn test_scan_both_kinds_from_one_pair() {
        // Identical class and teacher in the same cell: two conflicts
        let entries = vec![
            ScheduleEntry::new("c1", "t1", "math", 0, 0),
            ScheduleEntry::new("c1", "t1", "art", 0, 0),
        ];
        let conflicts = scan_all(&entries);
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].kind, ConflictKind::TeacherDoubleBooking);
        assert_eq!(conflicts[1].kind, ConflictKind::ClassDoubleBooking);
    }

    #[test]
    fn test_resolver_relocates() {
        let provider = MemoryProvider::new()
            .with_teacher(Teacher::new("t1"))
            .with_teacher(Teacher::new("t2"));
        let checker = ConstraintChecker::new(&provider, AvailabilityPolicy::Strict);
        let calendar = CalendarConfig::new(6);

        let entries = vec![
            ScheduleEntry::new("c1", "t1", "math", 0, 0),
            ScheduleEntry::new("c1", "t2", "art", 0, 0), // class collision
        ];
        let (repaired, stats) = resolve_conflicts(entries, &checker, calendar, Some(7));

        assert_eq!(stats.relocated, 1);
        assert_eq!(stats.dropped, 0);
        assert_eq!(repaired.len(), 2);
        assert!(scan_all(&repaired).is_empty());
        // Relocated entry kept its identity, only the cell moved
        assert_eq!(repaired[1].lesson_id, "art");
        assert_ne!((repaired[1].day, repaired[1].slot), (0, 0));
    }

    #[test]
    fn test_resolver_drops_when_no_cell_free() {
        // Teacher t2 is available nowhere, so the collision cannot move
        let provider = MemoryProvider::new()
            .with_teacher(Teacher::new("t1"))
            .with_teacher(Teacher::new("t2").available_only_at(&[(0, 0)], 5, 6));
        let checker = ConstraintChecker::new(&provider, AvailabilityPolicy::Strict);
        let calendar = CalendarConfig::new(6);

        let entries = vec![
            ScheduleEntry::new("c1", "t1", "math", 0, 0),
            ScheduleEntry::new("c1", "t2", "art", 0, 0),
        ];
        let (repaired, stats) = resolve_conflicts(entries, &checker, calendar, Some(7));

        assert_eq!(stats.dropped, 1);
        assert_eq!(repaired.len(), 1);
        assert_eq!(repaired[0].lesson_id, "math");
    }

    #[test]
    fn test_resolver_keeps_clean_entries_untouched() {
        let provider = MemoryProvider::new().with_teacher(Teacher::new("t1"));
        let checker = ConstraintChecker::new(&provider, AvailabilityPolicy::Strict);
        let calendar = CalendarConfig::new(6);

        let entries = vec![
            ScheduleEntry::new("c1", "t1", "math", 0, 0),
            ScheduleEntry::new("c1", "t1", "math", 1, 0),
        ];
        let (repaired, stats) = resolve_conflicts(entries.clone(), &checker, calendar, Some(7));
        assert_eq!(stats.resolved(), 0);
        assert_eq!(repaired, entries);
    }
}
