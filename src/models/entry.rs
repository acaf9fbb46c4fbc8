//! Schedule entry and conflict models.
//!
//! [`ScheduleEntry`] is the single record shape used everywhere in the
//! engine and its interfaces: one placed lesson hour in one grid cell.
//!
//! # Invariants
//! A valid ledger never holds two entries sharing `(class_id, day, slot)`
//! or `(teacher_id, day, slot)`. The constraint checker enforces this at
//! commit time; [`crate::conflict`] re-verifies it after the run.

use serde::{Deserialize, Serialize};

/// Placeholder classroom id used until a caller layers real room
/// allocation on top.
pub const DEFAULT_CLASSROOM_ID: &str = "unassigned";

/// One placed lesson hour: a `(class, teacher, lesson)` triple pinned to a
/// grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Class attending.
    pub class_id: String,
    /// Teacher delivering.
    pub teacher_id: String,
    /// Lesson taught.
    pub lesson_id: String,
    /// Room placeholder (see [`DEFAULT_CLASSROOM_ID`]).
    pub classroom_id: String,
    /// Grid day (0-indexed).
    pub day: usize,
    /// Grid slot within the day (0-indexed).
    pub slot: usize,
}

impl ScheduleEntry {
    /// Creates an entry with the placeholder classroom.
    pub fn new(
        class_id: impl Into<String>,
        teacher_id: impl Into<String>,
        lesson_id: impl Into<String>,
        day: usize,
        slot: usize,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            teacher_id: teacher_id.into(),
            lesson_id: lesson_id.into(),
            classroom_id: DEFAULT_CLASSROOM_ID.into(),
            day,
            slot,
        }
    }

    /// Sets the classroom id.
    pub fn with_classroom(mut self, classroom_id: impl Into<String>) -> Self {
        self.classroom_id = classroom_id.into();
        self
    }
}

/// Classification of a residual double-booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Two entries put the same class in the same cell.
    ClassDoubleBooking,
    /// Two entries put the same teacher in the same cell.
    TeacherDoubleBooking,
}

/// A residual double-booking found by the final ledger scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// What kind of double-booking this is.
    pub kind: ConflictKind,
    /// The entry committed first.
    pub entry_a: ScheduleEntry,
    /// The later entry that collides with it.
    pub entry_b: ScheduleEntry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_defaults() {
        let e = ScheduleEntry::new("c1", "t1", "math", 2, 3);
        assert_eq!(e.classroom_id, DEFAULT_CLASSROOM_ID);
        assert_eq!(e.day, 2);
        assert_eq!(e.slot, 3);
    }

    #[test]
    fn test_entry_with_classroom() {
        let e = ScheduleEntry::new("c1", "t1", "math", 0, 0).with_classroom("room-101");
        assert_eq!(e.classroom_id, "room-101");
    }

    #[test]
    fn test_entry_json_roundtrip() {
        let e = ScheduleEntry::new("c1", "t1", "math", 1, 4);
        let json = serde_json::to_string(&e).unwrap();
        let back: ScheduleEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
