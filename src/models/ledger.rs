//! Run-scoped placement ledger.
//!
//! The ledger collects every [`ScheduleEntry`] committed during one
//! generation run. It is append-only: entries are never mutated or removed,
//! and a new run starts from a fresh ledger.
//!
//! Alongside the entry list it maintains occupancy indexes so the
//! constraint checker answers "is this cell free" in O(1):
//! a class-cell set, a teacher-cell set, and per-`(teacher, day)` hour
//! counts.

use std::collections::{HashMap, HashSet};

use super::ScheduleEntry;

/// Append-only collection of placed entries with occupancy indexes.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<ScheduleEntry>,
    class_cells: HashSet<(String, usize, usize)>,
    teacher_cells: HashSet<(String, usize, usize)>,
    teacher_day_hours: HashMap<(String, usize), u32>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and updates the occupancy indexes.
    ///
    /// The ledger itself does not reject double-bookings; callers are
    /// expected to check [`is_class_booked`](Self::is_class_booked) and
    /// [`is_teacher_booked`](Self::is_teacher_booked) first. Keeping commit
    /// unconditional lets the conflict detector be tested against
    /// deliberately corrupt ledgers.
    pub fn commit(&mut self, entry: ScheduleEntry) {
        self.class_cells
            .insert((entry.class_id.clone(), entry.day, entry.slot));
        self.teacher_cells
            .insert((entry.teacher_id.clone(), entry.day, entry.slot));
        *self
            .teacher_day_hours
            .entry((entry.teacher_id.clone(), entry.day))
            .or_insert(0) += 1;
        self.entries.push(entry);
    }

    /// Whether a class already occupies `(day, slot)`.
    pub fn is_class_booked(&self, class_id: &str, day: usize, slot: usize) -> bool {
        self.class_cells
            .contains(&(class_id.to_string(), day, slot))
    }

    /// Whether a teacher already occupies `(day, slot)`.
    pub fn is_teacher_booked(&self, teacher_id: &str, day: usize, slot: usize) -> bool {
        self.teacher_cells
            .contains(&(teacher_id.to_string(), day, slot))
    }

    /// Hours already placed for a teacher on a day.
    pub fn teacher_hours_on_day(&self, teacher_id: &str, day: usize) -> u32 {
        self.teacher_day_hours
            .get(&(teacher_id.to_string(), day))
            .copied()
            .unwrap_or(0)
    }

    /// All committed entries, in commit order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Number of committed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the ledger, returning the entries in commit order.
    pub fn into_entries(self) -> Vec<ScheduleEntry> {
        self.entries
    }
}
