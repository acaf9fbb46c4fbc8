//! Teacher model and availability grid.
//!
//! A teacher's weekly availability is a sparse grid: only slots that were
//! explicitly marked (available or unavailable) carry a record.
//!
//! # Default Policy
//! A `(day, slot)` with no record is **available**. Absence of a key means
//! "no restriction recorded", not "never free". Callers that need to fail
//! closed on lookup *errors* (as opposed to missing records) do so through
//! [`AvailabilityPolicy`](crate::engine::AvailabilityPolicy).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A teacher who can be assigned lesson slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Subject taught (informational; assignments are a separate input).
    pub subject: String,
    /// Sparse availability records: `(day, slot)` → explicitly marked state.
    /// Missing entries default to available.
    pub availability: HashMap<(usize, usize), bool>,
}

impl Teacher {
    /// Creates a new teacher with an empty (fully available) grid.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subject: String::new(),
            availability: HashMap::new(),
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Marks a slot explicitly unavailable.
    pub fn with_unavailable(mut self, day: usize, slot: usize) -> Self {
        self.availability.insert((day, slot), false);
        self
    }

    /// Marks a slot explicitly available.
    pub fn with_available(mut self, day: usize, slot: usize) -> Self {
        self.availability.insert((day, slot), true);
        self
    }

    /// Marks every slot outside the given list unavailable.
    ///
    /// Convenience for "only free at these times" setups: the listed
    /// `(day, slot)` pairs become explicitly available, everything else in
    /// the `days × slots_per_day` grid explicitly unavailable.
    pub fn available_only_at(mut self, free: &[(usize, usize)], days: usize, slots_per_day: usize) -> Self {
        for day in 0..days {
            for slot in 0..slots_per_day {
                self.availability.insert((day, slot), false);
            }
        }
        for &(day, slot) in free {
            self.availability.insert((day, slot), true);
        }
        self
    }

    /// Whether this teacher is available at `(day, slot)`.
    ///
    /// Missing records default to available.
    pub fn is_available(&self, day: usize, slot: usize) -> bool {
        self.availability.get(&(day, slot)).copied().unwrap_or(true)
    }
}
