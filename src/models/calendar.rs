//! Weekly grid configuration.
//!
//! A timetable is a fixed grid of 5 school days times a per-day slot count.
//! The slot count is derived from the school type: elementary schools run
//! shorter days than high schools.
//!
//! # Grid Model
//! Days and slots are 0-indexed. Day 0 is the first school day of the week;
//! slot 0 is the first period of the day.

use serde::{Deserialize, Serialize};

/// Number of school days in a week.
pub const DAYS_PER_WEEK: usize = 5;

/// Default daily slot count when the school type is unknown.
pub const DEFAULT_SLOTS_PER_DAY: usize = 6;

/// School type, determining the number of daily lesson slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchoolType {
    /// Elementary school: 6 slots per day.
    Elementary,
    /// Middle school: 7 slots per day.
    Middle,
    /// High school: 8 slots per day.
    High,
    /// Unrecognized type: falls back to 6 slots per day.
    Unknown,
}

impl SchoolType {
    /// Parses a school type string as reported by the data provider.
    ///
    /// Matching is case-insensitive and tolerant of surrounding whitespace.
    /// Unrecognized strings map to [`SchoolType::Unknown`]; repeated calls
    /// with the same input always yield the same result.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "elementary" | "primary" => Self::Elementary,
            "middle" | "secondary" => Self::Middle,
            "high" | "lyceum" => Self::High,
            _ => Self::Unknown,
        }
    }

    /// Number of lesson slots per day for this school type.
    pub fn slots_per_day(self) -> usize {
        match self {
            Self::Elementary => 6,
            Self::Middle => 7,
            Self::High => 8,
            Self::Unknown => DEFAULT_SLOTS_PER_DAY,
        }
    }
}

/// Dimensions of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// School days per week (always [`DAYS_PER_WEEK`]).
    pub days: usize,
    /// Lesson slots per day. Always > 0.
    pub slots_per_day: usize,
}

impl CalendarConfig {
    /// Creates a grid with the given slot count.
    ///
    /// A zero slot count is clamped to [`DEFAULT_SLOTS_PER_DAY`] so the
    /// invariant `slots_per_day > 0` holds for any input.
    pub fn new(slots_per_day: usize) -> Self {
        Self {
            days: DAYS_PER_WEEK,
            slots_per_day: if slots_per_day == 0 {
                DEFAULT_SLOTS_PER_DAY
            } else {
                slots_per_day
            },
        }
    }

    /// Derives the grid from a school type string.
    pub fn from_school_type(school_type: &str) -> Self {
        Self::new(SchoolType::parse(school_type).slots_per_day())
    }

    /// Total slot count in the week.
    #[inline]
    pub fn total_slots(&self) -> usize {
        self.days * self.slots_per_day
    }

    /// Whether `(day, slot)` lies inside the grid.
    #[inline]
    pub fn contains(&self, day: usize, slot: usize) -> bool {
        day < self.days && slot < self.slots_per_day
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS_PER_DAY)
    }
}
