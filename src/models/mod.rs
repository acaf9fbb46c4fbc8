//! Timetabling domain models.
//!
//! Core data types for the weekly grid, the people and lessons being
//! scheduled, and the placement output.
//!
//! # Shape Discipline
//! Every placed hour is a [`ScheduleEntry`] — there is exactly one record
//! shape for schedule data throughout the crate, in the ledger, the
//! conflict scan, and the sink interface alike.

mod calendar;
mod class_group;
mod entry;
mod ledger;
mod lesson;
mod teacher;

pub use calendar::{CalendarConfig, SchoolType, DAYS_PER_WEEK, DEFAULT_SLOTS_PER_DAY};
pub use class_group::ClassGroup;
pub use entry::{Conflict, ConflictKind, ScheduleEntry, DEFAULT_CLASSROOM_ID};
pub use ledger::Ledger;
pub use lesson::{CurriculumEntry, Lesson, LessonAssignment};
pub use teacher::Teacher;
