//! Weekly timetable engine for school classes.
//!
//! Places weekly lessons into a fixed 5-day grid given pre-decided
//! (class, lesson, teacher) assignments and per-lesson weekly hour
//! requirements. Deciding who teaches what, allocating real classrooms,
//! and persisting results stay with the caller, reached through the
//! [`provider`] traits.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ClassGroup`, `Teacher`, `Lesson`,
//!   `LessonAssignment`, `ScheduleEntry`, `Ledger`, `CalendarConfig`
//! - **`engine`**: The placement pipeline — constraint checking, block
//!   planning, slot search, tiered placement, run orchestration
//! - **`conflict`**: Final double-booking scan and best-effort resolution
//! - **`provider`**: Read/write seams to the caller's data store
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   assignment references)
//!
//! # Example
//!
//! ```
//! use classgrid::engine::ScheduleBuilder;
//! use classgrid::models::{ClassGroup, CurriculumEntry, Lesson, LessonAssignment, Teacher};
//! use classgrid::provider::MemoryProvider;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let provider = MemoryProvider::new()
//!     .with_school_type("middle")
//!     .with_class(ClassGroup::new("7b", 7).with_name("7-B"))
//!     .with_teacher(Teacher::new("kim").with_subject("Math"))
//!     .with_lesson(Lesson::new("math").with_name("Mathematics"))
//!     .with_assignment(LessonAssignment::new("7b", "math", "kim"))
//!     .with_curriculum(CurriculumEntry::new("math", 7, 4));
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let outcome = ScheduleBuilder::new(&provider).build(&mut rng).unwrap();
//! assert_eq!(outcome.summary.total_placed_hours, 4);
//! assert!(outcome.conflicts.is_empty());
//! ```

pub mod conflict;
pub mod engine;
pub mod models;
pub mod provider;
pub mod validation;
