//! Placement engine.
//!
//! The pipeline, leaves first:
//!
//! - **constraints**: pure predicates over the in-progress ledger.
//! - **blocks**: weekly hours → ordered block sizes.
//! - **slots**: concrete slot indices for one block on one day.
//! - **placer**: per-task tiered retry ladder.
//! - **builder**: whole-run orchestration over the data provider.
//! - **summary**: run totals and coverage.
//!
//! One generation run is one sequential pass: the builder owns the ledger,
//! each placer commit is immediately visible to every later task, and the
//! only randomness is the injected rng.

mod blocks;
mod builder;
mod constraints;
mod placer;
mod slots;
mod summary;

pub use blocks::plan_blocks;
pub use builder::{EngineConfig, ScheduleBuilder, ScheduleOutcome};
pub use constraints::{AvailabilityPolicy, ConstraintChecker, DEFAULT_DAILY_CAP};
pub use placer::{LessonPlacer, PlacementResult, PlacementTask, PlacerConfig, PlacerState};
pub use slots::find_block_slots;
pub use summary::{state_counts, ScheduleSummary, SkipReason, SkippedTask, TaskShortfall};
