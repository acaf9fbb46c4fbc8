//! Per-task lesson placement with a tiered retry ladder.
//!
//! One [`LessonPlacer`] drives one (class, lesson, teacher) task:
//! `Planning → Attempting → {Satisfied, Partial, Failed}`. Each pass plans
//! blocks for the remaining hours, tries them day by day, and commits what
//! the constraint checker accepts. Hours left over re-enter planning at a
//! more permissive tier.
//!
//! # Tiers
//! 1. Paired blocks from the block planner, unused days only.
//! 2. All 1-hour blocks, unused days only.
//! 3. 1-hour blocks on any day, previously used days included.
//!
//! The ladder is bounded by [`PlacerConfig::max_tiers`] and always
//! terminates. Teacher availability is a hard constraint at every tier:
//! permissiveness changes which days and block shapes are tried, never
//! whether an unavailable slot can be taken.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::blocks::plan_blocks;
use crate::engine::constraints::{ConstraintChecker, DEFAULT_DAILY_CAP};
use crate::engine::slots::find_block_slots;
use crate::models::{CalendarConfig, Ledger, ScheduleEntry};
use crate::provider::DataProvider;

/// Placement state for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacerState {
    /// Decomposing remaining hours into blocks.
    Planning,
    /// Trying blocks against the grid.
    Attempting,
    /// Every required hour was placed.
    Satisfied,
    /// Some but not all hours were placed.
    Partial,
    /// No hours could be placed.
    Failed,
}

/// One (class, lesson, teacher) placement task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementTask {
    /// Class receiving the lesson.
    pub class_id: String,
    /// Lesson being placed.
    pub lesson_id: String,
    /// Teacher delivering it.
    pub teacher_id: String,
    /// Weekly hours the curriculum requires.
    pub required_hours: u32,
}

impl PlacementTask {
    /// Creates a new task.
    pub fn new(
        class_id: impl Into<String>,
        lesson_id: impl Into<String>,
        teacher_id: impl Into<String>,
        required_hours: u32,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            lesson_id: lesson_id.into(),
            teacher_id: teacher_id.into(),
            required_hours,
        }
    }
}

/// Outcome of running one task through the ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementResult {
    /// The task this result describes.
    pub task: PlacementTask,
    /// Hours actually committed. Never exceeds `task.required_hours`.
    pub placed_hours: u32,
    /// Terminal state: `Satisfied`, `Partial`, or `Failed`.
    pub state: PlacerState,
}

impl PlacementResult {
    /// Whether every required hour was placed.
    pub fn is_satisfied(&self) -> bool {
        self.state == PlacerState::Satisfied
    }

    /// Hours still missing.
    pub fn shortfall(&self) -> u32 {
        self.task.required_hours - self.placed_hours
    }
}

/// Placement strategy knobs.
///
/// One configuration value replaces the source system's family of
/// near-duplicate scheduler variants: tier count and day-reuse
/// permissiveness are data, not subclasses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacerConfig {
    /// How many ladder tiers to run (1..=3).
    pub max_tiers: u8,
    /// Whether the final tier may revisit days the lesson already uses.
    pub reuse_days_last_tier: bool,
    /// Per-teacher daily hour cap. `None` disables the cap entirely.
    pub daily_cap: Option<u32>,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            max_tiers: 3,
            reuse_days_last_tier: true,
            daily_cap: Some(DEFAULT_DAILY_CAP),
        }
    }
}

/// State machine placing one task against the shared ledger.
#[derive(Debug)]
pub struct LessonPlacer {
    task: PlacementTask,
    config: PlacerConfig,
    calendar: CalendarConfig,
    state: PlacerState,
    used_days: HashSet<usize>,
    placed_hours: u32,
}

impl LessonPlacer {
    /// Creates a placer for one task.
    pub fn new(task: PlacementTask, config: PlacerConfig, calendar: CalendarConfig) -> Self {
        Self {
            task,
            config,
            calendar,
            state: PlacerState::Planning,
            used_days: HashSet::new(),
            placed_hours: 0,
        }
    }

    /// Runs the full tier ladder, committing entries into `ledger`.
    ///
    /// Never panics; always returns a [`PlacementResult`].
    pub fn run<P: DataProvider, R: Rng + ?Sized>(
        mut self,
        ledger: &mut Ledger,
        checker: &ConstraintChecker<'_, P>,
        rng: &mut R,
    ) -> PlacementResult {
        let max_tier = self.config.max_tiers.clamp(1, 3);

        for tier in 1..=max_tier {
            let remaining = self.task.required_hours - self.placed_hours;
            if remaining == 0 {
                break;
            }

            self.state = PlacerState::Planning;
            let blocks = match tier {
                1 => plan_blocks(remaining, rng),
                _ => vec![1; remaining as usize],
            };

            self.state = PlacerState::Attempting;
            self.attempt_pass(&blocks, tier, ledger, checker);
            debug!(
                class = %self.task.class_id,
                lesson = %self.task.lesson_id,
                tier,
                placed = self.placed_hours,
                required = self.task.required_hours,
                "placement tier finished"
            );
        }

        self.state = match self.placed_hours {
            0 if self.task.required_hours > 0 => PlacerState::Failed,
            p if p < self.task.required_hours => PlacerState::Partial,
            _ => PlacerState::Satisfied,
        };

        PlacementResult {
            task: self.task,
            placed_hours: self.placed_hours,
            state: self.state,
        }
    }

    /// One pass over the planned blocks at a given tier.
    ///
    /// A block that finds no acceptable day is dropped for this pass; it
    /// re-enters planning at the next tier as remaining hours.
    fn attempt_pass<P: DataProvider>(
        &mut self,
        blocks: &[u32],
        tier: u8,
        ledger: &mut Ledger,
        checker: &ConstraintChecker<'_, P>,
    ) {
        for &block in blocks {
            for day in self.candidate_days(tier) {
                let slots = find_block_slots(
                    checker,
                    ledger,
                    &self.task.class_id,
                    day,
                    block as usize,
                    self.calendar.slots_per_day,
                );
                if slots.is_empty() {
                    continue;
                }
                if !self.teacher_accepts(&slots, day, ledger, checker) {
                    continue;
                }

                for slot in slots {
                    ledger.commit(ScheduleEntry::new(
                        &self.task.class_id,
                        &self.task.teacher_id,
                        &self.task.lesson_id,
                        day,
                        slot,
                    ));
                }
                self.placed_hours += block;
                self.used_days.insert(day);
                break;
            }
        }
    }

    /// Teacher-side verification for a candidate slot set on one day.
    fn teacher_accepts<P: DataProvider>(
        &self,
        slots: &[usize],
        day: usize,
        ledger: &Ledger,
        checker: &ConstraintChecker<'_, P>,
    ) -> bool {
        let all_free = slots
            .iter()
            .all(|&slot| checker.teacher_free(ledger, day, slot, &self.task.teacher_id));
        if !all_free {
            return false;
        }
        match self.config.daily_cap {
            Some(cap) => checker.teacher_under_daily_cap(
                ledger,
                &self.task.teacher_id,
                day,
                slots.len() as u32,
                cap,
            ),
            None => true,
        }
    }

    /// Candidate days for a tier: unused days ascending; the final tier
    /// appends already-used days when day reuse is enabled.
    fn candidate_days(&self, tier: u8) -> Vec<usize> {
        let unused = (0..self.calendar.days).filter(|d| !self.used_days.contains(d));
        if tier >= 3 && self.config.reuse_days_last_tier {
            let used = (0..self.calendar.days).filter(|d| self.used_days.contains(d));
            unused.chain(used).collect()
        } else {
            unused.collect()
        }
    }
}
