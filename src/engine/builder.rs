//! Run orchestration.
//!
//! [`ScheduleBuilder`] owns one generation run: it fetches inputs through
//! the data provider, builds per-class task lists, orders them, runs the
//! placer per task against the shared run-scoped ledger, and finishes with
//! the conflict scan (and optional resolution).
//!
//! # Task Ordering
//! Within a class, tasks are sorted descending by weekly hours (stable, so
//! ties keep provider order): high-demand lessons place first, before the
//! grid fragments.
//!
//! # Failure Semantics
//! A task with a missing teacher, lesson, or curriculum record — or zero
//! weekly hours — is skipped and reported, never aborting the run. An
//! unplaceable task downgrades to partial/failed in its own result.
//! Provider failures from the bulk fetches propagate unchanged.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::conflict::{resolve_conflicts, scan_all, ResolutionStats};
use crate::engine::constraints::{AvailabilityPolicy, ConstraintChecker};
use crate::engine::placer::{LessonPlacer, PlacementResult, PlacementTask, PlacerConfig};
use crate::engine::summary::{ScheduleSummary, SkipReason, SkippedTask};
use crate::models::{CalendarConfig, ClassGroup, Conflict, Ledger, LessonAssignment, ScheduleEntry};
use crate::provider::{DataProvider, ProviderError};

/// Engine-wide configuration for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Placement strategy knobs.
    pub placer: PlacerConfig,
    /// What a failing availability lookup counts as.
    pub availability_policy: AvailabilityPolicy,
    /// Whether to run the best-effort conflict resolver after the scan.
    pub resolve_conflicts: bool,
}

/// Everything one run produces.
///
/// The entries are the caller's to persist; the engine holds no state
/// beyond this value once the run returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Placed entries, in commit order.
    pub entries: Vec<ScheduleEntry>,
    /// Per-task placement results, in attempt order.
    pub placements: Vec<PlacementResult>,
    /// Run totals, shortfalls, and skips.
    pub summary: ScheduleSummary,
    /// Residual conflicts found by the final scan (before any resolution).
    pub conflicts: Vec<Conflict>,
    /// Resolution counts, when the resolver ran.
    pub resolution: Option<ResolutionStats>,
}

/// Orchestrates one timetable generation run.
pub struct ScheduleBuilder<'a, P: DataProvider> {
    provider: &'a P,
    config: EngineConfig,
}

impl<'a, P: DataProvider> ScheduleBuilder<'a, P> {
    /// Creates a builder over the given provider with default config.
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            config: EngineConfig::default(),
        }
    }

    /// Sets the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs one full generation pass.
    ///
    /// Single-threaded and synchronous; the ledger lives and dies inside
    /// this call. Randomness comes only from the injected `rng`, so a
    /// seeded rng reproduces the run exactly.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ScheduleOutcome, ProviderError> {
        let calendar = CalendarConfig::from_school_type(&self.provider.school_type()?);
        let classes = self.provider.list_classes()?;
        let teacher_ids: HashSet<String> = self
            .provider
            .list_teachers()?
            .into_iter()
            .map(|t| t.id)
            .collect();
        let lesson_ids: HashSet<String> = self
            .provider
            .list_lessons()?
            .into_iter()
            .map(|l| l.id)
            .collect();
        let assignments = self.provider.list_assignments()?;

        info!(
            classes = classes.len(),
            teachers = teacher_ids.len(),
            assignments = assignments.len(),
            slots_per_day = calendar.slots_per_day,
            "starting timetable generation"
        );

        let checker = ConstraintChecker::new(self.provider, self.config.availability_policy);
        let mut ledger = Ledger::new();
        let mut placements = Vec::new();
        let mut skipped = Vec::new();

        for class in &classes {
            let tasks = self.class_tasks(class, &assignments, &teacher_ids, &lesson_ids, &mut skipped)?;
            for task in tasks {
                debug!(
                    class = %task.class_id,
                    lesson = %task.lesson_id,
                    hours = task.required_hours,
                    "placing task"
                );
                let placer = LessonPlacer::new(task, self.config.placer, calendar);
                let result = placer.run(&mut ledger, &checker, rng);
                if !result.is_satisfied() {
                    warn!(
                        class = %result.task.class_id,
                        lesson = %result.task.lesson_id,
                        placed = result.placed_hours,
                        required = result.task.required_hours,
                        "task under-placed"
                    );
                }
                placements.push(result);
            }
        }

        let conflicts = scan_all(ledger.entries());
        let (entries, resolution) = if self.config.resolve_conflicts && !conflicts.is_empty() {
            let (repaired, stats) =
                resolve_conflicts(ledger.into_entries(), &checker, calendar, self.config.placer.daily_cap);
            (repaired, Some(stats))
        } else {
            (ledger.into_entries(), None)
        };

        let summary = ScheduleSummary::from_results(&placements, skipped);
        info!(
            placed = summary.total_placed_hours,
            required = summary.total_required_hours,
            conflicts = conflicts.len(),
            "generation finished"
        );

        Ok(ScheduleOutcome {
            entries,
            placements,
            summary,
            conflicts,
            resolution,
        })
    }

    /// Builds the ordered task list for one class, recording skips.
    fn class_tasks(
        &self,
        class: &ClassGroup,
        assignments: &[LessonAssignment],
        teacher_ids: &HashSet<String>,
        lesson_ids: &HashSet<String>,
        skipped: &mut Vec<SkippedTask>,
    ) -> Result<Vec<PlacementTask>, ProviderError> {
        let mut tasks = Vec::new();

        for assignment in assignments.iter().filter(|a| a.class_id == class.id) {
            let skip = |reason: SkipReason| SkippedTask {
                class_id: assignment.class_id.clone(),
                lesson_id: assignment.lesson_id.clone(),
                teacher_id: assignment.teacher_id.clone(),
                reason,
            };

            if !teacher_ids.contains(&assignment.teacher_id) {
                skipped.push(skip(SkipReason::MissingTeacher));
                continue;
            }
            if !lesson_ids.contains(&assignment.lesson_id) {
                skipped.push(skip(SkipReason::MissingLesson));
                continue;
            }
            match self
                .provider
                .weekly_hours_for(&assignment.lesson_id, class.grade)?
            {
                None => skipped.push(skip(SkipReason::MissingCurriculum)),
                Some(0) => skipped.push(skip(SkipReason::ZeroHours)),
                Some(hours) => tasks.push(PlacementTask::new(
                    &assignment.class_id,
                    &assignment.lesson_id,
                    &assignment.teacher_id,
                    hours,
                )),
            }
        }

        // Stable sort: ties keep provider order
        tasks.sort_by(|a, b| b.required_hours.cmp(&a.required_hours));
        Ok(tasks)
    }
}
