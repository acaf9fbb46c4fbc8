//! Run summary and coverage metrics.
//!
//! Aggregates per-task placement results into the totals a caller derives
//! coverage percentages and warnings from. The engine reports; presentation
//! stays outside.

use serde::{Deserialize, Serialize};

use crate::engine::placer::{PlacementResult, PlacerState};

/// An under-placed task: required hours were not fully covered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskShortfall {
    /// Class of the task.
    pub class_id: String,
    /// Lesson of the task.
    pub lesson_id: String,
    /// Teacher of the task.
    pub teacher_id: String,
    /// Hours the curriculum requires.
    pub required: u32,
    /// Hours actually placed.
    pub placed: u32,
}

/// Why a task never reached the placer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The assignment references a teacher the provider did not list.
    MissingTeacher,
    /// The assignment references a lesson the provider did not list.
    MissingLesson,
    /// No curriculum entry exists for (lesson, grade).
    MissingCurriculum,
    /// The curriculum requires zero weekly hours.
    ZeroHours,
}

/// A task skipped before placement, with its reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedTask {
    /// Class of the skipped assignment.
    pub class_id: String,
    /// Lesson of the skipped assignment.
    pub lesson_id: String,
    /// Teacher of the skipped assignment.
    pub teacher_id: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Totals for one generation run.
///
/// Skipped tasks contribute nothing to `total_required_hours`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Sum of required hours across attempted tasks.
    pub total_required_hours: u32,
    /// Sum of placed hours across attempted tasks.
    pub total_placed_hours: u32,
    /// Tasks whose placed hours fell short of required.
    pub under_placed: Vec<TaskShortfall>,
    /// Tasks skipped for incomplete data or zero hours.
    pub skipped: Vec<SkippedTask>,
}

impl ScheduleSummary {
    /// Builds a summary from placement results and recorded skips.
    pub fn from_results(results: &[PlacementResult], skipped: Vec<SkippedTask>) -> Self {
        let mut summary = Self {
            skipped,
            ..Self::default()
        };
        for result in results {
            summary.total_required_hours += result.task.required_hours;
            summary.total_placed_hours += result.placed_hours;
            if result.shortfall() > 0 {
                summary.under_placed.push(TaskShortfall {
                    class_id: result.task.class_id.clone(),
                    lesson_id: result.task.lesson_id.clone(),
                    teacher_id: result.task.teacher_id.clone(),
                    required: result.task.required_hours,
                    placed: result.placed_hours,
                });
            }
        }
        summary
    }

    /// Placed ÷ required as a percentage (100.0 when nothing was required).
    pub fn coverage(&self) -> f64 {
        if self.total_required_hours == 0 {
            100.0
        } else {
            self.total_placed_hours as f64 / self.total_required_hours as f64 * 100.0
        }
    }

    /// Whether every attempted task was fully placed.
    pub fn is_complete(&self) -> bool {
        self.under_placed.is_empty()
    }
}

/// Counts of terminal placer states across a run.
pub fn state_counts(results: &[PlacementResult]) -> (usize, usize, usize) {
    let mut satisfied = 0;
    let mut partial = 0;
    let mut failed = 0;
    for r in results {
        match r.state {
            PlacerState::Satisfied => satisfied += 1,
            PlacerState::Partial => partial += 1,
            PlacerState::Failed => failed += 1,
            // Non-terminal states never appear in results
            PlacerState::Planning | PlacerState::Attempting => {}
        }
    }
    (satisfied, partial, failed)
}
