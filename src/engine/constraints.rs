//! Constraint predicates over an in-progress ledger.
//!
//! Three pure queries guard every commit: the class cell must be free, the
//! teacher cell must be free (ledger *and* availability), and the teacher
//! must stay under the daily hour cap.
//!
//! # Fail-Closed
//! None of these queries panic or surface errors. A failing availability
//! lookup maps through [`AvailabilityPolicy`]; everything else missing
//! answers "not free".

use serde::{Deserialize, Serialize};

use crate::models::Ledger;
use crate::provider::DataProvider;

/// Default per-teacher daily hour cap.
pub const DEFAULT_DAILY_CAP: u32 = 7;

/// What to assume when an availability lookup itself fails.
///
/// This replaces the source system's silently-caught "assume available"
/// exception handler with an explicit choice. Missing availability
/// *records* are a separate concern and always default to available
/// (see [`crate::models::Teacher::is_available`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityPolicy {
    /// A failing lookup counts as unavailable (fail closed).
    #[default]
    Strict,
    /// A failing lookup counts as available.
    PermissiveOnError,
}

/// Pure constraint queries over a ledger snapshot.
///
/// Holds a provider reference for availability lookups; all scheduling
/// state lives in the ledger passed to each call.
#[derive(Debug)]
pub struct ConstraintChecker<'a, P: DataProvider> {
    provider: &'a P,
    policy: AvailabilityPolicy,
}

impl<'a, P: DataProvider> ConstraintChecker<'a, P> {
    /// Creates a checker over the given provider.
    pub fn new(provider: &'a P, policy: AvailabilityPolicy) -> Self {
        Self { provider, policy }
    }

    /// Whether the class has no entry at `(day, slot)`.
    pub fn class_free(&self, ledger: &Ledger, day: usize, slot: usize, class_id: &str) -> bool {
        !ledger.is_class_booked(class_id, day, slot)
    }

    /// Whether the teacher can take `(day, slot)`.
    ///
    /// False when the ledger already holds a `(teacher, day, slot)` entry
    /// or the teacher is marked unavailable there. Lookup failures map
    /// through the configured [`AvailabilityPolicy`].
    pub fn teacher_free(&self, ledger: &Ledger, day: usize, slot: usize, teacher_id: &str) -> bool {
        if ledger.is_teacher_booked(teacher_id, day, slot) {
            return false;
        }
        match self.provider.is_teacher_available(teacher_id, day, slot) {
            Ok(available) => available,
            Err(_) => matches!(self.policy, AvailabilityPolicy::PermissiveOnError),
        }
    }

    /// Whether placing `extra` more hours keeps the teacher at or under
    /// `cap` for the day.
    pub fn teacher_under_daily_cap(
        &self,
        ledger: &Ledger,
        teacher_id: &str,
        day: usize,
        extra: u32,
        cap: u32,
    ) -> bool {
        ledger.teacher_hours_on_day(teacher_id, day) + extra <= cap
    }
}
