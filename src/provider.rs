//! Data provider and sink interfaces.
//!
//! The engine reads all of its input through [`DataProvider`] and leaves
//! persistence to a [`ScheduleSink`] the caller drives after the run. The
//! engine never writes mid-run; the expected integration is
//! clear-then-bulk-save via [`persist`].
//!
//! [`MemoryProvider`] and [`MemorySink`] are complete in-memory
//! implementations used by the test suite and usable as references for
//! real backends.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{ClassGroup, CurriculumEntry, Lesson, LessonAssignment, ScheduleEntry, Teacher};

/// Failure of an external read or write call.
///
/// Provider failures are propagated to the caller unchanged; the engine
/// performs no internal I/O retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The backing store could not be reached.
    #[error("data store unavailable: {0}")]
    Unavailable(String),
    /// A query failed inside the backing store.
    #[error("query failed: {0}")]
    Query(String),
}

/// Read interface the engine consumes its inputs through.
pub trait DataProvider {
    /// All class groups to schedule.
    fn list_classes(&self) -> Result<Vec<ClassGroup>, ProviderError>;

    /// All teachers, including their availability grids.
    fn list_teachers(&self) -> Result<Vec<Teacher>, ProviderError>;

    /// Point availability lookup for one teacher and grid cell.
    fn is_teacher_available(
        &self,
        teacher_id: &str,
        day: usize,
        slot: usize,
    ) -> Result<bool, ProviderError>;

    /// All lessons.
    fn list_lessons(&self) -> Result<Vec<Lesson>, ProviderError>;

    /// All pre-decided (class, lesson, teacher) assignments.
    fn list_assignments(&self) -> Result<Vec<LessonAssignment>, ProviderError>;

    /// Weekly hour requirement for a lesson at a grade, if the curriculum
    /// defines one.
    fn weekly_hours_for(&self, lesson_id: &str, grade: i32)
        -> Result<Option<u32>, ProviderError>;

    /// School type string, mapped to the grid's slots-per-day.
    fn school_type(&self) -> Result<String, ProviderError>;
}

/// Write interface the caller persists a finished run through.
pub trait ScheduleSink {
    /// Removes all previously persisted schedule entries.
    fn clear_schedule(&mut self) -> Result<(), ProviderError>;

    /// Persists one entry. Returns whether the entry was stored.
    fn save_entry(&mut self, entry: &ScheduleEntry) -> Result<bool, ProviderError>;
}

/// Clear-then-bulk-save boundary helper.
///
/// Returns the number of entries the sink accepted. Stops at the first
/// sink error, leaving retry policy to the caller.
pub fn persist<S: ScheduleSink>(
    sink: &mut S,
    entries: &[ScheduleEntry],
) -> Result<usize, ProviderError> {
    sink.clear_schedule()?;
    let mut saved = 0;
    for entry in entries {
        if sink.save_entry(entry)? {
            saved += 1;
        }
    }
    Ok(saved)
}

/// In-memory [`DataProvider`] built up with `with_*` calls.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    classes: Vec<ClassGroup>,
    teachers: Vec<Teacher>,
    lessons: Vec<Lesson>,
    assignments: Vec<LessonAssignment>,
    curriculum: HashMap<(String, i32), u32>,
    school_type: String,
}

impl MemoryProvider {
    /// Creates an empty provider (school type unknown).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class group.
    pub fn with_class(mut self, class: ClassGroup) -> Self {
        self.classes.push(class);
        self
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a lesson.
    pub fn with_lesson(mut self, lesson: Lesson) -> Self {
        self.lessons.push(lesson);
        self
    }

    /// Adds an assignment.
    pub fn with_assignment(mut self, assignment: LessonAssignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    /// Adds a curriculum entry.
    pub fn with_curriculum(mut self, entry: CurriculumEntry) -> Self {
        self.curriculum
            .insert((entry.lesson_id, entry.grade), entry.weekly_hours);
        self
    }

    /// Sets the school type string.
    pub fn with_school_type(mut self, school_type: impl Into<String>) -> Self {
        self.school_type = school_type.into();
        self
    }
}

impl DataProvider for MemoryProvider {
    fn list_classes(&self) -> Result<Vec<ClassGroup>, ProviderError> {
        Ok(self.classes.clone())
    }

    fn list_teachers(&self) -> Result<Vec<Teacher>, ProviderError> {
        Ok(self.teachers.clone())
    }

    fn is_teacher_available(
        &self,
        teacher_id: &str,
        day: usize,
        slot: usize,
    ) -> Result<bool, ProviderError> {
        let teacher = self
            .teachers
            .iter()
            .find(|t| t.id == teacher_id)
            .ok_or_else(|| ProviderError::Query(format!("unknown teacher '{teacher_id}'")))?;
        Ok(teacher.is_available(day, slot))
    }

    fn list_lessons(&self) -> Result<Vec<Lesson>, ProviderError> {
        Ok(self.lessons.clone())
    }

    fn list_assignments(&self) -> Result<Vec<LessonAssignment>, ProviderError> {
        Ok(self.assignments.clone())
    }

    fn weekly_hours_for(
        &self,
        lesson_id: &str,
        grade: i32,
    ) -> Result<Option<u32>, ProviderError> {
        Ok(self
            .curriculum
            .get(&(lesson_id.to_string(), grade))
            .copied())
    }

    fn school_type(&self) -> Result<String, ProviderError> {
        Ok(self.school_type.clone())
    }
}

/// In-memory [`ScheduleSink`] that records what was saved.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Entries accepted since the last clear.
    pub saved: Vec<ScheduleEntry>,
    /// How many times the schedule was cleared.
    pub clear_count: usize,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScheduleSink for MemorySink {
    fn clear_schedule(&mut self) -> Result<(), ProviderError> {
        self.saved.clear();
        self.clear_count += 1;
        Ok(())
    }

    fn save_entry(&mut self, entry: &ScheduleEntry) -> Result<bool, ProviderError> {
        self.saved.push(entry.clone());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_provider_lookups() {
        let provider = MemoryProvider::new()
            .with_class(ClassGroup::new("c1", 7))
            .with_teacher(Teacher::new("t1").with_unavailable(0, 0))
            .with_lesson(Lesson::new("math"))
            .with_assignment(LessonAssignment::new("c1", "math", "t1"))
            .with_curriculum(CurriculumEntry::new("math", 7, 4))
            .with_school_type("middle");

        assert_eq!(provider.list_classes().unwrap().len(), 1);
        assert_eq!(provider.weekly_hours_for("math", 7).unwrap(), Some(4));
        assert_eq!(provider.weekly_hours_for("math", 9).unwrap(), None);
        assert_eq!(provider.school_type().unwrap(), "middle");
        assert!(!provider.is_teacher_available("t1", 0, 0).unwrap());
        assert!(provider.is_teacher_available("t1", 0, 1).unwrap());
    }

    #[test]
    fn test_unknown_teacher_is_query_error() {
        let provider = MemoryProvider::new();
        let err = provider.is_teacher_available("ghost", 0, 0).unwrap_err();
        assert!(matches!(err, ProviderError::Query(_)));
    }

    #[test]
    fn test_persist_clears_then_saves() {
        let mut sink = MemorySink::new();
        sink.saved.push(ScheduleEntry::new("old", "t", "l", 0, 0));

        let entries = vec![
            ScheduleEntry::new("c1", "t1", "math", 0, 0),
            ScheduleEntry::new("c1", "t1", "math", 0, 1),
        ];
        let saved = persist(&mut sink, &entries).unwrap();

        assert_eq!(saved, 2);
        assert_eq!(sink.clear_count, 1);
        assert_eq!(sink.saved.len(), 2);
        assert_eq!(sink.saved[0].slot, 0);
    }
}
