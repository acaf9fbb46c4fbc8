//! Input validation for timetabling data.
//!
//! Checks structural integrity of provider data before a run. Detects:
//! - Duplicate IDs (classes, teachers, lessons)
//! - Assignments referencing unknown classes, teachers, or lessons
//! - Duplicate assignments for the same (class, lesson) pair
//!
//! Validation is advisory: [`crate::engine::ScheduleBuilder`] skips
//! incomplete tasks on its own, but running these checks first gives the
//! caller every problem at once instead of a trail of skip records.

use std::collections::HashSet;

use crate::models::{ClassGroup, Lesson, LessonAssignment, Teacher};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An assignment references a class that doesn't exist.
    UnknownClass,
    /// An assignment references a teacher that doesn't exist.
    UnknownTeacher,
    /// An assignment references a lesson that doesn't exist.
    UnknownLesson,
    /// Two assignments cover the same (class, lesson) pair.
    DuplicateAssignment,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates provider data for a generation run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    classes: &[ClassGroup],
    teachers: &[Teacher],
    lessons: &[Lesson],
    assignments: &[LessonAssignment],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut class_ids = HashSet::new();
    for c in classes {
        if !class_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate class ID: {}", c.id),
            ));
        }
    }

    let mut teacher_ids = HashSet::new();
    for t in teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    let mut lesson_ids = HashSet::new();
    for l in lessons {
        if !lesson_ids.insert(l.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate lesson ID: {}", l.id),
            ));
        }
    }

    let mut seen_pairs = HashSet::new();
    for a in assignments {
        if !class_ids.contains(a.class_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownClass,
                format!("Assignment references unknown class '{}'", a.class_id),
            ));
        }
        if !teacher_ids.contains(a.teacher_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTeacher,
                format!("Assignment references unknown teacher '{}'", a.teacher_id),
            ));
        }
        if !lesson_ids.contains(a.lesson_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLesson,
                format!("Assignment references unknown lesson '{}'", a.lesson_id),
            ));
        }
        if !seen_pairs.insert((a.class_id.as_str(), a.lesson_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateAssignment,
                format!(
                    "Duplicate assignment for class '{}', lesson '{}'",
                    a.class_id, a.lesson_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> (Vec<ClassGroup>, Vec<Teacher>, Vec<Lesson>, Vec<LessonAssignment>) {
        (
            vec![ClassGroup::new("c1", 7), ClassGroup::new("c2", 8)],
            vec![Teacher::new("t1"), Teacher::new("t2")],
            vec![Lesson::new("math"), Lesson::new("art")],
            vec![
                LessonAssignment::new("c1", "math", "t1"),
                LessonAssignment::new("c2", "art", "t2"),
            ],
        )
    }

    #[test]
    fn test_valid_input() {
        let (classes, teachers, lessons, assignments) = sample_inputs();
        assert!(validate_input(&classes, &teachers, &lessons, &assignments).is_ok());
    }

    #[test]
    fn test_duplicate_class_id() {
        let (mut classes, teachers, lessons, assignments) = sample_inputs();
        classes.push(ClassGroup::new("c1", 9));

        let errors = validate_input(&classes, &teachers, &lessons, &assignments).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("class")));
    }

    #[test]
    fn test_unknown_references() {
        let (classes, teachers, lessons, mut assignments) = sample_inputs();
        assignments.push(LessonAssignment::new("ghost", "nope", "nobody"));

        let errors = validate_input(&classes, &teachers, &lessons, &assignments).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownClass));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownTeacher));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownLesson));
    }

    #[test]
    fn test_duplicate_assignment() {
        let (classes, teachers, lessons, mut assignments) = sample_inputs();
        // Same pair, different teacher: still a duplicate
        assignments.push(LessonAssignment::new("c1", "math", "t2"));

        let errors = validate_input(&classes, &teachers, &lessons, &assignments).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateAssignment));
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let (mut classes, teachers, lessons, mut assignments) = sample_inputs();
        classes.push(ClassGroup::new("c1", 9));
        assignments.push(LessonAssignment::new("ghost", "math", "t1"));

        let errors = validate_input(&classes, &teachers, &lessons, &assignments).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
