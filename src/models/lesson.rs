//! Lesson, curriculum, and assignment models.
//!
//! Three separate inputs feed the engine:
//! - [`Lesson`]: the subject itself.
//! - [`CurriculumEntry`]: how many weekly hours a grade gets of a lesson.
//! - [`LessonAssignment`]: which teacher teaches which lesson for which
//!   class. Deciding assignments is outside this engine; they arrive as
//!   immutable input.

use serde::{Deserialize, Serialize};

/// A subject that appears on the timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique lesson identifier.
    pub id: String,
    /// Human-readable name (e.g., "Mathematics").
    pub name: String,
}

impl Lesson {
    /// Creates a new lesson.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the lesson name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Weekly hour requirement for a lesson at a grade level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumEntry {
    /// Lesson this entry applies to.
    pub lesson_id: String,
    /// Grade level this entry applies to.
    pub grade: i32,
    /// Required hours per week. Zero means the lesson is not taught.
    pub weekly_hours: u32,
}

impl CurriculumEntry {
    /// Creates a new curriculum entry.
    pub fn new(lesson_id: impl Into<String>, grade: i32, weekly_hours: u32) -> Self {
        Self {
            lesson_id: lesson_id.into(),
            grade,
            weekly_hours,
        }
    }
}

/// A pre-decided (class, lesson, teacher) teaching assignment.
///
/// Immutable input for this engine: placement never changes who teaches what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonAssignment {
    /// Class receiving the lesson.
    pub class_id: String,
    /// Lesson taught.
    pub lesson_id: String,
    /// Teacher delivering it.
    pub teacher_id: String,
}

impl LessonAssignment {
    /// Creates a new assignment.
    pub fn new(
        class_id: impl Into<String>,
        lesson_id: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            lesson_id: lesson_id.into(),
            teacher_id: teacher_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_builder() {
        let l = Lesson::new("math").with_name("Mathematics");
        assert_eq!(l.id, "math");
        assert_eq!(l.name, "Mathematics");
    }

    #[test]
    fn test_curriculum_entry() {
        let e = CurriculumEntry::new("math", 7, 4);
        assert_eq!(e.weekly_hours, 4);
        assert_eq!(e.grade, 7);
    }

    #[test]
    fn test_assignment_roundtrip() {
        let a = LessonAssignment::new("c1", "math", "t1");
        let json = serde_json::to_string(&a).unwrap();
        let back: LessonAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
