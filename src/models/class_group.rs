//! Class group model.
//!
//! A class group is a cohort of students that attends lessons together
//! (e.g., "7-B"). Its grade selects which curriculum entries apply.

use serde::{Deserialize, Serialize};

/// A class of students scheduled as one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassGroup {
    /// Unique class identifier.
    pub id: String,
    /// Human-readable name (e.g., "7-B").
    pub name: String,
    /// Grade level, used for curriculum lookups.
    pub grade: i32,
}

impl ClassGroup {
    /// Creates a new class group.
    pub fn new(id: impl Into<String>, grade: i32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            grade,
        }
    }

    /// Sets the class name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_group_builder() {
        let c = ClassGroup::new("c7b", 7).with_name("7-B");
        assert_eq!(c.id, "c7b");
        assert_eq!(c.grade, 7);
        assert_eq!(c.name, "7-B");
    }
}
