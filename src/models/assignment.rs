//! Teaching assignment model.
//!
//! A teaching assignment is the unit a weekly booking attaches to:
//! one teacher teaching one course in one semester. Assignments are
//! deactivated when they end, never deleted, so historical schedule
//! entries keep a valid owner.

use serde::{Deserialize, Serialize};

/// One teacher teaching one course in one semester.
///
/// The surrounding CRUD layer keeps at most one ACTIVE assignment per
/// (teacher, course, semester) tuple; this crate treats assignments as
/// read-only snapshot rows and surfaces violations of that soft
/// invariant through [`crate::validation::validate_snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachingAssignment {
    /// Surrogate key.
    pub id: i64,
    /// Owning teacher.
    pub teacher_id: i64,
    /// Course taught.
    pub course_id: i64,
    /// Semester the assignment belongs to.
    pub semester_id: i64,
    /// Whether the assignment is currently in effect.
    pub active: bool,
}

impl TeachingAssignment {
    /// Creates a new active assignment.
    pub fn new(id: i64, teacher_id: i64, course_id: i64, semester_id: i64) -> Self {
        Self {
            id,
            teacher_id,
            course_id,
            semester_id,
            active: true,
        }
    }

    /// Marks the assignment inactive.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_active() {
        let a = TeachingAssignment::new(1, 10, 100, 1);
        assert!(a.active);
        assert_eq!(a.teacher_id, 10);
    }

    #[test]
    fn test_inactive() {
        let a = TeachingAssignment::new(1, 10, 100, 1).inactive();
        assert!(!a.active);
    }
}
