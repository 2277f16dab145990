//! Enrollment model.
//!
//! Links a student to a teaching assignment within a semester. Consumed
//! read-only by the student resolver; this crate never creates or
//! mutates enrollments.

use serde::{Deserialize, Serialize};

/// A student's membership in a teaching assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Enrolled student.
    pub student_id: i64,
    /// Teaching assignment the student attends.
    pub assignment_id: i64,
    /// Semester the enrollment belongs to.
    pub semester_id: i64,
}

impl Enrollment {
    /// Creates a new enrollment.
    pub fn new(student_id: i64, assignment_id: i64, semester_id: i64) -> Self {
        Self {
            student_id,
            assignment_id,
            semester_id,
        }
    }
}
