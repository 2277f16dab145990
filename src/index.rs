//! Assignment index.
//!
//! Id-keyed lookup maps over a snapshot of teaching assignments,
//! built once per request. Replaces object-graph navigation
//! (entry → assignment → teacher) with explicit O(1) joins, keeping
//! the conflict and resolution functions pure.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::TeachingAssignment;

/// Errors raised while building an index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Two snapshot rows share the same assignment id. The snapshot
    /// source has a data-integrity problem; callers should treat this
    /// as a fatal precondition failure.
    #[error("duplicate assignment id {0} in snapshot")]
    DuplicateAssignmentId(i64),
}

/// Immutable lookup maps over one snapshot of teaching assignments.
///
/// Built with [`AssignmentIndex::build`]; no mutation afterwards.
#[derive(Debug, Clone, Default)]
pub struct AssignmentIndex {
    by_id: HashMap<i64, TeachingAssignment>,
    by_teacher: HashMap<i64, Vec<i64>>,
    by_course: HashMap<i64, Vec<i64>>,
    by_semester: HashMap<i64, Vec<i64>>,
}

impl AssignmentIndex {
    /// Builds the index from a snapshot of assignment rows.
    ///
    /// Fails with [`IndexError::DuplicateAssignmentId`] if two rows
    /// share an id. An empty snapshot yields an empty (valid) index.
    pub fn build(assignments: &[TeachingAssignment]) -> Result<Self, IndexError> {
        let mut index = Self::default();
        for a in assignments {
            if index.by_id.contains_key(&a.id) {
                return Err(IndexError::DuplicateAssignmentId(a.id));
            }
            index.by_teacher.entry(a.teacher_id).or_default().push(a.id);
            index.by_course.entry(a.course_id).or_default().push(a.id);
            index
                .by_semester
                .entry(a.semester_id)
                .or_default()
                .push(a.id);
            index.by_id.insert(a.id, a.clone());
        }
        Ok(index)
    }

    /// Looks up an assignment by id.
    pub fn get(&self, assignment_id: i64) -> Option<&TeachingAssignment> {
        self.by_id.get(&assignment_id)
    }

    /// The teacher owning an assignment, if the assignment is known.
    pub fn teacher_of(&self, assignment_id: i64) -> Option<i64> {
        self.by_id.get(&assignment_id).map(|a| a.teacher_id)
    }

    /// All assignment ids owned by a teacher (snapshot order).
    pub fn assignments_of_teacher(&self, teacher_id: i64) -> &[i64] {
        self.by_teacher
            .get(&teacher_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All assignment ids for a course (snapshot order).
    pub fn assignments_of_course(&self, course_id: i64) -> &[i64] {
        self.by_course
            .get(&course_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All assignment ids in a semester (snapshot order).
    pub fn assignments_of_semester(&self, semester_id: i64) -> &[i64] {
        self.by_semester
            .get(&semester_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of indexed assignments.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the index holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_assignments() -> Vec<TeachingAssignment> {
        vec![
            TeachingAssignment::new(1, 10, 100, 1),
            TeachingAssignment::new(2, 10, 101, 1),
            TeachingAssignment::new(3, 11, 100, 1),
            TeachingAssignment::new(4, 10, 100, 2),
        ]
    }

    #[test]
    fn test_build_and_lookups() {
        let idx = AssignmentIndex::build(&sample_assignments()).unwrap();
        assert_eq!(idx.len(), 4);
        assert_eq!(idx.teacher_of(1), Some(10));
        assert_eq!(idx.teacher_of(3), Some(11));
        assert_eq!(idx.teacher_of(99), None);
        assert_eq!(idx.assignments_of_teacher(10), &[1, 2, 4]);
        assert_eq!(idx.assignments_of_teacher(11), &[3]);
        assert_eq!(idx.assignments_of_teacher(12), &[] as &[i64]);
        assert_eq!(idx.assignments_of_course(100), &[1, 3, 4]);
        assert_eq!(idx.assignments_of_semester(2), &[4]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut rows = sample_assignments();
        rows.push(TeachingAssignment::new(2, 12, 105, 2));
        let err = AssignmentIndex::build(&rows).unwrap_err();
        assert_eq!(err, IndexError::DuplicateAssignmentId(2));
    }

    #[test]
    fn test_empty_snapshot() {
        let idx = AssignmentIndex::build(&[]).unwrap();
        assert!(idx.is_empty());
        assert_eq!(idx.teacher_of(1), None);
    }

    #[test]
    fn test_get_returns_full_row() {
        let idx = AssignmentIndex::build(&sample_assignments()).unwrap();
        let a = idx.get(2).unwrap();
        assert_eq!(a.course_id, 101);
        assert!(a.active);
    }
}
