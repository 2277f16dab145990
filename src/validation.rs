//! Snapshot integrity checks.
//!
//! Pre-flight validation of the reference data the read path supplies
//! (assignments, entries, enrollments) before it feeds the conflict
//! engine or a resolver. Detects:
//! - Duplicate assignment or entry ids
//! - Entries and enrollments referencing unknown assignments
//! - Entries with malformed intervals
//! - More than one active assignment per (teacher, course, semester)
//!
//! All problems are collected and returned together rather than
//! failing on the first, so the snapshot source can fix its query in
//! one pass.

use std::collections::{HashMap, HashSet};

use crate::models::{Enrollment, ScheduleEntry, TeachingAssignment};

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
    /// Two snapshot rows share the same id.
    DuplicateId,
    /// An entry or enrollment references an assignment that doesn't exist.
    UnknownAssignmentReference,
    /// An entry's day/time range is malformed.
    InvalidInterval,
    /// Two active assignments share a (teacher, course, semester) tuple.
    DuplicateActiveAssignment,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates one snapshot of scheduling reference data.
///
/// Checks:
/// 1. No duplicate assignment ids
/// 2. No duplicate entry ids
/// 3. All entry and enrollment assignment references exist
/// 4. All entry intervals are well-formed
/// 5. At most one ACTIVE assignment per (teacher, course, semester)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_snapshot(
    assignments: &[TeachingAssignment],
    entries: &[ScheduleEntry],
    enrollments: &[Enrollment],
) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect assignment ids
    let mut assignment_ids = HashSet::new();
    for a in assignments {
        if !assignment_ids.insert(a.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate assignment id: {}", a.id),
            ));
        }
    }

    // Active assignments must be unique per (teacher, course, semester)
    let mut active_tuples: HashMap<(i64, i64, i64), i64> = HashMap::new();
    for a in assignments.iter().filter(|a| a.active) {
        let key = (a.teacher_id, a.course_id, a.semester_id);
        if let Some(first) = active_tuples.insert(key, a.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateActiveAssignment,
                format!(
                    "Assignments {} and {} are both active for teacher {} / course {} / semester {}",
                    first, a.id, a.teacher_id, a.course_id, a.semester_id
                ),
            ));
        }
    }

    // Entry ids, references, and intervals
    let mut entry_ids = HashSet::new();
    for e in entries {
        if !entry_ids.insert(e.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate entry id: {}", e.id),
            ));
        }
        if !assignment_ids.contains(&e.assignment_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownAssignmentReference,
                format!(
                    "Entry {} references unknown assignment {}",
                    e.id, e.assignment_id
                ),
            ));
        }
        if let Err(err) = e.slot().validate() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!("Entry {} has an invalid interval: {err}", e.id),
            ));
        }
    }

    // Enrollment references
    for en in enrollments {
        if !assignment_ids.contains(&en.assignment_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownAssignmentReference,
                format!(
                    "Enrollment of student {} references unknown assignment {}",
                    en.student_id, en.assignment_id
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
    use crate::models::hm;

    fn sample_assignments() -> Vec<TeachingAssignment> {
        vec![
            TeachingAssignment::new(1, 10, 100, 1),
            TeachingAssignment::new(2, 10, 101, 1),
            TeachingAssignment::new(3, 11, 100, 1),
        ]
    }

    fn sample_entries() -> Vec<ScheduleEntry> {
        vec![
            ScheduleEntry::new(1, 1, 2, hm(7, 0), hm(9, 0)).with_room("P101"),
            ScheduleEntry::new(2, 2, 3, hm(9, 0), hm(11, 0)),
        ]
    }

    #[test]
    fn test_valid_snapshot() {
        let enrollments = vec![Enrollment::new(500, 1, 1)];
        assert!(validate_snapshot(&sample_assignments(), &sample_entries(), &enrollments).is_ok());
    }

    #[test]
    fn test_empty_snapshot_is_valid() {
        assert!(validate_snapshot(&[], &[], &[]).is_ok());
    }

    #[test]
    fn test_duplicate_assignment_id() {
        let mut rows = sample_assignments();
        rows.push(TeachingAssignment::new(1, 12, 103, 2));
        let errors = validate_snapshot(&rows, &[], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("assignment")));
    }

    #[test]
    fn test_duplicate_entry_id() {
        let mut entries = sample_entries();
        entries.push(ScheduleEntry::new(1, 3, 5, hm(13, 0), hm(15, 0)));
        let errors = validate_snapshot(&sample_assignments(), &entries, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("entry")));
    }

    #[test]
    fn test_entry_unknown_assignment() {
        let entries = vec![ScheduleEntry::new(1, 99, 2, hm(7, 0), hm(9, 0))];
        let errors = validate_snapshot(&sample_assignments(), &entries, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownAssignmentReference));
    }

    #[test]
    fn test_enrollment_unknown_assignment() {
        let enrollments = vec![Enrollment::new(500, 99, 1)];
        let errors = validate_snapshot(&sample_assignments(), &[], &enrollments).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownAssignmentReference
                && e.message.contains("student 500")));
    }

    #[test]
    fn test_invalid_interval_reported() {
        let entries = vec![ScheduleEntry::new(1, 1, 9, hm(7, 0), hm(9, 0))];
        let errors = validate_snapshot(&sample_assignments(), &entries, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidInterval));
    }

    #[test]
    fn test_duplicate_active_assignment() {
        // id 4 repeats teacher 10 / course 100 / semester 1, already
        // covered by id 1.
        let mut rows = sample_assignments();
        rows.push(TeachingAssignment::new(4, 10, 100, 1));
        let errors = validate_snapshot(&rows, &[], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateActiveAssignment));
    }

    #[test]
    fn test_inactive_duplicate_tuple_allowed() {
        // A deactivated assignment may share the tuple with an active one.
        let mut rows = sample_assignments();
        rows.push(TeachingAssignment::new(4, 10, 100, 1).inactive());
        assert!(validate_snapshot(&rows, &[], &[]).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let entries = vec![
            ScheduleEntry::new(1, 99, 2, hm(7, 0), hm(9, 0)), // unknown assignment
            ScheduleEntry::new(1, 1, 2, hm(9, 0), hm(8, 0)),  // dup id + bad range
        ];
        let errors = validate_snapshot(&sample_assignments(), &entries, &[]).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
