//! Identity resolvers.
//!
//! Translate a teacher, student, or room identity — plus an optional
//! semester filter — into the flat schedule-entry set the timetable
//! builder consumes. Pure joins over snapshot slices; assignment
//! ownership and enrollment rows are never mutated.
//!
//! By default a resolver returns an empty set for an unknown identity:
//! an empty schedule is a legitimate state and the recommended posture
//! for UI use. The `*_strict` variants instead fail with
//! [`ResolveError::UnknownIdentity`], distinguishing "valid person, no
//! classes" from "no such person".

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Enrollment, ScheduleEntry, TeachingAssignment};

/// Which kind of identity a strict resolver failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    Teacher,
    Student,
}

impl IdentityKind {
    fn as_str(self) -> &'static str {
        match self {
            IdentityKind::Teacher => "teacher",
            IdentityKind::Student => "student",
        }
    }
}

/// Errors raised by strict-mode resolvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The id matches no record at all in the supplied snapshot.
    #[error("unknown {} id {id}", .kind.as_str())]
    UnknownIdentity { kind: IdentityKind, id: i64 },
}

/// Schedule entries for a teacher, optionally filtered to one semester.
///
/// Filters assignments to the teacher (and semester when given), then
/// keeps entries owned by those assignments. An unknown teacher yields
/// an empty set.
pub fn for_teacher(
    teacher_id: i64,
    assignments: &[TeachingAssignment],
    entries: &[ScheduleEntry],
    semester_id: Option<i64>,
) -> Vec<ScheduleEntry> {
    let owned: HashSet<i64> = assignments
        .iter()
        .filter(|a| a.teacher_id == teacher_id)
        .filter(|a| semester_id.is_none_or(|s| a.semester_id == s))
        .map(|a| a.id)
        .collect();
    entries_of(entries, &owned)
}

/// Strict variant of [`for_teacher`].
///
/// Fails only when the teacher id appears in no assignment row at all;
/// a known teacher with no classes (or none in the requested semester)
/// still resolves to an empty set.
pub fn for_teacher_strict(
    teacher_id: i64,
    assignments: &[TeachingAssignment],
    entries: &[ScheduleEntry],
    semester_id: Option<i64>,
) -> Result<Vec<ScheduleEntry>, ResolveError> {
    if !assignments.iter().any(|a| a.teacher_id == teacher_id) {
        return Err(ResolveError::UnknownIdentity {
            kind: IdentityKind::Teacher,
            id: teacher_id,
        });
    }
    Ok(for_teacher(teacher_id, assignments, entries, semester_id))
}

/// Schedule entries for a student, optionally filtered to one semester.
///
/// Joins enrollments to assignment ids, then keeps entries owned by
/// those assignments. The semester filter matches the assignment's
/// semester (the authoritative one; an enrollment row carries a copy).
/// A student with no enrollments yields an empty set, not an error.
pub fn for_student(
    student_id: i64,
    enrollments: &[Enrollment],
    assignments: &[TeachingAssignment],
    entries: &[ScheduleEntry],
    semester_id: Option<i64>,
) -> Vec<ScheduleEntry> {
    let in_semester = |assignment_id: i64| match semester_id {
        None => true,
        Some(s) => assignments
            .iter()
            .any(|a| a.id == assignment_id && a.semester_id == s),
    };
    let attended: HashSet<i64> = enrollments
        .iter()
        .filter(|en| en.student_id == student_id)
        .filter(|en| in_semester(en.assignment_id))
        .map(|en| en.assignment_id)
        .collect();
    entries_of(entries, &attended)
}

/// Strict variant of [`for_student`].
pub fn for_student_strict(
    student_id: i64,
    enrollments: &[Enrollment],
    assignments: &[TeachingAssignment],
    entries: &[ScheduleEntry],
    semester_id: Option<i64>,
) -> Result<Vec<ScheduleEntry>, ResolveError> {
    if !enrollments.iter().any(|en| en.student_id == student_id) {
        return Err(ResolveError::UnknownIdentity {
            kind: IdentityKind::Student,
            id: student_id,
        });
    }
    Ok(for_student(
        student_id,
        enrollments,
        assignments,
        entries,
        semester_id,
    ))
}

/// Schedule entries booked in a room, optionally on one day.
///
/// A plain filter, exposed for room-utilization queries.
pub fn for_room(room: &str, entries: &[ScheduleEntry], day: Option<u8>) -> Vec<ScheduleEntry> {
    entries
        .iter()
        .filter(|e| e.room.as_deref() == Some(room))
        .filter(|e| day.is_none_or(|d| e.day == d))
        .cloned()
        .collect()
}

fn entries_of(entries: &[ScheduleEntry], assignment_ids: &HashSet<i64>) -> Vec<ScheduleEntry> {
    entries
        .iter()
        .filter(|e| assignment_ids.contains(&e.assignment_id))
        .cloned()
        .collect()
}
