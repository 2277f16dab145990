//! Conflict engine.
//!
//! Decides whether a candidate schedule entry may be accepted given the
//! set of entries already booked. Two rules apply independently:
//!
//! - **Teacher rule**: a teacher cannot teach two classes on overlapping
//!   day/time spans, regardless of course or room.
//! - **Room rule**: a room cannot host two overlapping bookings,
//!   regardless of teacher.
//!
//! Every function here is a pure decision over an immutable snapshot.
//! Persisting an accepted entry — and serializing check-then-accept per
//! teacher and per room so a concurrent writer cannot slip a conflicting
//! row in between — is the caller's responsibility. A database-level
//! unique index over (assignment, day, start, end) is the recommended
//! last-resort guard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::index::AssignmentIndex;
use crate::models::{IntervalError, ScheduleEntry};

/// Which booking rule a conflict violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// The candidate's teacher is already booked at an overlapping time.
    Teacher,
    /// The candidate's room is already booked at an overlapping time.
    Room,
}

/// A rejected booking, with every conflicting entry named.
///
/// Both conflict lists are always populated so a caller can show both
/// reasons; `kind` is the headline for messaging, with [`ConflictKind::Room`]
/// taking precedence when both rules trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConflict {
    /// Headline rule for messaging.
    pub kind: ConflictKind,
    /// Entries of the same teacher overlapping the candidate.
    pub teacher_conflicts: Vec<ScheduleEntry>,
    /// Entries in the same room overlapping the candidate.
    pub room_conflicts: Vec<ScheduleEntry>,
}

impl ScheduleConflict {
    /// The conflicting entries behind the headline kind.
    pub fn with(&self) -> &[ScheduleEntry] {
        match self.kind {
            ConflictKind::Teacher => &self.teacher_conflicts,
            ConflictKind::Room => &self.room_conflicts,
        }
    }

    fn kind_str(&self) -> &'static str {
        match self.kind {
            ConflictKind::Teacher => "teacher",
            ConflictKind::Room => "room",
        }
    }
}

/// Errors returned by [`accept`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The candidate's interval is malformed; detected before any scan.
    #[error(transparent)]
    Interval(#[from] IntervalError),
    /// The candidate references an assignment absent from the index,
    /// so its owning teacher cannot be resolved.
    #[error("unknown assignment id {0}")]
    UnknownAssignment(i64),
    /// The candidate overlaps existing bookings.
    #[error("{} overlapping booking(s) for the candidate's {}", .0.with().len(), .0.kind_str())]
    Conflict(ScheduleConflict),
}

/// Entries whose teacher is already booked over the candidate's span.
///
/// Scans every existing entry owned by the candidate's teacher — across
/// all of that teacher's assignments — and collects overlaps. Entries
/// whose id equals `exclude_id` are skipped, so an edited entry does not
/// conflict with its own stored version. An existing entry with the
/// candidate's exact (assignment, day, start, end) key is a storage-layer
/// duplicate, not a temporal conflict, and is likewise skipped — the
/// store's unique index owns that rejection. Entries referencing
/// assignments unknown to the index cannot be attributed to a teacher
/// and are ignored.
pub fn check_teacher_conflicts(
    candidate: &ScheduleEntry,
    existing: &[ScheduleEntry],
    index: &AssignmentIndex,
    exclude_id: Option<i64>,
) -> Vec<ScheduleEntry> {
    let Some(teacher) = index.teacher_of(candidate.assignment_id) else {
        return Vec::new();
    };
    existing
        .iter()
        .filter(|e| Some(e.id) != exclude_id)
        .filter(|e| e.dedupe_key() != candidate.dedupe_key())
        .filter(|e| index.teacher_of(e.assignment_id) == Some(teacher))
        .filter(|e| candidate.overlaps(e))
        .cloned()
        .collect()
}

/// Entries booked in the candidate's room over the candidate's span.
///
/// Room conflicts are teacher-independent: any two overlapping bookings
/// in the same room conflict, including a teacher double-booking their
/// own room. A candidate without a room never room-conflicts.
pub fn check_room_conflicts(
    candidate: &ScheduleEntry,
    existing: &[ScheduleEntry],
    exclude_id: Option<i64>,
) -> Vec<ScheduleEntry> {
    let Some(room) = candidate.room.as_deref() else {
        return Vec::new();
    };
    existing
        .iter()
        .filter(|e| Some(e.id) != exclude_id)
        .filter(|e| e.dedupe_key() != candidate.dedupe_key())
        .filter(|e| e.room.as_deref() == Some(room))
        .filter(|e| candidate.overlaps(e))
        .cloned()
        .collect()
}

/// Validates the candidate's interval shape. Fail-fast: runs before any
/// conflict scan.
pub fn validate(candidate: &ScheduleEntry) -> Result<(), ScheduleError> {
    candidate.slot().validate()?;
    Ok(())
}

/// Full validate-then-check decision for a candidate entry.
///
/// Composes [`validate`] → [`check_teacher_conflicts`] →
/// [`check_room_conflicts`]. On success returns the candidate unchanged;
/// the engine never partially commits. When re-validating an edited
/// entry, pass its prior id as `exclude_id` so it is not compared
/// against itself.
///
/// A candidate duplicating an existing entry's exact (assignment, day,
/// start, end) is accept-worthy here: duplication is a storage concern,
/// rejected by the store's unique composite index, not by temporal
/// conflict rules.
pub fn accept(
    candidate: ScheduleEntry,
    existing: &[ScheduleEntry],
    index: &AssignmentIndex,
    exclude_id: Option<i64>,
) -> Result<ScheduleEntry, ScheduleError> {
    validate(&candidate)?;
    if index.get(candidate.assignment_id).is_none() {
        return Err(ScheduleError::UnknownAssignment(candidate.assignment_id));
    }

    let teacher_conflicts = check_teacher_conflicts(&candidate, existing, index, exclude_id);
    let room_conflicts = check_room_conflicts(&candidate, existing, exclude_id);

    if teacher_conflicts.is_empty() && room_conflicts.is_empty() {
        return Ok(candidate);
    }

    // Room takes precedence in messaging when both rules trigger.
    let kind = if room_conflicts.is_empty() {
        ConflictKind::Teacher
    } else {
        ConflictKind::Room
    };
    Err(ScheduleError::Conflict(ScheduleConflict {
        kind,
        teacher_conflicts,
        room_conflicts,
    }))
}
