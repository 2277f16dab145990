//! Schedule entry model.
//!
//! A schedule entry is one recurring weekly booking for a teaching
//! assignment: a day, a time range, and optionally a room and a
//! free-text location. Entries are the rows the conflict engine
//! scans and the timetable builder projects onto a grid.

use serde::{Deserialize, Serialize};

use super::WeekSlot;

/// Composite identity of a booking: (assignment, day, start, end).
///
/// Mirrors the unique index the external store keeps over the same
/// columns; used by the timetable builder to drop duplicate join rows.
pub type EntryKey = (i64, u8, u16, u16);

/// One recurring weekly booking for a teaching assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Surrogate key.
    pub id: i64,
    /// Owning teaching assignment.
    pub assignment_id: i64,
    /// Day-of-week code (2 = Monday … 8 = Sunday).
    pub day: u8,
    /// Start time (minutes since midnight, inclusive).
    pub start_min: u16,
    /// End time (minutes since midnight, exclusive).
    pub end_min: u16,
    /// Room code (e.g. "P101"). `None` = no room booked.
    pub room: Option<String>,
    /// Free-text location hint (campus, building wing).
    pub location: Option<String>,
}

impl ScheduleEntry {
    /// Creates a new entry without room or location.
    pub fn new(id: i64, assignment_id: i64, day: u8, start_min: u16, end_min: u16) -> Self {
        Self {
            id,
            assignment_id,
            day,
            start_min,
            end_min,
            room: None,
            location: None,
        }
    }

    /// Sets the room code.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Sets the free-text location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// The weekly interval this entry occupies.
    #[inline]
    pub fn slot(&self) -> WeekSlot {
        WeekSlot::new(self.day, self.start_min, self.end_min)
    }

    /// Composite dedupe key: (assignment, day, start, end).
    #[inline]
    pub fn dedupe_key(&self) -> EntryKey {
        (self.assignment_id, self.day, self.start_min, self.end_min)
    }

    /// Whether this entry's time range overlaps another's on the same day.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.slot().overlaps(&other.slot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hm;

    #[test]
    fn test_entry_builder() {
        let e = ScheduleEntry::new(1, 7, 3, hm(7, 0), hm(9, 0))
            .with_room("P101")
            .with_location("Main campus");

        assert_eq!(e.assignment_id, 7);
        assert_eq!(e.room.as_deref(), Some("P101"));
        assert_eq!(e.location.as_deref(), Some("Main campus"));
        assert_eq!(e.dedupe_key(), (7, 3, hm(7, 0), hm(9, 0)));
    }

    #[test]
    fn test_entry_overlap_delegates_to_slot() {
        let a = ScheduleEntry::new(1, 7, 3, hm(7, 0), hm(9, 0));
        let b = ScheduleEntry::new(2, 8, 3, hm(8, 0), hm(10, 0));
        let c = ScheduleEntry::new(3, 9, 4, hm(8, 0), hm(10, 0));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c)); // different day
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let e = ScheduleEntry::new(5, 2, 4, hm(13, 0), hm(15, 0)).with_room("B203");
        let json = serde_json::to_string(&e).unwrap();
        let back: ScheduleEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
