//! Time slot model.
//!
//! A `TimeSlot` is a derived (start, end, label) value used only for
//! rendering timetable grids. Slots are never persisted: the slot
//! universe for a grid is recomputed on every resolution request from
//! the default block set plus whatever irregular shapes appear in the
//! resolved entries.

use serde::{Deserialize, Serialize};

use super::{format_time, hm, ScheduleEntry};

/// A renderable time-of-day block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Block start (minutes since midnight, inclusive).
    pub start_min: u16,
    /// Block end (minutes since midnight, exclusive).
    pub end_min: u16,
    /// Display label (e.g. "Period 1" or "07:30-09:15").
    pub label: String,
}

impl TimeSlot {
    /// Creates a slot with an explicit label.
    pub fn labelled(start_min: u16, end_min: u16, label: impl Into<String>) -> Self {
        Self {
            start_min,
            end_min,
            label: label.into(),
        }
    }

    /// Creates a slot labelled by its own time range, `HH:MM-HH:MM`.
    pub fn from_range(start_min: u16, end_min: u16) -> Self {
        let label = format!("{}-{}", format_time(start_min), format_time(end_min));
        Self {
            start_min,
            end_min,
            label,
        }
    }

    /// Whether an entry's time range exactly matches this slot.
    #[inline]
    pub fn matches(&self, entry: &ScheduleEntry) -> bool {
        self.start_min == entry.start_min && self.end_min == entry.end_min
    }
}

/// The four canonical two-hour teaching blocks.
///
/// Most bookings land in one of these; irregular shapes are appended to
/// the universe by [`crate::timetable::slot_universe`] rather than dropped.
pub fn default_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot::labelled(hm(7, 0), hm(9, 0), "Period 1"),
        TimeSlot::labelled(hm(9, 0), hm(11, 0), "Period 2"),
        TimeSlot::labelled(hm(13, 0), hm(15, 0), "Period 3"),
        TimeSlot::labelled(hm(15, 0), hm(17, 0), "Period 4"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_range_label() {
        let s = TimeSlot::from_range(hm(7, 30), hm(9, 15));
        assert_eq!(s.label, "07:30-09:15");
    }

    #[test]
    fn test_matches_exact_range_only() {
        let slot = TimeSlot::labelled(hm(7, 0), hm(9, 0), "Period 1");
        let exact = ScheduleEntry::new(1, 1, 2, hm(7, 0), hm(9, 0));
        let contained = ScheduleEntry::new(2, 1, 2, hm(7, 30), hm(8, 30));
        assert!(slot.matches(&exact));
        assert!(!slot.matches(&contained));
    }

    #[test]
    fn test_default_slots_sorted_and_disjoint() {
        let slots = default_slots();
        assert_eq!(slots.len(), 4);
        for pair in slots.windows(2) {
            assert!(pair[0].end_min <= pair[1].start_min);
        }
    }
}
