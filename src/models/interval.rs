//! Weekly interval model.
//!
//! A `WeekSlot` is one recurring weekly time range: a day-of-week plus a
//! half-open [start, end) time-of-day span in minutes since midnight.
//! There are no dates or timezones — the week repeats forever.
//!
//! # Day Numbering
//! Days are numbered 2 (Monday) through 8 (Sunday), following the source
//! data convention. Day names are derived by [`day_name`], never stored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First valid day-of-week code (Monday).
pub const DAY_MIN: u8 = 2;
/// Last valid day-of-week code (Sunday).
pub const DAY_MAX: u8 = 8;

/// A weekly time interval: day-of-week + [start, end) time-of-day.
///
/// Half-open semantics: an interval ending at 10:00 does not overlap
/// one starting at 10:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekSlot {
    /// Day-of-week code (2 = Monday … 8 = Sunday).
    pub day: u8,
    /// Start time (minutes since midnight, inclusive).
    pub start_min: u16,
    /// End time (minutes since midnight, exclusive).
    pub end_min: u16,
}

/// Malformed interval errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// Start time is not strictly before end time.
    #[error("invalid time range: start minute {start_min} is not before end minute {end_min}")]
    InvalidRange { start_min: u16, end_min: u16 },
    /// Day-of-week code outside 2..=8.
    #[error("invalid day of week: {day} (expected 2..=8)")]
    InvalidDay { day: u8 },
}

impl WeekSlot {
    /// Creates a new weekly interval.
    pub fn new(day: u8, start_min: u16, end_min: u16) -> Self {
        Self {
            day,
            start_min,
            end_min,
        }
    }

    /// Duration of this interval in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether two intervals overlap.
    ///
    /// True iff both fall on the same day and their time ranges intersect.
    /// Touching boundaries (`a.end == b.start`) do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_min < other.end_min
            && other.start_min < self.end_min
    }

    /// Validates the interval shape.
    ///
    /// Fails with [`IntervalError::InvalidRange`] when `start >= end` and
    /// [`IntervalError::InvalidDay`] when the day code is outside `2..=8`.
    pub fn validate(&self) -> Result<(), IntervalError> {
        if self.start_min >= self.end_min {
            return Err(IntervalError::InvalidRange {
                start_min: self.start_min,
                end_min: self.end_min,
            });
        }
        if !(DAY_MIN..=DAY_MAX).contains(&self.day) {
            return Err(IntervalError::InvalidDay { day: self.day });
        }
        Ok(())
    }
}

/// Converts hours and minutes to minutes since midnight.
#[inline]
pub const fn hm(hour: u16, min: u16) -> u16 {
    hour * 60 + min
}

/// Formats minutes since midnight as `HH:MM`.
pub fn format_time(min: u16) -> String {
    format!("{:02}:{:02}", min / 60, min % 60)
}

/// English name for a day code, `"?"` for codes outside 2..=8.
pub fn day_name(day: u8) -> &'static str {
    match day {
        2 => "Monday",
        3 => "Tuesday",
        4 => "Wednesday",
        5 => "Thursday",
        6 => "Friday",
        7 => "Saturday",
        8 => "Sunday",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_same_day() {
        let a = WeekSlot::new(3, hm(7, 0), hm(9, 0));
        let b = WeekSlot::new(3, hm(8, 0), hm(10, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a)); // symmetric
    }

    #[test]
    fn test_no_overlap_different_days() {
        let a = WeekSlot::new(2, hm(7, 0), hm(9, 0));
        let b = WeekSlot::new(3, hm(7, 0), hm(9, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_touching_boundaries_do_not_overlap() {
        let a = WeekSlot::new(2, hm(9, 0), hm(10, 0));
        let b = WeekSlot::new(2, hm(10, 0), hm(11, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = WeekSlot::new(5, hm(8, 0), hm(12, 0));
        let inner = WeekSlot::new(5, hm(9, 0), hm(10, 0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_validate_ok() {
        assert!(WeekSlot::new(2, hm(7, 0), hm(9, 0)).validate().is_ok());
        assert!(WeekSlot::new(8, hm(23, 0), hm(23, 30)).validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_range() {
        let err = WeekSlot::new(2, hm(9, 0), hm(9, 0)).validate().unwrap_err();
        assert!(matches!(err, IntervalError::InvalidRange { .. }));

        let err = WeekSlot::new(2, hm(10, 0), hm(9, 0)).validate().unwrap_err();
        assert!(matches!(err, IntervalError::InvalidRange { .. }));
    }

    #[test]
    fn test_validate_invalid_day() {
        // Range check runs first, so use a well-formed range
        let err = WeekSlot::new(1, hm(7, 0), hm(9, 0)).validate().unwrap_err();
        assert_eq!(err, IntervalError::InvalidDay { day: 1 });

        let err = WeekSlot::new(9, hm(7, 0), hm(9, 0)).validate().unwrap_err();
        assert_eq!(err, IntervalError::InvalidDay { day: 9 });
    }

    #[test]
    fn test_ordering() {
        let mut slots = vec![
            WeekSlot::new(3, hm(7, 0), hm(9, 0)),
            WeekSlot::new(2, hm(13, 0), hm(15, 0)),
            WeekSlot::new(2, hm(7, 0), hm(9, 0)),
        ];
        slots.sort();
        assert_eq!(slots[0].day, 2);
        assert_eq!(slots[0].start_min, hm(7, 0));
        assert_eq!(slots[1].start_min, hm(13, 0));
        assert_eq!(slots[2].day, 3);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(hm(7, 0)), "07:00");
        assert_eq!(format_time(hm(13, 45)), "13:45");
        assert_eq!(format_time(0), "00:00");
    }

    #[test]
    fn test_day_name() {
        assert_eq!(day_name(2), "Monday");
        assert_eq!(day_name(8), "Sunday");
        assert_eq!(day_name(0), "?");
        assert_eq!(day_name(9), "?");
    }

    #[test]
    fn test_duration() {
        assert_eq!(WeekSlot::new(2, hm(7, 0), hm(9, 0)).duration_min(), 120);
    }
}
