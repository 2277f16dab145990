//! Scheduling domain models.
//!
//! Leaf value types for the conflict engine and timetable resolver:
//! weekly intervals, teaching assignments, schedule entries, enrollments,
//! and rendering time slots. All types are plain values — no entity holds
//! a back-reference to its container; relations are resolved through
//! [`crate::index::AssignmentIndex`].

mod assignment;
mod enrollment;
mod entry;
mod interval;
mod slot;

pub use assignment::TeachingAssignment;
pub use enrollment::Enrollment;
pub use entry::{EntryKey, ScheduleEntry};
pub use interval::{day_name, format_time, hm, IntervalError, WeekSlot, DAY_MAX, DAY_MIN};
pub use slot::{default_slots, TimeSlot};
