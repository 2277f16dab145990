//! Class-schedule conflict engine and weekly timetable resolver.
//!
//! Assigns weekly time slots to teaching assignments, rejects
//! double-bookings, and reconstructs per-teacher, per-student, and
//! per-room timetables from normalized snapshot data. A library, not a
//! service: every function is a pure computation over slices and maps
//! the caller supplies — no persistence, no I/O, no internal state.
//!
//! # Modules
//!
//! - **`models`**: Domain values — `WeekSlot`, `TeachingAssignment`,
//!   `ScheduleEntry`, `Enrollment`, `TimeSlot`
//! - **`index`**: Id-keyed lookup maps over one assignment snapshot
//! - **`conflict`**: Teacher and room double-booking decisions
//! - **`timetable`**: Dedupe, slot universe, and day × slot grid building
//! - **`resolve`**: Teacher/student/room identity → entry set joins
//! - **`validation`**: Snapshot integrity pre-flight checks
//!
//! # Concurrency Contract
//!
//! Reads (resolvers, grid building) may run fully in parallel. Writes
//! must be serialized by the caller per teacher and per room around the
//! check-then-accept sequence: this crate decides over the snapshot it
//! is given and never sees entries committed after that snapshot was
//! loaded. A unique database index over (assignment, day, start, end)
//! is the recommended last-resort guard under concurrent writers.

pub mod conflict;
pub mod index;
pub mod models;
pub mod resolve;
pub mod timetable;
pub mod validation;
