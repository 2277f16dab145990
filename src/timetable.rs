//! Timetable builder.
//!
//! Turns a flat set of schedule entries into a renderable day × slot
//! grid. The grid is a derived projection: rebuilt from scratch on
//! every call, never persisted, and holding no state between calls.
//!
//! Entries first pass through [`dedupe`] (upstream joins can yield the
//! same booking twice), then the slot universe is computed as the
//! default block set plus any irregular time shapes present in the
//! data, and finally each entry is bucketed under (day, slot index).
//! No entry is ever silently dropped.

use std::collections::{HashMap, HashSet};

use crate::models::{EntryKey, ScheduleEntry, TimeSlot, DAY_MAX, DAY_MIN};

/// The canonical grid rows: Monday (2) through Sunday (8).
pub const WEEK_DAYS: [u8; 7] = [2, 3, 4, 5, 6, 7, 8];

/// Sparse grid cells: (day, slot index) → entries in that cell.
pub type GridCells = HashMap<(u8, usize), Vec<ScheduleEntry>>;

/// Removes duplicate bookings, keeping the first occurrence.
///
/// Two entries are duplicates when they share the (assignment, day,
/// start, end) composite key — the same key the external store keeps a
/// unique index over. Guards against upstream joins producing the same
/// row twice (e.g. a student enrolled into one assignment via two
/// paths). Idempotent.
pub fn dedupe(entries: &[ScheduleEntry]) -> Vec<ScheduleEntry> {
    let mut seen: HashSet<EntryKey> = HashSet::new();
    entries
        .iter()
        .filter(|e| seen.insert(e.dedupe_key()))
        .cloned()
        .collect()
}

/// Computes the slot universe for a set of entries.
///
/// Returns `defaults` unioned with every (start, end) shape present in
/// `entries` that no default covers, sorted ascending by (start, end).
/// Synthesized slots are labelled by their time range. Idempotent and
/// order-stable: the result covers its own entries, so a second
/// application adds nothing and sorts identically.
pub fn slot_universe(entries: &[ScheduleEntry], defaults: &[TimeSlot]) -> Vec<TimeSlot> {
    let mut covered: HashSet<(u16, u16)> = defaults
        .iter()
        .map(|s| (s.start_min, s.end_min))
        .collect();

    let mut slots: Vec<TimeSlot> = defaults.to_vec();
    for e in entries {
        if covered.insert((e.start_min, e.end_min)) {
            slots.push(TimeSlot::from_range(e.start_min, e.end_min));
        }
    }
    slots.sort_by_key(|s| (s.start_min, s.end_min));
    slots
}

/// Buckets entries under (day, index of the exactly matching slot).
///
/// `slots` must cover every entry's (start, end) shape — guaranteed
/// when produced by [`slot_universe`] over the same entries. Each cell
/// list is sorted by entry id for stable rendering. Days outside the
/// `days` row set are still bucketed; the map is sparse and the caller
/// renders only the rows it asked for.
pub fn build_grid(entries: &[ScheduleEntry], days: &[u8], slots: &[TimeSlot]) -> GridCells {
    debug_assert!(days.iter().all(|d| (DAY_MIN..=DAY_MAX).contains(d)));

    let slot_index: HashMap<(u16, u16), usize> = slots
        .iter()
        .enumerate()
        .map(|(i, s)| ((s.start_min, s.end_min), i))
        .collect();

    let mut cells: GridCells = HashMap::new();
    for e in entries {
        debug_assert!(
            slot_index.contains_key(&(e.start_min, e.end_min)),
            "slot universe does not cover entry {}",
            e.id
        );
        if let Some(&idx) = slot_index.get(&(e.start_min, e.end_min)) {
            cells.entry((e.day, idx)).or_default().push(e.clone());
        }
    }
    for bucket in cells.values_mut() {
        bucket.sort_by_key(|e| e.id);
    }
    cells
}

/// A rendered weekly timetable: rows (days) × columns (slots) with
/// sparse cells.
///
/// Derived data, never persisted; rebuild from a fresh entry snapshot
/// on every resolution request.
#[derive(Debug, Clone)]
pub struct Timetable {
    days: Vec<u8>,
    slots: Vec<TimeSlot>,
    cells: GridCells,
}

impl Timetable {
    /// Builds a timetable from raw (possibly duplicated) entries.
    ///
    /// Composes [`dedupe`] → [`slot_universe`] → [`build_grid`], so the
    /// slot set is guaranteed to cover the entries and nothing is
    /// dropped.
    pub fn build(entries: &[ScheduleEntry], days: &[u8], defaults: &[TimeSlot]) -> Self {
        let entries = dedupe(entries);
        let slots = slot_universe(&entries, defaults);
        let cells = build_grid(&entries, days, &slots);
        Self {
            days: days.to_vec(),
            slots,
            cells,
        }
    }

    /// Grid rows (day codes), in the order requested.
    pub fn days(&self) -> &[u8] {
        &self.days
    }

    /// Grid columns (the slot universe), ascending by start time.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Entries in one cell; empty when nothing is booked there.
    pub fn cell(&self, day: u8, slot_idx: usize) -> &[ScheduleEntry] {
        self.cells
            .get(&(day, slot_idx))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of bucketed entries.
    pub fn entry_count(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    /// Whether the timetable holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
