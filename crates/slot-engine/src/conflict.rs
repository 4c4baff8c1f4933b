//! Half-open overlap test between a candidate slot and busy spans.
//!
//! Intervals are `[start, end)`: a slot that ends exactly when a busy span
//! begins (or starts exactly when one ends) does NOT conflict.

use chrono::{DateTime, Utc};

use crate::busy::BusySpan;

/// True iff the candidate `[slot_start, slot_end)` overlaps any busy span.
///
/// Two intervals overlap iff `slot_start < busy.end && slot_end > busy.start`.
/// An empty span slice never conflicts, so a participant who recorded no busy
/// time is vacuously free for every candidate.
pub fn conflicts(
    slot_start: DateTime<Utc>,
    slot_end: DateTime<Utc>,
    busy: &[BusySpan],
) -> bool {
    busy.iter()
        .any(|span| slot_start < span.end && slot_end > span.start)
}
