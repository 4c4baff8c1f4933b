//! Coalesce chronologically adjacent free slots into longer blocks.
//!
//! This transform is NOT part of the default ranking pipeline: the default
//! path guarantees every slot has exactly the requested duration, and merging
//! would break that invariant. It exists for callers that explicitly want
//! variable-length blocks instead.

use chrono::Duration;

use crate::engine::CandidateSlot;

/// Merge runs of adjacent slots from a chronologically ordered list.
///
/// Two neighbors merge when the gap between the end of one and the start of
/// the next is at most `max_gap_minutes` (overlapping slots always merge).
/// When `max_duration_minutes` is given, a merge that would make the combined
/// block span more than that many minutes is refused and a new run starts
/// instead.
///
/// A merged block keeps the `available_participant_count` of the first slot
/// in its run.
pub fn merge_adjacent_slots(
    slots: &[CandidateSlot],
    max_gap_minutes: i64,
    max_duration_minutes: Option<i64>,
) -> Vec<CandidateSlot> {
    let mut iter = slots.iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let max_gap = Duration::minutes(max_gap_minutes);
    let mut merged = Vec::new();
    let mut current = first.clone();

    for slot in iter {
        let can_merge = slot.start - current.end <= max_gap;
        let would_exceed = max_duration_minutes
            .map(|max| slot.end - current.start > Duration::minutes(max))
            .unwrap_or(false);

        if can_merge && !would_exceed {
            current.end = slot.end;
        } else {
            merged.push(current);
            current = slot.clone();
        }
    }

    merged.push(current);
    merged
}
