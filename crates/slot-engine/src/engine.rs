//! The top-level find → score → rank pipeline.
//!
//! The whole engine is a pure function from `(busy intervals, request)` to a
//! ranked slot list. It holds no state across calls, performs no I/O, and
//! independent invocations may run concurrently without coordination.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::busy::{BusyIndex, BusyInterval};
use crate::error::{Result, SlotError};
use crate::generator::SlotStarts;
use crate::prefs::Preferences;
use crate::score::score_slot;

/// The overall search range. Candidate starts fall in `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// A conflict-free candidate slot. On the default (non-merge) path,
/// `end - start` equals the requested duration exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// How many participants the slot works for — always the full participant
    /// count, since only globally free candidates are kept.
    pub available_participant_count: usize,
}

/// A candidate slot with its ranking score attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub available_participant_count: usize,
    pub score: f64,
}

/// Everything the engine needs besides the busy intervals themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub window: TimeWindow,
    pub duration_minutes: i64,
    #[serde(default)]
    pub preferences: Preferences,
    pub max_results: usize,
}

/// Enumerate all candidate slots that are simultaneously free for every
/// participant present in `intervals`.
///
/// Degenerate input — inverted or empty window, non-positive duration or
/// slot interval, zero participants — yields an empty list rather than an
/// error. Candidates are returned in generation order (chronological).
pub fn find_common_slots(
    intervals: &[BusyInterval],
    window: &TimeWindow,
    duration_minutes: i64,
    preferences: &Preferences,
) -> Vec<CandidateSlot> {
    let index = BusyIndex::from_intervals(intervals);
    if index.is_empty() {
        return Vec::new();
    }

    let duration = Duration::minutes(duration_minutes.max(0));
    let available_participant_count = index.participant_count();

    SlotStarts::new(window, duration_minutes, preferences)
        .filter(|&start| index.is_free_for_all(start, start + duration))
        .map(|start| CandidateSlot {
            start,
            end: start + duration,
            available_participant_count,
        })
        .collect()
}

/// Find, score, rank, and truncate the common slots for a search request.
///
/// Returns the top `max_results` slots ordered by score descending, ties
/// broken by start ascending (the explicit secondary key keeps the output
/// deterministic without leaning on sort stability).
///
/// # Errors
///
/// Only programming-contract violations fail: `max_results == 0`, a
/// non-positive slot interval, or preferred hours outside `0-23`. Degenerate
/// *data* (inverted window, non-positive duration, zero participants) is a
/// normal "no common time found" outcome and yields `Ok` with an empty list.
pub fn rank_available_slots(
    intervals: &[BusyInterval],
    request: &SearchRequest,
) -> Result<Vec<ScoredSlot>> {
    validate(request)?;

    let free = find_common_slots(
        intervals,
        &request.window,
        request.duration_minutes,
        &request.preferences,
    );

    let mut scored: Vec<ScoredSlot> = free
        .into_iter()
        .map(|slot| ScoredSlot {
            score: score_slot(slot.start, &request.preferences),
            start: slot.start,
            end: slot.end,
            available_participant_count: slot.available_participant_count,
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.start.cmp(&b.start))
    });
    scored.truncate(request.max_results);

    Ok(scored)
}

fn validate(request: &SearchRequest) -> Result<()> {
    if request.max_results == 0 {
        return Err(SlotError::InvalidMaxResults);
    }
    let prefs = &request.preferences;
    if prefs.slot_interval_minutes <= 0 {
        return Err(SlotError::InvalidSlotInterval(prefs.slot_interval_minutes));
    }
    for hours in [prefs.generation_hours, prefs.scoring_hours] {
        if !hours.is_valid() {
            return Err(SlotError::InvalidHourRange {
                start_hour: hours.start_hour,
                end_hour: hours.end_hour,
            });
        }
    }
    Ok(())
}
