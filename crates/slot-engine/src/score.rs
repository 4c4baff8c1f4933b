//! Desirability scoring for conflict-free candidates.
//!
//! Scores only rank equally-valid candidates against each other; a low score
//! never disqualifies a slot.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::prefs::Preferences;

/// Baseline every candidate starts from.
pub const BASE_SCORE: f64 = 100.0;
/// Bonus for starting on an explicitly preferred weekday.
pub const PREFERRED_WEEKDAY_BONUS: f64 = 20.0;
/// Penalty per hour of distance from the scoring-hours midpoint.
pub const HOUR_DISTANCE_WEIGHT: f64 = 2.0;

/// Score a candidate slot by its start instant.
///
/// Baseline 100, plus 20 when `preferred_weekdays` is non-empty and contains
/// the start weekday (an empty set is neutral, not universally rewarded),
/// minus 2 per hour of distance between the start hour and the midpoint of
/// the *scoring* hour pair.
///
/// There is intentionally no term for slot duration: every candidate on the
/// default path has exactly the requested duration, so a length reward would
/// be a constant offset. Revisit only if scoring ever runs after
/// [`merge_adjacent_slots`](crate::merge::merge_adjacent_slots).
pub fn score_slot(start: DateTime<Utc>, prefs: &Preferences) -> f64 {
    let mut score = BASE_SCORE;

    if prefs.prefers_weekday(start.weekday()) {
        score += PREFERRED_WEEKDAY_BONUS;
    }

    let midpoint = prefs.scoring_hours.midpoint();
    score -= HOUR_DISTANCE_WEIGHT * (start.hour() as f64 - midpoint).abs();

    score
}
