//! Soft scheduling preferences.
//!
//! Slot generation and slot scoring each use their own hour pair with
//! different defaults (8-22 for generation, 10-18 for scoring). The two
//! knobs are deliberately independent; see DESIGN.md for the open product
//! question behind that split.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A daily hour range, both bounds in `[0, 23]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl HourRange {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        HourRange {
            start_hour,
            end_hour,
        }
    }

    /// Midpoint hour of the range; half-integral when the bounds' sum is odd.
    pub fn midpoint(&self) -> f64 {
        (self.start_hour + self.end_hour) as f64 / 2.0
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.start_hour <= 23 && self.end_hour <= 23
    }
}

/// Soft preferences steering which candidates are generated and how free
/// candidates are scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Weekdays on which slots may start. Empty means all days allowed
    /// during generation and no weekday bonus during scoring.
    pub preferred_weekdays: Vec<Weekday>,
    /// Hour window candidates must fit inside (generation pair).
    pub generation_hours: HourRange,
    /// Hour pair whose midpoint anchors the scoring penalty (scoring pair).
    pub scoring_hours: HourRange,
    /// Scan granularity between consecutive candidate starts.
    pub slot_interval_minutes: i64,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            preferred_weekdays: Vec::new(),
            generation_hours: HourRange::new(8, 22),
            scoring_hours: HourRange::new(10, 18),
            slot_interval_minutes: 30,
        }
    }
}

impl Preferences {
    /// Generation filter: empty set allows every weekday.
    pub fn allows_weekday(&self, weekday: Weekday) -> bool {
        self.preferred_weekdays.is_empty() || self.preferred_weekdays.contains(&weekday)
    }

    /// Scoring bonus condition: an empty set is neutral, never rewarded.
    pub fn prefers_weekday(&self, weekday: Weekday) -> bool {
        !self.preferred_weekdays.is_empty() && self.preferred_weekdays.contains(&weekday)
    }
}
