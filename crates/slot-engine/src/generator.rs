//! Candidate start generation.
//!
//! Produces the lazy, finite sequence of candidate slot start instants inside
//! a search window, honoring the preferred-hour and preferred-weekday
//! constraints. The iterator is `Clone`, so a fresh scan of the same window
//! is just a clone (or a new construction) away.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc, Weekday};

use crate::engine::TimeWindow;
use crate::prefs::{HourRange, Preferences};

/// Iterator over candidate slot start instants.
///
/// The cursor starts at `generation_hours.start_hour:00` on `window.from`'s
/// calendar day and advances by `slot_interval_minutes`. Whenever the cursor
/// reaches the preferred end hour it jumps to the next calendar day at the
/// preferred start hour (a hard reset, not a continued scan). The sequence
/// ends once the cursor reaches `window.to`; candidate ends may extend past
/// the window, only starts are bounded by it.
#[derive(Debug, Clone)]
pub struct SlotStarts {
    cursor: DateTime<Utc>,
    window_end: DateTime<Utc>,
    duration: Duration,
    interval: Duration,
    hours: HourRange,
    weekdays: Vec<Weekday>,
    exhausted: bool,
}

impl SlotStarts {
    /// Build a generator for `duration_minutes`-long slots inside `window`.
    ///
    /// A non-positive duration or slot interval produces an empty sequence;
    /// out-of-range preferred hours are clamped to 23. Callers that want hard
    /// failures for those instead go through `rank_available_slots`, which
    /// validates them up front.
    pub fn new(window: &TimeWindow, duration_minutes: i64, prefs: &Preferences) -> Self {
        let hours = HourRange::new(
            prefs.generation_hours.start_hour.min(23),
            prefs.generation_hours.end_hour.min(23),
        );
        let degenerate = window.from >= window.to
            || duration_minutes <= 0
            || prefs.slot_interval_minutes <= 0;
        SlotStarts {
            cursor: day_at_hour(window.from.date_naive(), hours.start_hour),
            window_end: window.to,
            duration: Duration::minutes(duration_minutes.max(0)),
            interval: Duration::minutes(prefs.slot_interval_minutes.max(1)),
            hours,
            weekdays: prefs.preferred_weekdays.clone(),
            exhausted: degenerate,
        }
    }

    fn advance(&mut self) {
        self.cursor += self.interval;
        if self.cursor.hour() >= self.hours.end_hour {
            let next_day = self.cursor.date_naive() + Duration::days(1);
            self.cursor = day_at_hour(next_day, self.hours.start_hour);
        }
    }

    fn is_candidate(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        // A slot that would cross past the preferred end hour, even by one
        // minute, is rejected outright rather than truncated. Comparing
        // against end_hour:00 on the start day also rules out any candidate
        // wrapping across midnight.
        start.hour() >= self.hours.start_hour
            && end <= day_at_hour(start.date_naive(), self.hours.end_hour)
            && (self.weekdays.is_empty() || self.weekdays.contains(&start.weekday()))
    }
}

impl Iterator for SlotStarts {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        if self.exhausted {
            return None;
        }
        while self.cursor < self.window_end {
            let start = self.cursor;
            let end = start + self.duration;
            self.advance();
            if self.is_candidate(start, end) {
                return Some(start);
            }
        }
        self.exhausted = true;
        None
    }
}

/// `hour:00:00` on the given day.
fn day_at_hour(day: NaiveDate, hour: u32) -> DateTime<Utc> {
    day.and_hms_opt(hour.min(23), 0, 0)
        .expect("clamped hour is a valid time of day")
        .and_utc()
}
