//! # slot-engine
//!
//! Common-availability scheduling engine for group meetings.
//!
//! Given the busy-time calendars of a set of participants, a search window, a
//! target meeting duration, and soft preferences (preferred weekdays,
//! preferred hours, scan granularity), the engine enumerates, validates,
//! scores, and ranks candidate meeting slots that are simultaneously free for
//! every participant. It is a pure, synchronous function of its inputs: the
//! surrounding service resolves the participant set, fetches their intervals,
//! and persists the ranked result.
//!
//! ## Modules
//!
//! - [`busy`] — raw availability records indexed per participant
//! - [`generator`] — lazy sequence of candidate slot starts
//! - [`conflict`] — half-open overlap test against busy spans
//! - [`score`] — desirability scoring for conflict-free candidates
//! - [`engine`] — the find → score → rank pipeline
//! - [`merge`] — optional coalescing of adjacent slots (off the default path)
//! - [`error`] — error types

pub mod busy;
pub mod conflict;
pub mod engine;
pub mod error;
pub mod generator;
pub mod merge;
pub mod prefs;
pub mod score;

pub use busy::{AvailabilityStatus, BusyIndex, BusyInterval, BusySpan};
pub use conflict::conflicts;
pub use engine::{
    find_common_slots, rank_available_slots, CandidateSlot, ScoredSlot, SearchRequest, TimeWindow,
};
pub use error::SlotError;
pub use generator::SlotStarts;
pub use merge::merge_adjacent_slots;
pub use prefs::{HourRange, Preferences};
pub use score::score_slot;
