//! Per-participant busy-interval indexing.
//!
//! Groups a flat list of raw availability records into a lookup keyed by
//! participant. Only `busy` entries constrain scheduling; `available` and
//! `tentative` entries neither free time nor block it, so they are dropped
//! during indexing (a content rule, not an error).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conflict::conflicts;

/// Status of a raw availability record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    /// The owner is unavailable during this interval.
    Busy,
    /// The owner explicitly marked this interval free.
    Available,
    /// The owner may or may not be free; treated as non-constraining.
    Tentative,
}

/// A raw availability record as supplied by the caller, tagged with the
/// participant that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub owner_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: AvailabilityStatus,
}

/// A validated busy range inside the index. Always satisfies `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusySpan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Busy spans grouped by participant id.
///
/// Every owner appearing in the input gets an entry, even when all of their
/// records are non-busy or malformed. Such a participant imposes no
/// constraint (vacuously free for every candidate) but still counts toward
/// the participant total reported on returned slots.
#[derive(Debug, Clone, Default)]
pub struct BusyIndex {
    spans: HashMap<String, Vec<BusySpan>>,
}

impl BusyIndex {
    /// Build the index in one pass over the raw records.
    ///
    /// An interval is retained as a constraining span only when its status is
    /// [`AvailabilityStatus::Busy`] and `start < end`; intervals violating
    /// the ordering invariant are discarded rather than rejected, since
    /// excluding them only under-constrains that one interval.
    pub fn from_intervals(intervals: &[BusyInterval]) -> Self {
        let mut spans: HashMap<String, Vec<BusySpan>> = HashMap::new();
        for interval in intervals {
            let entry = spans.entry(interval.owner_id.clone()).or_default();
            if interval.status == AvailabilityStatus::Busy && interval.start < interval.end {
                entry.push(BusySpan {
                    start: interval.start,
                    end: interval.end,
                });
            }
        }
        BusyIndex { spans }
    }

    /// Number of distinct participants present in the input.
    pub fn participant_count(&self) -> usize {
        self.spans.len()
    }

    /// True when no participant at all was supplied.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The busy spans recorded for one participant, if present.
    pub fn spans_for(&self, owner_id: &str) -> Option<&[BusySpan]> {
        self.spans.get(owner_id).map(Vec::as_slice)
    }

    /// True when the candidate `[slot_start, slot_end)` is free for every
    /// indexed participant. Participants without busy spans never conflict.
    pub fn is_free_for_all(&self, slot_start: DateTime<Utc>, slot_end: DateTime<Utc>) -> bool {
        self.spans
            .values()
            .all(|busy| !conflicts(slot_start, slot_end, busy))
    }
}
