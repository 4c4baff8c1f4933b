//! Error types for slot-engine operations.
//!
//! Only programming-contract violations surface as errors. Malformed busy
//! intervals are filtered out during indexing, and degenerate requests
//! (inverted window, non-positive duration, zero participants) produce an
//! empty result: "no common time found" is a normal business answer.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("max_results must be positive")]
    InvalidMaxResults,

    #[error("slot_interval_minutes must be positive (got {0})")]
    InvalidSlotInterval(i64),

    #[error("preferred hours must be within 0-23 (got {start_hour}-{end_hour})")]
    InvalidHourRange { start_hour: u32, end_hour: u32 },
}

pub type Result<T> = std::result::Result<T, SlotError>;
