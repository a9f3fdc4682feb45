//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// Slot durations must be strictly positive minutes.
    #[error("Invalid slot duration: {0} minutes")]
    InvalidDuration(i64),

    /// Gap durations may be zero but never negative.
    #[error("Invalid gap duration: {0} minutes")]
    InvalidGap(i64),

    /// A wall-clock or datetime string that does not parse.
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// Start/end pair in the wrong order, or a window too small for a slot.
    #[error("Invalid time range: {0}")]
    InvalidRange(String),

    /// A plan-level policy violation (past date, month window, recurrence).
    #[error("Invalid plan: {0}")]
    InvalidPlan(String),

    /// Slot id not present in the day being edited.
    #[error("Unknown slot: {0}")]
    UnknownSlot(String),

    /// The operation needs an available slot and this one is booked.
    #[error("Slot {0} is not available")]
    SlotUnavailable(String),

    /// The operation needs a booked slot and this one is open.
    #[error("Slot {0} is not booked")]
    SlotNotBooked(String),

    /// The daily-schedule payload was not valid JSON of either accepted shape.
    #[error("Schedule payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
