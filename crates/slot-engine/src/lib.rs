//! # slot-engine
//!
//! Deterministic appointment-slot arithmetic for clinic scheduling UIs.
//!
//! The engine turns a start time, a slot duration, and a gap into the list
//! of end times a schedule form may offer, and carries the day-level
//! bookkeeping around those slots: materializing plans into windows,
//! merging them into days that already have slots, vetting resizes, moving
//! appointments, and paging the three-day calendar view. Everything is a
//! pure function of its arguments; the engine never reads the clock and
//! never performs I/O.
//!
//! ## Modules
//!
//! - [`candidates`]: start + duration + gap to the offered end times
//! - [`validity`]: start-time and plan validation against a supplied now
//! - [`expander`]: slot plans to concrete per-day windows
//! - [`merge`]: admit planned windows into an already-populated day
//! - [`resize`]: extend or reduce live slots with conflict vetting
//! - [`booking`]: reschedule, release, and ranged cleanup
//! - [`dayview`]: three-day paging, selection, and per-day partitioning
//! - [`wire`]: JSON payloads of the schedule API
//! - [`clock`]: minute-of-day arithmetic and formatting
//! - [`error`]: error types

pub mod booking;
pub mod candidates;
pub mod clock;
pub mod dayview;
pub mod error;
pub mod expander;
pub mod merge;
pub mod resize;
pub mod validity;
pub mod wire;

pub use candidates::{end_time_options, end_time_options_avoiding, EndTimeOption, OccupiedWindow};
pub use clock::TimeOfDay;
pub use dayview::Slot;
pub use error::SlotError;
pub use expander::{expand_plan, SlotPlan};
pub use merge::merge_new_windows;
pub use validity::is_start_time_valid;
