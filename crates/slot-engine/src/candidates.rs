//! Candidate end times for a new run of appointment slots.
//!
//! From a start time, a slot duration, and a gap, valid end times stack up as
//! `start + duration * i + gap * (i - 1)` for i = 1, 2, 3, ... Generation
//! stops at the 1440-minute day boundary (exclusive). The overlap-aware
//! variant additionally drops candidates whose newly added slot segment would
//! touch an existing window, so holes in the emitted sequence are expected.

use crate::clock::{check_durations, format_minutes, TimeOfDay, DAY_BOUNDARY_MINUTES};
use crate::error::Result;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One selectable end time, formatted for a form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndTimeOption {
    pub value: String,
    pub label: String,
}

impl From<TimeOfDay> for EndTimeOption {
    fn from(t: TimeOfDay) -> Self {
        let text = t.to_string();
        EndTimeOption {
            value: text.clone(),
            label: text,
        }
    }
}

/// A half-open `[start, end)` window already taken by an existing slot,
/// booked or available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl OccupiedWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        OccupiedWindow { start, end }
    }

    /// Half-open intersection: `[a,b)` meets `[c,d)` iff `a < d && b > c`.
    /// Windows that merely touch do not overlap.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.end && end > self.start
    }
}

/// Candidate end minutes strictly before the day boundary, ascending.
///
/// The iteration cap is derived from the step size so that degenerate inputs
/// stay bounded while 1-minute slots can still cover the whole day; a fixed
/// cap would silently truncate late-day candidates. The walk saturates
/// instead of wrapping, so outsized durations or gaps land past the boundary
/// and terminate like any other late candidate.
fn candidate_minutes(start: TimeOfDay, duration_minutes: i64, gap_minutes: i64) -> Vec<i64> {
    let step = duration_minutes.saturating_add(gap_minutes).max(1);
    // ceil(1440 / step) + 1, in a form that stays in range for any step.
    let cap = (DAY_BOUNDARY_MINUTES - 1) / step + 2;

    let mut ends = Vec::new();
    let mut end = start.minutes().saturating_add(duration_minutes);
    for _ in 0..cap {
        if end >= DAY_BOUNDARY_MINUTES {
            break;
        }
        ends.push(end);
        end = end.saturating_add(step);
    }
    ends
}

/// Generate every end time reachable from `start` before the end of day.
///
/// The i-th candidate closes a run of `i` slots of `duration_minutes` each,
/// separated by `gap_minutes`. A candidate landing exactly on 24:00 is
/// excluded. An empty result is an ordinary outcome, not an error.
///
/// # Errors
/// `InvalidDuration` when `duration_minutes <= 0`, `InvalidGap` when
/// `gap_minutes < 0`, both rejected before any candidate is produced.
pub fn end_time_options(
    start: TimeOfDay,
    duration_minutes: i64,
    gap_minutes: i64,
) -> Result<Vec<EndTimeOption>> {
    check_durations(duration_minutes, gap_minutes)?;

    let options = candidate_minutes(start, duration_minutes, gap_minutes)
        .into_iter()
        .map(|end| {
            let text = format_minutes(end);
            EndTimeOption {
                value: text.clone(),
                label: text,
            }
        })
        .collect();
    Ok(options)
}

/// Like [`end_time_options`], but skips candidates that collide with
/// existing slots on `date`.
///
/// Choosing the i-th candidate adds the slot segment
/// `[end - duration, end)` on top of the run closed by candidate i-1, so a
/// candidate is dropped exactly when that final segment overlaps an occupied
/// window (half-open semantics). Skipped candidates leave holes in the
/// sequence; generation continues past them.
///
/// Occupied windows may span any dates; only those on `date` can collide.
///
/// # Errors
/// Same contract as [`end_time_options`].
pub fn end_time_options_avoiding(
    start: TimeOfDay,
    duration_minutes: i64,
    gap_minutes: i64,
    date: NaiveDate,
    occupied: &[OccupiedWindow],
) -> Result<Vec<EndTimeOption>> {
    check_durations(duration_minutes, gap_minutes)?;

    let mut windows = occupied.to_vec();
    windows.sort_by_key(|w| (w.start, w.end));

    let mut options = Vec::new();
    for end in candidate_minutes(start, duration_minutes, gap_minutes) {
        // Candidate ends sit strictly inside the day, so both bounds convert.
        let end_time = TimeOfDay::from_minutes(end)?;
        let segment_start = TimeOfDay::from_minutes(end - duration_minutes)?.at(date);
        let segment_end = end_time.at(date);
        if windows
            .iter()
            .any(|w| w.overlaps(segment_start, segment_end))
        {
            continue;
        }
        options.push(EndTimeOption::from(end_time));
    }
    Ok(options)
}
