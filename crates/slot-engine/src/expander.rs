//! Materialize a slot plan into concrete windows, day by day.
//!
//! A plan covers a single date, or a recurring run of dates filtered by a
//! Sunday-indexed weekday mask. Windows carry no identity; ids are assigned
//! by whatever persists them.

use crate::clock::{check_durations, TimeOfDay};
use crate::error::{Result, SlotError};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A planned slot window that has not been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// One day's materialized windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub windows: Vec<SlotWindow>,
}

/// The validated form state behind slot creation.
///
/// `recurring_days` holds Sunday-indexed weekdays (Sunday = 0 through
/// Saturday = 6) and is consulted only when `recurring` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotPlan {
    pub start_date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub duration_minutes: i64,
    pub gap_minutes: i64,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub recurring_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub recurring_days: Vec<u8>,
}

/// Sunday-first weekday index (Sunday = 0 ... Saturday = 6).
pub fn sunday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Materialize the slot windows for one day.
///
/// Emits `[cursor, cursor + duration)` repeatedly from `start`, advancing the
/// cursor by `duration + gap`. A window ending exactly at `end` is kept; the
/// first window that would run past it stops generation.
///
/// # Errors
/// `InvalidDuration` / `InvalidGap` for a non-positive duration or negative
/// gap, `InvalidRange` when `start` is not before `end` or a single slot
/// cannot fit between them.
pub fn day_windows(
    date: NaiveDate,
    start: TimeOfDay,
    end: TimeOfDay,
    duration_minutes: i64,
    gap_minutes: i64,
) -> Result<Vec<SlotWindow>> {
    check_durations(duration_minutes, gap_minutes)?;
    if start >= end {
        return Err(SlotError::InvalidRange(format!(
            "start time {} is not before end time {}",
            start, end
        )));
    }
    if duration_minutes > end.minutes() - start.minutes() {
        return Err(SlotError::InvalidRange(format!(
            "a {}-minute slot does not fit between {} and {}",
            duration_minutes, start, end
        )));
    }

    let day_end = end.at(date);
    let duration = Duration::minutes(duration_minutes);
    let step = Duration::minutes(duration_minutes + gap_minutes);

    let mut windows = Vec::new();
    let mut cursor = start.at(date);
    loop {
        let slot_end = cursor + duration;
        if slot_end > day_end {
            break;
        }
        windows.push(SlotWindow {
            start: cursor,
            end: slot_end,
        });
        cursor += step;
    }
    Ok(windows)
}

/// The concrete dates a plan covers, in ascending order.
///
/// Non-recurring plans cover exactly `start_date`. Recurring plans walk
/// `start_date` through `recurring_end_date` inclusive, keeping dates whose
/// weekday appears in the day mask.
///
/// # Errors
/// `InvalidPlan` when a recurring plan lacks an end date or its end date
/// precedes the start.
pub fn plan_dates(plan: &SlotPlan) -> Result<Vec<NaiveDate>> {
    if !plan.recurring {
        return Ok(vec![plan.start_date]);
    }
    let Some(end_date) = plan.recurring_end_date else {
        return Err(SlotError::InvalidPlan(
            "recurring plans need an end date".to_string(),
        ));
    };
    if end_date < plan.start_date {
        return Err(SlotError::InvalidPlan(
            "recurring end date precedes the start date".to_string(),
        ));
    }

    Ok(plan
        .start_date
        .iter_days()
        .take_while(|d| *d <= end_date)
        .filter(|d| plan.recurring_days.contains(&sunday_index(*d)))
        .collect())
}

/// Expand a plan into one [`DaySlots`] per scheduled date.
///
/// # Errors
/// Anything [`plan_dates`] or [`day_windows`] rejects.
pub fn expand_plan(plan: &SlotPlan) -> Result<Vec<DaySlots>> {
    let dates = plan_dates(plan)?;
    let mut days = Vec::with_capacity(dates.len());
    for date in dates {
        let windows = day_windows(
            date,
            plan.start_time,
            plan.end_time,
            plan.duration_minutes,
            plan.gap_minutes,
        )?;
        days.push(DaySlots { date, windows });
    }
    Ok(days)
}
