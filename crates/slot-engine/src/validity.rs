//! Form-level validity rules for dates, start times, and whole plans.

use crate::clock::TimeOfDay;
use crate::dayview::last_day_of_month;
use crate::error::{Result, SlotError};
use crate::expander::{day_windows, plan_dates, sunday_index, SlotPlan};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::cmp::Ordering;

/// The platform floor for a slot's length. The candidate generator accepts
/// any positive duration; this floor applies to plans and resizes only.
pub const MIN_SLOT_MINUTES: i64 = 15;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Whether a start time on `date` is still selectable at `now`.
///
/// Past dates are never valid and future dates always are. On the current
/// day the start must lie at or after `now`'s time-of-day with seconds
/// truncated, so a start during the current minute still passes.
pub fn is_start_time_valid(date: NaiveDate, start: TimeOfDay, now: NaiveDateTime) -> bool {
    match date.cmp(&now.date()) {
        Ordering::Less => false,
        Ordering::Greater => true,
        Ordering::Equal => start >= TimeOfDay::from_time(now.time()),
    }
}

/// The earliest quarter-hour mark (:00/:15/:30/:45) not before `now`'s time,
/// used as the lower bound of the start-time picker on the current day.
///
/// `None` once rounding would cross into the next day (nothing after 23:45
/// rounds to a same-day start).
pub fn earliest_quarter_hour(now: NaiveDateTime) -> Option<TimeOfDay> {
    let minutes = i64::from(now.hour()) * 60 + i64::from(now.minute());
    let rounded = (minutes + 14) / 15 * 15;
    TimeOfDay::from_minutes(rounded).ok()
}

/// Validate a plan against platform policy before expanding it.
///
/// Beyond the arithmetic contract (positive duration, non-negative gap,
/// start before end, one slot fitting the range), plans must start today or
/// later, stay within `today`'s month, and recurring plans need a day mask
/// and an end date on or after the start.
///
/// # Errors
/// `InvalidPlan` for policy violations, plus anything [`day_windows`] or
/// [`plan_dates`] rejects for the time combination itself.
pub fn validate_plan(plan: &SlotPlan, today: NaiveDate) -> Result<()> {
    if plan.duration_minutes < MIN_SLOT_MINUTES {
        return Err(SlotError::InvalidPlan(format!(
            "slot duration must be at least {} minutes",
            MIN_SLOT_MINUTES
        )));
    }

    // Probe one day to vet the start/end/duration/gap combination.
    day_windows(
        plan.start_date,
        plan.start_time,
        plan.end_time,
        plan.duration_minutes,
        plan.gap_minutes,
    )?;

    let month_end = last_day_of_month(today);
    if plan.start_date < today {
        return Err(SlotError::InvalidPlan(
            "cannot add slots for past dates".to_string(),
        ));
    }
    if plan.start_date > month_end {
        return Err(SlotError::InvalidPlan(
            "cannot add slots beyond the current month".to_string(),
        ));
    }

    if plan.recurring {
        if plan.recurring_days.is_empty() {
            return Err(SlotError::InvalidPlan(
                "recurring plans need at least one weekday".to_string(),
            ));
        }
        if let Some(end_date) = plan.recurring_end_date {
            if end_date > month_end {
                return Err(SlotError::InvalidPlan(
                    "recurring slots cannot extend past the current month".to_string(),
                ));
            }
        }
        // Also vets that the end date is present and not before the start.
        plan_dates(plan)?;
    }

    Ok(())
}

/// A recurring plan whose start date's weekday is missing from its own mask.
/// The form layer phrases the confirmation dialog from these names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMismatch {
    pub selected_day: &'static str,
    pub recurring_days: Vec<&'static str>,
}

/// Detect the day-mask mismatch worth warning about: a recurring plan that
/// starts on a weekday it will never repeat on. `None` when consistent or
/// not recurring.
pub fn day_mismatch(plan: &SlotPlan) -> Option<DayMismatch> {
    if !plan.recurring || plan.recurring_days.is_empty() {
        return None;
    }
    let start_index = sunday_index(plan.start_date);
    if plan.recurring_days.contains(&start_index) {
        return None;
    }
    Some(DayMismatch {
        selected_day: DAY_NAMES[usize::from(start_index)],
        recurring_days: plan
            .recurring_days
            .iter()
            .filter(|d| **d < 7)
            .map(|d| DAY_NAMES[usize::from(*d)])
            .collect(),
    })
}
