//! Payloads exchanged with the schedule API, all camelCase JSON.
//!
//! The daily endpoint sometimes wraps its slot list in an object and
//! sometimes returns the bare array; [`parse_daily_schedule`] accepts both.

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::candidates::OccupiedWindow;
use crate::clock::TimeOfDay;
use crate::dayview::Slot;
use crate::error::Result;
use crate::expander::SlotPlan;

/// One slot as the daily-schedule endpoint reports it. Booked slots may
/// carry the appointment id and the patient's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub id: String,
    pub calendar_id: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DailySchedule {
    Wrapped {
        #[serde(default)]
        slots: Vec<ScheduleSlot>,
    },
    Bare(Vec<ScheduleSlot>),
}

/// Payload for the add-slots endpoint, built from a validated plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCreationRequest {
    pub start_date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub slot_duration_minutes: i64,
    pub gap_duration_minutes: i64,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub recurring_days: Vec<u8>,
}

/// Payload for the ranged bulk delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSlotsRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// Payload moving an appointment between two slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    pub old_slot_id: String,
    pub old_calendar_id: String,
    pub new_slot_id: String,
    pub new_calendar_id: String,
}

/// Parse the daily-schedule response in either of its shapes.
///
/// # Errors
///
/// Returns [`SlotError::Payload`](crate::SlotError::Payload) when the JSON
/// matches neither shape or a slot field does not parse.
pub fn parse_daily_schedule(json: &str) -> Result<Vec<ScheduleSlot>> {
    let parsed: DailySchedule = serde_json::from_str(json)?;
    Ok(match parsed {
        DailySchedule::Wrapped { slots } => slots,
        DailySchedule::Bare(slots) => slots,
    })
}

/// The comma-joined `dates` value for the daily-schedule query string.
pub fn daily_query_dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl From<&SlotPlan> for SlotCreationRequest {
    fn from(plan: &SlotPlan) -> Self {
        SlotCreationRequest {
            start_date: plan.start_date,
            start_time: plan.start_time,
            end_time: plan.end_time,
            slot_duration_minutes: plan.duration_minutes,
            gap_duration_minutes: plan.gap_minutes,
            is_recurring: plan.recurring,
            recurring_end_date: plan.recurring_end_date,
            recurring_days: plan.recurring_days.clone(),
        }
    }
}

impl From<ScheduleSlot> for Slot {
    fn from(slot: ScheduleSlot) -> Self {
        Slot {
            id: slot.id,
            start: slot.start_time,
            end: slot.end_time,
            available: slot.available,
            appointment_id: slot.appointment_id,
        }
    }
}

/// Collapse live slots into the windows the overlap-aware generator avoids.
pub fn occupied_windows(slots: &[Slot]) -> Vec<OccupiedWindow> {
    slots
        .iter()
        .map(|s| OccupiedWindow::new(s.start, s.end))
        .collect()
}
