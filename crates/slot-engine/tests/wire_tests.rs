//! Tests for the schedule API payloads and their JSON shapes.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};
use slot_engine::clock::TimeOfDay;
use slot_engine::dayview::Slot;
use slot_engine::error::SlotError;
use slot_engine::expander::SlotPlan;
use slot_engine::wire::{
    daily_query_dates, occupied_windows, parse_daily_schedule, DeleteSlotsRequest,
    RescheduleRequest, ScheduleSlot, SlotCreationRequest,
};

fn t(hhmm: &str) -> TimeOfDay {
    TimeOfDay::parse(hhmm).unwrap()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn dt(y: i32, m: u32, day: u32, hhmm: &str) -> NaiveDateTime {
    t(hhmm).at(d(y, m, day))
}

// --- daily schedule responses ---

#[test]
fn parses_the_wrapped_response_shape() {
    let json = r#"{
        "slots": [
            {
                "id": "s1",
                "calendarId": "cal-9",
                "startTime": "2026-08-24T09:00:00",
                "endTime": "2026-08-24T09:30:00",
                "available": true
            }
        ]
    }"#;

    let slots = parse_daily_schedule(json).unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].id, "s1");
    assert_eq!(slots[0].calendar_id, "cal-9");
    assert_eq!(slots[0].start_time, dt(2026, 8, 24, "09:00"));
    assert!(slots[0].available);
    assert_eq!(slots[0].appointment_id, None);
    assert_eq!(slots[0].patient_name, None);
}

#[test]
fn parses_the_bare_array_shape() {
    let json = r#"[
        {
            "id": "s2",
            "calendarId": "cal-9",
            "startTime": "2026-08-24T10:00:00",
            "endTime": "2026-08-24T10:30:00",
            "available": false,
            "appointmentId": "appt-7",
            "patientName": "Ada Osei"
        }
    ]"#;

    let slots = parse_daily_schedule(json).unwrap();
    assert_eq!(slots.len(), 1);
    assert!(!slots[0].available);
    assert_eq!(slots[0].appointment_id.as_deref(), Some("appt-7"));
    assert_eq!(slots[0].patient_name.as_deref(), Some("Ada Osei"));
}

#[test]
fn empty_object_means_no_slots() {
    assert!(parse_daily_schedule("{}").unwrap().is_empty());
}

#[test]
fn extra_response_keys_are_ignored() {
    let json = r#"{"date": "2026-08-24", "slots": []}"#;
    assert!(parse_daily_schedule(json).unwrap().is_empty());
}

#[test]
fn malformed_responses_surface_as_payload_errors() {
    assert!(matches!(
        parse_daily_schedule(r#"{"slots": "nope"}"#),
        Err(SlotError::Payload(_))
    ));
    assert!(matches!(
        parse_daily_schedule("not json"),
        Err(SlotError::Payload(_))
    ));
}

#[test]
fn daily_query_dates_joins_with_commas() {
    let dates = [d(2026, 8, 24), d(2026, 8, 25), d(2026, 8, 26)];
    assert_eq!(daily_query_dates(&dates), "2026-08-24,2026-08-25,2026-08-26");
    assert_eq!(daily_query_dates(&[]), "");
}

// --- request payloads ---

#[test]
fn creation_request_serializes_in_camel_case() {
    let request = SlotCreationRequest {
        start_date: d(2026, 8, 24),
        start_time: t("09:00"),
        end_time: t("17:00"),
        slot_duration_minutes: 30,
        gap_duration_minutes: 10,
        is_recurring: true,
        recurring_end_date: Some(d(2026, 8, 31)),
        recurring_days: vec![1, 3],
    };

    let value: Value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "startDate": "2026-08-24",
            "startTime": "09:00",
            "endTime": "17:00",
            "slotDurationMinutes": 30,
            "gapDurationMinutes": 10,
            "isRecurring": true,
            "recurringEndDate": "2026-08-31",
            "recurringDays": [1, 3]
        })
    );
}

#[test]
fn one_off_creation_request_omits_the_recurrence_end() {
    let request = SlotCreationRequest {
        start_date: d(2026, 8, 24),
        start_time: t("09:00"),
        end_time: t("12:00"),
        slot_duration_minutes: 30,
        gap_duration_minutes: 0,
        is_recurring: false,
        recurring_end_date: None,
        recurring_days: Vec::new(),
    };

    let value: Value = serde_json::to_value(&request).unwrap();
    assert!(value.get("recurringEndDate").is_none());
    assert_eq!(value["recurringDays"], json!([]));
}

#[test]
fn creation_request_comes_straight_from_a_plan() {
    let plan = SlotPlan {
        start_date: d(2026, 8, 24),
        start_time: t("09:00"),
        end_time: t("17:00"),
        duration_minutes: 45,
        gap_minutes: 5,
        recurring: true,
        recurring_end_date: Some(d(2026, 8, 31)),
        recurring_days: vec![0, 6],
    };

    let request = SlotCreationRequest::from(&plan);
    assert_eq!(request.slot_duration_minutes, 45);
    assert_eq!(request.gap_duration_minutes, 5);
    assert!(request.is_recurring);
    assert_eq!(request.recurring_days, [0, 6]);
    assert_eq!(request.recurring_end_date, Some(d(2026, 8, 31)));
}

#[test]
fn delete_request_round_trips() {
    let request = DeleteSlotsRequest {
        start_date: d(2026, 8, 24),
        end_date: d(2026, 8, 26),
        start_time: t("09:00"),
        end_time: t("11:00"),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"startDate\":\"2026-08-24\""));
    assert!(json.contains("\"endTime\":\"11:00\""));

    let back: DeleteSlotsRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, request);
}

#[test]
fn reschedule_request_names_both_slots() {
    let request = RescheduleRequest {
        old_slot_id: "s1".to_string(),
        old_calendar_id: "cal-9".to_string(),
        new_slot_id: "s2".to_string(),
        new_calendar_id: "cal-9".to_string(),
    };

    let value: Value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "oldSlotId": "s1",
            "oldCalendarId": "cal-9",
            "newSlotId": "s2",
            "newCalendarId": "cal-9"
        })
    );
}

// --- conversions ---

#[test]
fn schedule_slots_convert_into_engine_slots() {
    let wire = ScheduleSlot {
        id: "s1".to_string(),
        calendar_id: "cal-9".to_string(),
        start_time: dt(2026, 8, 24, "09:00"),
        end_time: dt(2026, 8, 24, "09:30"),
        available: false,
        appointment_id: Some("appt-7".to_string()),
        patient_name: Some("Ada Osei".to_string()),
    };

    let slot = Slot::from(wire);
    assert_eq!(slot.id, "s1");
    assert_eq!(slot.start, dt(2026, 8, 24, "09:00"));
    assert_eq!(slot.end, dt(2026, 8, 24, "09:30"));
    assert!(!slot.available);
    assert_eq!(slot.appointment_id.as_deref(), Some("appt-7"));
}

#[test]
fn occupied_windows_cover_every_slot() {
    let slots = vec![
        Slot {
            id: "a".to_string(),
            start: dt(2026, 8, 24, "09:00"),
            end: dt(2026, 8, 24, "09:30"),
            available: true,
            appointment_id: None,
        },
        Slot {
            id: "b".to_string(),
            start: dt(2026, 8, 24, "10:00"),
            end: dt(2026, 8, 24, "10:30"),
            available: false,
            appointment_id: Some("appt-1".to_string()),
        },
    ];

    let windows = occupied_windows(&slots);
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].start, dt(2026, 8, 24, "09:00"));
    assert_eq!(windows[1].end, dt(2026, 8, 24, "10:30"));
}
