//! Tests for wall-clock times: parsing, rendering, and the humanized
//! durations shown on gap labels.

use chrono::NaiveTime;
use serde_json::json;
use slot_engine::clock::{format_minutes, humanize_minutes, TimeOfDay};
use slot_engine::error::SlotError;

// --- parsing ---

#[test]
fn parses_plain_hour_minute_strings() {
    let t = TimeOfDay::parse("09:05").unwrap();
    assert_eq!(t.minutes(), 545);
    assert_eq!(t.to_string(), "09:05");
}

#[test]
fn unpadded_fields_still_parse() {
    assert_eq!(
        TimeOfDay::parse("9:30").unwrap(),
        TimeOfDay::parse("09:30").unwrap()
    );
}

#[test]
fn second_resolution_times_truncate_to_the_minute() {
    // The wire format carries "HH:MM:SS"; seconds are validated, then dropped.
    assert_eq!(
        TimeOfDay::parse("10:30:45").unwrap(),
        TimeOfDay::parse("10:30").unwrap()
    );
    assert_eq!(TimeOfDay::parse("00:00:00").unwrap(), TimeOfDay::MIDNIGHT);
}

#[test]
fn out_of_range_fields_are_rejected() {
    for bad in ["24:00", "25:00", "10:60", "10:30:60"] {
        assert!(
            matches!(TimeOfDay::parse(bad), Err(SlotError::InvalidTime(_))),
            "{bad} is not a wall-clock time"
        );
    }
}

#[test]
fn malformed_strings_are_rejected() {
    for bad in ["", "abc", "10", "1030", "10:", "10:30:45:00", "-1:30"] {
        assert!(
            matches!(TimeOfDay::parse(bad), Err(SlotError::InvalidTime(_))),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn minute_counts_must_fall_within_one_day() {
    assert_eq!(TimeOfDay::from_minutes(0).unwrap(), TimeOfDay::MIDNIGHT);
    assert_eq!(TimeOfDay::from_minutes(1439).unwrap().to_string(), "23:59");
    assert!(matches!(
        TimeOfDay::from_minutes(1440),
        Err(SlotError::InvalidTime(_))
    ));
    assert!(matches!(
        TimeOfDay::from_minutes(-1),
        Err(SlotError::InvalidTime(_))
    ));
}

#[test]
fn naive_times_truncate_to_minute_resolution() {
    let t = TimeOfDay::from_time(NaiveTime::from_hms_opt(10, 30, 45).unwrap());
    assert_eq!(t, TimeOfDay::parse("10:30").unwrap());
}

// --- rendering ---

#[test]
fn display_is_zero_padded() {
    assert_eq!(TimeOfDay::parse("7:05").unwrap().to_string(), "07:05");
    assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00");
}

#[test]
fn format_minutes_renders_any_count_in_the_day() {
    assert_eq!(format_minutes(0), "00:00");
    assert_eq!(format_minutes(545), "09:05");
    assert_eq!(format_minutes(1439), "23:59");
}

#[test]
fn serializes_as_the_display_string() {
    let t = TimeOfDay::parse("08:15").unwrap();
    assert_eq!(serde_json::to_value(t).unwrap(), json!("08:15"));

    let back: TimeOfDay = serde_json::from_value(json!("08:15")).unwrap();
    assert_eq!(back, t);
}

#[test]
fn deserializing_a_malformed_time_fails() {
    assert!(serde_json::from_value::<TimeOfDay>(json!("8 o'clock")).is_err());
}

// --- gap humanization ---

#[test]
fn sub_hour_counts_read_as_minutes() {
    assert_eq!(humanize_minutes(0), "0 minutes");
    assert_eq!(humanize_minutes(1), "1 minute");
    assert_eq!(humanize_minutes(45), "45 minutes");
}

#[test]
fn whole_hours_drop_the_minute_part() {
    assert_eq!(humanize_minutes(60), "1 hour");
    assert_eq!(humanize_minutes(120), "2 hours");
}

#[test]
fn mixed_counts_spell_out_both_units() {
    assert_eq!(humanize_minutes(61), "1 hour 1 minute");
    assert_eq!(humanize_minutes(90), "1 hour 30 minutes");
    assert_eq!(humanize_minutes(150), "2 hours 30 minutes");
}
