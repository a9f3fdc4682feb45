//! WASM bindings for slot-engine.
//!
//! Exposes end-time candidate generation, slot-plan expansion, and start-time
//! validation to JavaScript via `wasm-bindgen`. All complex types are passed
//! as JSON strings; times are `"HH:MM"`, dates `"YYYY-MM-DD"`, and datetimes
//! `"YYYY-MM-DDTHH:MM:SS"`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! # Rename .js -> .cjs for ESM compatibility
//! mv packages/slot-engine-js/wasm/slot_engine_wasm.js \
//!    packages/slot-engine-js/wasm/slot_engine_wasm.cjs
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use slot_engine::candidates::OccupiedWindow;
use slot_engine::clock::{humanize_minutes, TimeOfDay};
use slot_engine::expander::SlotPlan;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for occupied windows passed from JavaScript.
#[derive(Deserialize)]
struct WindowInput {
    start: String,
    end: String,
}

// ---------------------------------------------------------------------------
// Helpers: parse the string formats the form layer sends
// ---------------------------------------------------------------------------

fn parse_time(s: &str) -> Result<TimeOfDay, JsValue> {
    TimeOfDay::parse(s).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime, JsValue> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

/// Convert a JSON array of `{start, end}` objects into occupied windows.
fn parse_windows_json(json: &str) -> Result<Vec<OccupiedWindow>, JsValue> {
    let inputs: Vec<WindowInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid windows JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            let start = parse_datetime(&input.start)?;
            let end = parse_datetime(&input.end)?;
            Ok(OccupiedWindow::new(start, end))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate the selectable end times for a slot run.
///
/// Returns a JSON string containing an array of `{value, label}` objects,
/// both `"HH:MM"`.
///
/// # Arguments
/// - `start_time` -- Run start as `"HH:MM"`
/// - `duration_minutes` -- Length of each slot in minutes
/// - `gap_minutes` -- Idle minutes between consecutive slots
#[wasm_bindgen(js_name = "endTimeOptions")]
pub fn end_time_options(
    start_time: &str,
    duration_minutes: i32,
    gap_minutes: i32,
) -> Result<String, JsValue> {
    let start = parse_time(start_time)?;
    let options =
        slot_engine::end_time_options(start, i64::from(duration_minutes), i64::from(gap_minutes))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&options)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Like [`end_time_options`], but skips end times whose newly added slot
/// would collide with an existing one on `date`.
///
/// `occupied_json` must be a JSON array of `{start, end}` objects with
/// `"YYYY-MM-DDTHH:MM:SS"` datetime strings.
#[wasm_bindgen(js_name = "endTimeOptionsAvoiding")]
pub fn end_time_options_avoiding(
    start_time: &str,
    duration_minutes: i32,
    gap_minutes: i32,
    date: &str,
    occupied_json: &str,
) -> Result<String, JsValue> {
    let start = parse_time(start_time)?;
    let date = parse_date(date)?;
    let occupied = parse_windows_json(occupied_json)?;

    let options = slot_engine::end_time_options_avoiding(
        start,
        i64::from(duration_minutes),
        i64::from(gap_minutes),
        date,
        &occupied,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&options)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Whether a slot starting at `start_time` on `date` still lies in the
/// future relative to `now`.
#[wasm_bindgen(js_name = "isStartTimeValid")]
pub fn is_start_time_valid(date: &str, start_time: &str, now: &str) -> Result<bool, JsValue> {
    let date = parse_date(date)?;
    let start = parse_time(start_time)?;
    let now = parse_datetime(now)?;
    Ok(slot_engine::is_start_time_valid(date, start, now))
}

/// Expand a slot plan into its concrete per-day windows.
///
/// `plan_json` carries the camelCase plan object (`startDate`, `startTime`,
/// `endTime`, `durationMinutes`, `gapMinutes`, `recurring`,
/// `recurringEndDate`, `recurringDays`). Returns a JSON string containing an
/// array of `{date, windows}` objects.
#[wasm_bindgen(js_name = "expandPlan")]
pub fn expand_plan(plan_json: &str) -> Result<String, JsValue> {
    let plan: SlotPlan = serde_json::from_str(plan_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid plan JSON: {}", e)))?;

    let days = slot_engine::expand_plan(&plan).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&days)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Human-readable label for a gap length, e.g. `"1 hour 30 minutes"`.
#[wasm_bindgen(js_name = "humanizeGap")]
pub fn humanize_gap(minutes: i32) -> String {
    humanize_minutes(i64::from(minutes))
}
