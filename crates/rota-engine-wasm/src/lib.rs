//! WASM bindings for rota-engine.
//!
//! Exposes schedule validation, pattern expansion, lifecycle status, and
//! conflict detection to JavaScript via `wasm-bindgen`. All complex values
//! cross the boundary as JSON strings in the same camelCase shape the web UI
//! already persists, so the bindings are thin parse/serialize shims around
//! the engine.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p rota-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/rota-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/rota_engine_wasm.wasm
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rota_engine::{MonthlyPattern, WeeklySchedule};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON parsing and datetime handling
// ---------------------------------------------------------------------------

/// Parse "YYYY-MM-DDTHH:MM:SS" or a bare "YYYY-MM-DD" (interpreted as
/// midnight) into a `NaiveDateTime`.
fn parse_now(s: &str) -> Result<NaiveDateTime, JsValue> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_schedule(json: &str) -> Result<WeeklySchedule, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weekly schedule JSON: {}", e)))
}

fn parse_pattern(json: &str) -> Result<MonthlyPattern, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid pattern JSON: {}", e)))
}

fn parse_patterns(json: &str) -> Result<Vec<MonthlyPattern>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid patterns JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Validate a weekly schedule document.
///
/// `schedule_json` must be the stored weekly-schedule document. Returns a
/// JSON array of `{day, slotId?, kind}` issue objects; an empty array means
/// the schedule is valid.
#[wasm_bindgen(js_name = "validateWeekly")]
pub fn validate_weekly(schedule_json: &str) -> Result<String, JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    to_json(&rota_engine::validate(&schedule))
}

/// Expand a monthly pattern into its concrete occurrence dates.
///
/// Returns a JSON array of "YYYY-MM-DD" strings, one per resolvable month
/// offset. Drafts expand to an empty array.
#[wasm_bindgen(js_name = "expandPattern")]
pub fn expand_pattern(pattern_json: &str) -> Result<String, JsValue> {
    let pattern = parse_pattern(pattern_json)?;
    to_json(&rota_engine::expand(&pattern))
}

/// Compute a pattern's lifecycle status as of `now`.
///
/// `now` is "YYYY-MM-DDTHH:MM:SS" or "YYYY-MM-DD". Returns a JSON object
/// with `totalMonths`, `monthsCompleted`, `monthsRemaining`, `isActive`,
/// `isExpired`, `progressPercentage`, and `nextOccurrence`.
#[wasm_bindgen(js_name = "patternStatus")]
pub fn pattern_status(pattern_json: &str, now: &str) -> Result<String, JsValue> {
    let pattern = parse_pattern(pattern_json)?;
    let now = parse_now(now)?;
    let status = rota_engine::status(&pattern, now)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&status)
}

/// Find calendar-day conflicts between a candidate pattern and a set of
/// existing patterns.
///
/// `candidate_json` is a single pattern document; `existing_json` is a JSON
/// array of pattern documents. Returns a JSON array of conflicting
/// "YYYY-MM-DD" strings, sorted and de-duplicated.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts(candidate_json: &str, existing_json: &str) -> Result<String, JsValue> {
    let candidate = parse_pattern(candidate_json)?;
    let existing = parse_patterns(existing_json)?;
    to_json(&rota_engine::find_conflicts(&candidate, &existing))
}

/// Summarize a weekly schedule: enabled-day count, slot count, and short
/// day names.
#[wasm_bindgen(js_name = "weeklySummary")]
pub fn weekly_summary(schedule_json: &str) -> Result<String, JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    to_json(&rota_engine::summarize(&schedule))
}
