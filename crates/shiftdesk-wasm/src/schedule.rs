//! WASM bindings for schedule arithmetic.
//!
//! Times are `"HH:MM"` strings and dates are ISO `"YYYY-MM-DD"` strings, the
//! same shapes the JS date pickers produce.

use shiftdesk_core::schedule::{self, parse_date, parse_datetime, ScheduleError, Shift, TimeOfDay};
use wasm_bindgen::prelude::*;

/// Paid hours for a same-day shift, minus an unpaid break.
///
/// `shift_hours("08:00", "16:00", 30)` is `7.5`.
#[wasm_bindgen]
pub fn shift_hours(start: &str, end: &str, break_minutes: u32) -> Result<f64, JsValue> {
    hours_from_strings(start, end, break_minutes).map_err(to_js_error)
}

/// Inclusive day count between two ISO dates.
///
/// `days_between("2024-12-25", "2024-12-27")` is `3`.
#[wasm_bindgen]
pub fn days_between(start: &str, end: &str) -> Result<i32, JsValue> {
    days_from_strings(start, end).map_err(to_js_error)
}

/// Demo shifts for `days` days from `start_date`, classified against `now`
/// (`"YYYY-MM-DDTHH:MM[:SS]"`, local time).
///
/// Returns an array of shift objects with camelCase fields.
#[wasm_bindgen]
pub fn generate_shifts(start_date: &str, days: u32, now: &str) -> Result<JsValue, JsValue> {
    let shifts = shifts_from_strings(start_date, days, now).map_err(to_js_error)?;
    Ok(serde_wasm_bindgen::to_value(&shifts)?)
}

fn hours_from_strings(start: &str, end: &str, break_minutes: u32) -> Result<f64, ScheduleError> {
    let start: TimeOfDay = start.parse()?;
    let end: TimeOfDay = end.parse()?;
    Ok(schedule::shift_hours(start, end, break_minutes))
}

fn days_from_strings(start: &str, end: &str) -> Result<i32, ScheduleError> {
    let days = schedule::days_between(parse_date(start)?, parse_date(end)?);
    // chrono dates span well under i32::MAX days
    Ok(days as i32)
}

fn shifts_from_strings(
    start_date: &str,
    days: u32,
    now: &str,
) -> Result<Vec<Shift>, ScheduleError> {
    let start = parse_date(start_date)?;
    let now = parse_datetime(now)?;
    Ok(schedule::generate_shifts_for_days(start, days, now))
}

fn to_js_error(err: ScheduleError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
