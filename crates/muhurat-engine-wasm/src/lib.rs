//! WASM bindings for muhurat-engine.
//!
//! Exposes the per-day and date-range pipelines to JavaScript via
//! `wasm-bindgen`. Complex types cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p muhurat-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/muhurat_engine_wasm.wasm
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;
use muhurat_engine::{DayView, RawDay};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Parse an ISO 8601 calendar date (`2024-01-05`).
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Reconcile one day.
///
/// # Arguments
/// - `date` -- ISO calendar date (e.g., "2024-01-05")
/// - `timezone` -- IANA timezone (e.g., "Asia/Kolkata")
/// - `raw_json` -- JSON object mapping category → window string or list of
///   window strings
///
/// Returns a JSON object with `categories`, `free` and `conducive` interval
/// lists plus the day bounds.
#[wasm_bindgen(js_name = "computeDay")]
pub fn compute_day(date: &str, timezone: &str, raw_json: &str) -> Result<String, JsValue> {
    let date = parse_date(date)?;
    let tz = muhurat_engine::parse_timezone(timezone).map_err(js_err)?;
    let raw: RawDay = serde_json::from_str(raw_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid timings JSON: {}", e)))?;

    let day = muhurat_engine::compute_day(date, tz, &raw).map_err(js_err)?;
    to_json(&DayView::from(&day))
}

/// Reconcile every date in an inclusive range.
///
/// `raw_json` maps ISO dates to the same per-day objects `computeDay` takes.
/// Dates without an entry are skipped. Returns a JSON array of day objects.
#[wasm_bindgen(js_name = "computeRange")]
pub fn compute_range(
    start: &str,
    end: &str,
    timezone: &str,
    raw_json: &str,
) -> Result<String, JsValue> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    let tz = muhurat_engine::parse_timezone(timezone).map_err(js_err)?;
    let mut by_date: BTreeMap<NaiveDate, RawDay> = serde_json::from_str(raw_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid timings JSON: {}", e)))?;

    let days = muhurat_engine::compute_range(start, end, tz, |date| by_date.remove(&date))
        .map_err(js_err)?;
    let views: Vec<DayView> = days.iter().map(DayView::from).collect();
    to_json(&views)
}
