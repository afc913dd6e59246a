//! WASM bindings for the browser front end

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{draw, parse_exclusions, share_text, DrawHistory, DrawRequest, HistoryEntry};

fn parse_request(json: &str) -> Result<DrawRequest, JsError> {
    serde_json::from_str(json).map_err(|e| JsError::new(&format!("Invalid request: {}", e)))
}

/// Empty input means an empty history, not an error
fn parse_history(json: &str) -> Result<DrawHistory, JsError> {
    if json.trim().is_empty() {
        return Ok(DrawHistory::new());
    }
    DrawHistory::from_json(json).map_err(|e| JsError::new(&format!("Invalid history: {}", e)))
}

/// Draw numbers
///
/// # Arguments
/// * `request_json` - JSON serialized DrawRequest (camelCase fields, missing ones defaulted)
///
/// # Returns
/// Array of drawn numbers, or the validation error message
#[wasm_bindgen]
pub fn draw_numbers(request_json: &str) -> Result<JsValue, JsError> {
    let request = parse_request(request_json)?;
    let results = draw(&request).map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&results)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Parse free-form exclusion text into a sorted array of integers
#[wasm_bindgen]
pub fn parse_exclusion_text(text: &str) -> Result<JsValue, JsError> {
    let exclude: Vec<i64> = parse_exclusions(text).into_iter().collect();
    serde_wasm_bindgen::to_value(&exclude)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct RecordedDraw {
    results: Vec<i64>,
    history: DrawHistory,
}

/// Draw, then prepend the draw to a history
///
/// Returns `{results, history}`. The history argument and the returned
/// history use the same JSON layout, so the caller can store it as is.
#[wasm_bindgen]
pub fn record_draw(history_json: &str, request_json: &str) -> Result<JsValue, JsError> {
    let mut history = parse_history(history_json)?;
    let request = parse_request(request_json)?;
    let results = draw(&request).map_err(|e| JsError::new(&e.to_string()))?;

    let at = js_sys::Date::now() as i64;
    history.record(HistoryEntry::new(at, request, results.clone()));

    serde_wasm_bindgen::to_value(&RecordedDraw { results, history })
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Render a history as CSV
#[wasm_bindgen]
pub fn history_csv(history_json: &str) -> Result<String, JsError> {
    Ok(parse_history(history_json)?.to_csv())
}

/// Build the share message for a finished draw
#[wasm_bindgen]
pub fn share_message(request_json: &str, results: JsValue) -> Result<String, JsError> {
    let request = parse_request(request_json)?;
    let results: Vec<i64> = serde_wasm_bindgen::from_value(results)
        .map_err(|e| JsError::new(&format!("Invalid results: {}", e)))?;
    Ok(share_text(&request, &results))
}

/// Default request as JSON, for seeding a form
#[wasm_bindgen]
pub fn default_request() -> Result<String, JsError> {
    serde_json::to_string(&DrawRequest::default())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
