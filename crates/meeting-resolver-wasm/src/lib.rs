//! WASM bindings for meeting-resolver.
//!
//! Exposes meeting slot resolution and optional-attendee availability to
//! JavaScript via `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-resolver-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meeting-resolver-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_resolver_wasm.wasm
//! ```

use std::collections::BTreeSet;

use meeting_resolver::{Event, MeetingRequest, TimeRange};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for events passed from JavaScript. Times are minutes-of-day.
#[derive(Deserialize)]
struct EventInput {
    #[serde(default)]
    title: String,
    start: u32,
    end: u32,
    #[serde(default)]
    attendees: Vec<String>,
}

#[derive(Serialize)]
struct SlotDto {
    start: u32,
    end: u32,
    duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    available: Option<Vec<String>>,
}

impl SlotDto {
    fn new(range: &TimeRange, available: Option<&BTreeSet<String>>) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
            duration_minutes: range.duration(),
            available: available.map(|a| a.iter().cloned().collect()),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers: parse JSON inputs into resolver types
// ---------------------------------------------------------------------------

fn parse_events_json(json: &str) -> Result<Vec<Event>, String> {
    let inputs: Vec<EventInput> =
        serde_json::from_str(json).map_err(|e| format!("Invalid events JSON: {}", e))?;

    inputs
        .into_iter()
        .map(|input| {
            let when = TimeRange::from_start_end(input.start, input.end, false)
                .map_err(|e| format!("Event '{}': {}", input.title, e))?;
            Ok(Event::new(input.title, when, input.attendees))
        })
        .collect()
}

fn parse_request_json(json: &str) -> Result<MeetingRequest, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid request JSON: {}", e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn find_slots(events_json: &str, request_json: &str, scored: bool) -> Result<String, String> {
    let events = parse_events_json(events_json)?;
    let request = parse_request_json(request_json)?;

    let dtos: Vec<SlotDto> = meeting_resolver::query_scored(&events, &request)
        .iter()
        .map(|slot| SlotDto::new(&slot.range, scored.then_some(&slot.available)))
        .collect();
    to_json(&dtos)
}

fn partition(events_json: &str, optional_json: &str) -> Result<String, String> {
    let events = parse_events_json(events_json)?;
    let optional: BTreeSet<String> = serde_json::from_str(optional_json)
        .map_err(|e| format!("Invalid attendees JSON: {}", e))?;

    let dtos: Vec<SlotDto> = meeting_resolver::partition_optional(&events, &optional)
        .iter()
        .map(|segment| SlotDto::new(&segment.range, Some(&segment.available)))
        .collect();
    to_json(&dtos)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find the time ranges in which a meeting can be held.
///
/// `events_json` is a JSON array of `{title, start, end, attendees}` objects with
/// minutes-of-day times. `request_json` is `{duration, required, optional}`.
/// Returns a JSON array of `{start, end, duration_minutes}` objects.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    find_slots(events_json, request_json, false).map_err(|e| JsValue::from_str(&e))
}

/// Like `findMeetingTimes`, but each slot also lists the optional attendees
/// free for all of it under `available`.
#[wasm_bindgen(js_name = "findScoredMeetingTimes")]
pub fn find_scored_meeting_times(
    events_json: &str,
    request_json: &str,
) -> Result<String, JsValue> {
    find_slots(events_json, request_json, true).map_err(|e| JsValue::from_str(&e))
}

/// Split the day into segments tagged with the free optional attendees.
///
/// `optional_json` is a JSON array of attendee names.
#[wasm_bindgen(js_name = "partitionAvailability")]
pub fn partition_availability(events_json: &str, optional_json: &str) -> Result<String, JsValue> {
    partition(events_json, optional_json).map_err(|e| JsValue::from_str(&e))
}
