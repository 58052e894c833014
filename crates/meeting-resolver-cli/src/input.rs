//! JSON input document: the day's events plus the meeting request.
//!
//! Event times may be given as integer minutes-of-day or as `"HH:MM"` clock
//! strings, with `"24:00"` meaning end of day.

use anyhow::{bail, Context, Result};
use chrono::{NaiveTime, Timelike};
use meeting_resolver::{Event, MeetingRequest, TimeRange, END_OF_DAY};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub events: Vec<EventInput>,
    pub request: MeetingRequest,
}

#[derive(Debug, Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub title: String,
    pub start: ClockTime,
    pub end: ClockTime,
    #[serde(default)]
    pub attendees: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ClockTime {
    Minutes(u32),
    Clock(String),
}

impl ClockTime {
    pub fn to_minutes(&self) -> Result<u32> {
        match self {
            ClockTime::Minutes(m) => Ok(*m),
            ClockTime::Clock(s) => parse_clock(s),
        }
    }
}

/// Parse `"HH:MM"` into minutes from midnight.
pub fn parse_clock(s: &str) -> Result<u32> {
    let s = s.trim();
    if s == "24:00" {
        return Ok(END_OF_DAY);
    }
    let time = NaiveTime::parse_from_str(s, "%H:%M")
        .with_context(|| format!("Invalid clock time '{}', expected HH:MM", s))?;
    Ok(time.hour() * 60 + time.minute())
}

impl EventInput {
    pub fn into_event(self) -> Result<Event> {
        let start = self.start.to_minutes()?;
        let end = self.end.to_minutes()?;
        let when = TimeRange::from_start_end(start, end, false)
            .with_context(|| format!("Invalid time range for event '{}'", self.title))?;
        Ok(Event::new(self.title, when, self.attendees))
    }
}

impl Document {
    pub fn parse(json: &str) -> Result<Self> {
        let doc: Document = serde_json::from_str(json).context("Failed to parse input JSON")?;
        if doc.request.duration > END_OF_DAY {
            tracing::warn!(
                duration = doc.request.duration,
                "requested duration exceeds the day; no slot can fit"
            );
        }
        Ok(doc)
    }

    pub fn into_parts(self) -> Result<(Vec<Event>, MeetingRequest)> {
        let events = self
            .events
            .into_iter()
            .map(EventInput::into_event)
            .collect::<Result<Vec<_>>>()?;
        Ok((events, self.request))
    }
}

/// Reject a document whose request is unusable before doing any work.
pub fn validate_request(request: &MeetingRequest) -> Result<()> {
    let mut names = request.required.iter().chain(&request.optional);
    if let Some(name) = names.find(|n| n.trim().is_empty()) {
        bail!("Attendee names must not be blank (got {:?})", name);
    }
    Ok(())
}
