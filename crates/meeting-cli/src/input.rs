//! JSON input document for `meetq`.
//!
//! ```json
//! {
//!   "events": [
//!     { "title": "Standup", "start": "09:00", "end": "09:15", "attendees": ["alice", "bob"] },
//!     { "start": 600, "end": 660, "attendees": ["carol"] }
//!   ],
//!   "request": { "duration": 30, "attendees": ["alice"], "optional_attendees": ["carol"] }
//! }
//! ```
//!
//! Event bounds may be minutes since midnight or `HH:MM` strings (`24:00`
//! allowed as an end).

use anyhow::{Context, Result};
use meeting_engine::{parse_clock, Event, MeetingRequest, TimeRange};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct QueryInput {
    #[serde(default)]
    pub events: Vec<EventInput>,
    pub request: MeetingRequest,
}

#[derive(Debug, Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub title: Option<String>,
    pub start: ClockValue,
    pub end: ClockValue,
    #[serde(default)]
    pub attendees: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClockValue {
    Minutes(u32),
    Clock(String),
}

impl ClockValue {
    fn minutes(&self) -> Result<u32> {
        match self {
            ClockValue::Minutes(m) => Ok(*m),
            ClockValue::Clock(s) => Ok(parse_clock(s)?),
        }
    }
}

impl EventInput {
    fn into_event(self, index: usize) -> Result<Event> {
        let context = || format!("Event #{} has an invalid time range", index + 1);
        let start = self.start.minutes().with_context(context)?;
        let end = self.end.minutes().with_context(context)?;
        let when = TimeRange::from_start_end(start, end).with_context(context)?;
        let event = Event::new(when, self.attendees);
        Ok(match self.title {
            Some(title) => event.with_title(title),
            None => event,
        })
    }
}

impl QueryInput {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse query input JSON")
    }

    /// Validate every event and hand back the engine's types.
    pub fn into_parts(self) -> Result<(Vec<Event>, MeetingRequest)> {
        let events = self
            .events
            .into_iter()
            .enumerate()
            .map(|(i, ev)| ev.into_event(i))
            .collect::<Result<Vec<_>>>()?;
        Ok((events, self.request))
    }
}
