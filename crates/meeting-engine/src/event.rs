//! Caller-supplied inputs: calendar events and meeting requests.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::time_range::TimeRange;

/// A calendar event occupying `when` for every listed attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Display name; never consulted by the scheduler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub when: TimeRange,
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: None,
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// True iff at least one of this event's attendees is in `required`.
    pub(crate) fn involves_any(&self, required: &HashSet<&str>) -> bool {
        self.attendees.iter().any(|a| required.contains(a.as_str()))
    }
}

/// A request for a meeting of `duration` minutes.
///
/// `attendees` must all be free for a window to qualify. `optional_attendees`
/// are honored only when doing so still leaves at least one window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMeetingRequest")]
pub struct MeetingRequest {
    duration: u32,
    attendees: BTreeSet<String>,
    optional_attendees: BTreeSet<String>,
}

#[derive(Deserialize)]
struct RawMeetingRequest {
    duration: u32,
    #[serde(default)]
    attendees: BTreeSet<String>,
    #[serde(default)]
    optional_attendees: BTreeSet<String>,
}

impl TryFrom<RawMeetingRequest> for MeetingRequest {
    type Error = EngineError;

    fn try_from(raw: RawMeetingRequest) -> Result<Self> {
        Ok(MeetingRequest::new(raw.attendees, raw.duration)?
            .with_optional_attendees(raw.optional_attendees))
    }
}

impl MeetingRequest {
    /// Create a request for the given mandatory attendees.
    ///
    /// A duration longer than the day is accepted; such a request simply has
    /// no satisfying window.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidDuration` if `duration` is zero.
    pub fn new<I, S>(attendees: I, duration: u32) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if duration == 0 {
            return Err(EngineError::InvalidDuration(duration));
        }
        Ok(Self {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
        })
    }

    pub fn with_optional_attendees<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees = optional.into_iter().map(Into::into).collect();
        self
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }
}
