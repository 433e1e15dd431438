//! The meeting query: events + request → free windows.

use tracing::debug;

use crate::busy::merge_busy_blocks;
use crate::event::{Event, MeetingRequest};
use crate::scanner::scan_free_windows;
use crate::time_range::TimeRange;

/// Find every window in the day where the requested attendees can meet.
///
/// When the request has optional attendees, windows that suit everyone are
/// preferred. If there are none, the windows for the mandatory attendees
/// alone are returned. A request with only optional attendees is answered for
/// those attendees as if they were mandatory, with no fallback.
///
/// The result is sorted by start and pairwise non-overlapping. An empty result
/// means the request cannot be satisfied.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    let mandatory = request.attendees();
    let optional = request.optional_attendees();

    if optional.is_empty() {
        return windows_for(events, mandatory.iter().map(String::as_str), request.duration());
    }

    let everyone = mandatory.iter().chain(optional.iter()).map(String::as_str);
    let windows = windows_for(events, everyone, request.duration());
    if !windows.is_empty() || mandatory.is_empty() {
        return windows;
    }

    debug!(
        optional = optional.len(),
        "no window fits optional attendees, falling back to mandatory only"
    );
    windows_for(events, mandatory.iter().map(String::as_str), request.duration())
}

fn windows_for<'a, I>(events: &[Event], attendees: I, duration: u32) -> Vec<TimeRange>
where
    I: IntoIterator<Item = &'a str>,
{
    let busy = merge_busy_blocks(events, attendees);
    let windows = scan_free_windows(&busy, duration);
    debug!(
        events = events.len(),
        busy_blocks = busy.len(),
        busy_minutes = busy.busy_minutes(),
        duration,
        windows = windows.len(),
        "meeting query evaluated"
    );
    windows
}

/// Object-style entry point; equivalent to [`query`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MeetingQuery;

impl MeetingQuery {
    pub fn new() -> Self {
        Self
    }

    pub fn query(&self, events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
        query(events, request)
    }
}
