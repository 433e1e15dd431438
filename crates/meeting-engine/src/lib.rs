//! # meeting-engine
//!
//! Find every window in a single day where a group of attendees can meet.
//!
//! Given calendar events and a meeting request, the engine keeps only the
//! events that involve a requested attendee, merges their time ranges into
//! disjoint busy blocks, and reports the gaps long enough for the meeting.
//! Everything is a pure function of its inputs: no I/O, no shared state.
//!
//! ```rust
//! use meeting_engine::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(TimeRange::from_start_end(600, 660).unwrap(), ["A"])];
//! let request = MeetingRequest::new(["A"], 30).unwrap();
//!
//! let windows = query(&events, &request);
//! assert_eq!(windows[0], TimeRange::from_start_end(0, 600).unwrap());
//! assert_eq!(windows[1], TimeRange::from_start_end(660, 1440).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — Half-open minute-of-day intervals
//! - [`event`] — Events and meeting requests
//! - [`busy`] — Merge relevant events into disjoint busy blocks
//! - [`scanner`] — Free windows between busy blocks
//! - [`mod@query`] — The end-to-end meeting query
//! - [`error`] — Error types

pub mod busy;
pub mod error;
pub mod event;
pub mod query;
pub mod scanner;
pub mod time_range;

pub use busy::{merge_busy_blocks, BusySet};
pub use error::EngineError;
pub use event::{Event, MeetingRequest};
pub use query::{query, MeetingQuery};
pub use scanner::scan_free_windows;
pub use time_range::{parse_clock, TimeRange, DAY_SLOTS};
