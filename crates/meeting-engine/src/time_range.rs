//! Half-open minute-of-day intervals.
//!
//! A [`TimeRange`] covers `[start, end)` where both bounds are minutes from
//! midnight and `0 <= start < end <= DAY_SLOTS`. Ranges are plain values: every
//! event, busy block and free window gets a fresh one and none is ever mutated.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Number of minutes in a day; the exclusive upper bound of every range.
pub const DAY_SLOTS: u32 = 24 * 60;

/// A half-open interval `[start, end)` over minute-of-day.
///
/// Ordering is by `start`, then by `end`, which is the field order, so the
/// derived `Ord` is the one used for sorting and searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

/// Unvalidated wire form; converted through [`TimeRange::from_start_end`].
#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = EngineError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::from_start_end(raw.start, raw.end)
    }
}

impl TimeRange {
    pub const START_OF_DAY: u32 = 0;
    /// Last minute of the day (inclusive form).
    pub const END_OF_DAY: u32 = DAY_SLOTS - 1;
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: 0,
        end: DAY_SLOTS,
    };

    /// Build `[start, start + duration)`.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidRange` if `duration` is zero or the range
    /// would run past the end of the day.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        let end = start.saturating_add(duration);
        if duration == 0 || end > DAY_SLOTS {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build `[start, end)`.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidRange` unless `start < end <= DAY_SLOTS`.
    pub fn from_start_end(start: u32, end: u32) -> Result<Self> {
        if end <= start || end > DAY_SLOTS {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range whose `end` minute is itself included, i.e. `[start, end + 1)`.
    ///
    /// `from_start_end_inclusive(0, TimeRange::END_OF_DAY)` is the whole day.
    pub fn from_start_end_inclusive(start: u32, end: u32) -> Result<Self> {
        Self::from_start_end(start, end.saturating_add(1))
    }

    /// Caller guarantees `start < end <= DAY_SLOTS`.
    pub(crate) fn new_unchecked(start: u32, end: u32) -> Self {
        debug_assert!(start < end && end <= DAY_SLOTS, "bad range [{start}, {end})");
        Self { start, end }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// True iff the two half-open intervals share at least one minute.
    /// Ranges that merely touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True iff `start <= instant < end`.
    pub fn contains(&self, instant: u32) -> bool {
        self.start <= instant && instant < self.end
    }

    /// True iff `other` lies entirely inside this range.
    pub fn contains_range(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", Clock(self.start), Clock(self.end))
    }
}

/// `HH:MM` rendering of a minute-of-day; 1440 prints as `24:00`.
struct Clock(u32);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Minutes since midnight for a wall-clock time. Seconds are truncated.
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Parse an `HH:MM` clock string into a minute-of-day.
///
/// `24:00` is accepted as the end-of-day bound and maps to [`DAY_SLOTS`].
///
/// # Errors
/// Returns `EngineError::InvalidClock` if the string is not a valid time.
pub fn parse_clock(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    if trimmed == "24:00" {
        return Ok(DAY_SLOTS);
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map(minute_of_day)
        .map_err(|_| EngineError::InvalidClock(s.to_string()))
}
