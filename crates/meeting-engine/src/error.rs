//! Error types for meeting-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Interval bounds violate `0 <= start < end <= DAY_SLOTS`.
    #[error("Invalid time range: [{start}, {end})")]
    InvalidRange { start: u32, end: u32 },

    #[error("Invalid meeting duration: {0} minutes")]
    InvalidDuration(u32),

    #[error("Invalid clock time '{0}': expected HH:MM between 00:00 and 24:00")]
    InvalidClock(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
