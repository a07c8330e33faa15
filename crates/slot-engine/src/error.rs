//! Error types for slot-engine operations.

use thiserror::Error;

/// Errors raised by the scheduler.
///
/// Only configuration-level problems surface here. Missing working hours,
/// disabled days and fully booked days are all modelled as empty results.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// A weekday name that is not in the Monday..Sunday table.
    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    /// A weekday id outside `1..=7`.
    #[error("Unknown weekday id: {0}")]
    UnknownDayId(u8),

    /// A display format other than 12 or 24.
    #[error("Invalid time format: {0} (expected 12 or 24)")]
    InvalidTimeFormat(u8),

    /// A slot interval of zero minutes or longer than a day.
    #[error("Invalid slot interval: {0} minutes")]
    InvalidInterval(u32),

    /// A working-hour window whose bounds fall outside the day.
    #[error("Invalid working-hour window for day {day_id}: {from}-{to}")]
    InvalidWindow { day_id: u8, from: u32, to: u32 },

    /// A display label that cannot be parsed back to minutes.
    #[error("Invalid time label '{label}': {message}")]
    InvalidTimeLabel { label: String, message: String },

    /// A raw minute value that is not a number.
    #[error("Invalid minute value: {0}")]
    InvalidMinutes(String),

    /// A `"start-end"` range that does not split into two endpoints with
    /// `start < end <= 1440`.
    #[error("Malformed time range: {0}")]
    MalformedRange(String),

    /// The JSON store document could not be parsed.
    #[error("Store parse error: {0}")]
    StoreParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout slot-engine.
pub type Result<T> = std::result::Result<T, SchedulerError>;
