//! Slot and range value types.
//!
//! [`TimeRange`] is the single source of truth for a window of minutes. Its
//! `"start-end"` string form exists only for display and storage keys and is
//! always derived from the integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{self, TimeFormat, MINUTES_PER_DAY};
use crate::error::{Result, SchedulerError};

/// A `[start, end)` window in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: u32,
    pub end: u32,
}

impl TimeRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Build a range from two display labels in the given format.
    pub fn from_labels(start: &str, end: &str, format: TimeFormat) -> Result<Self> {
        Ok(Self {
            start: codec::parse_time(start, format)?,
            end: codec::parse_time(end, format)?,
        })
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether `self` (an existing booking) blocks `candidate`.
    ///
    /// Conflict when any of these hold:
    /// - the existing window swallows the candidate's start
    /// - the existing window swallows the candidate's end
    /// - the existing window covers the candidate
    /// - the candidate covers the existing window
    ///
    /// A candidate starting exactly where the existing window ends is free.
    pub fn overlaps(&self, candidate: &TimeRange) -> bool {
        let (start, end) = (candidate.start, candidate.end);
        (self.start <= start && self.end > start)
            || (self.start < end && self.end >= end)
            || (self.start <= start && self.end >= end)
            || (self.start >= start && self.end <= end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Parses the stored `"start-end"` form. Both ends must be minutes inside the
/// day with `start < end`; anything else is `MalformedRange`.
impl FromStr for TimeRange {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || SchedulerError::MalformedRange(s.to_string());
        let mut parts = s.split('-');
        let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let start: u32 = start.trim().parse().map_err(|_| malformed())?;
        let end: u32 = end.trim().parse().map_err(|_| malformed())?;
        if start >= end || end > MINUTES_PER_DAY {
            return Err(malformed());
        }
        Ok(Self { start, end })
    }
}

/// A bookable (or candidate) slot with display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start_minutes: u32,
    pub end_minutes: u32,
    pub start_label: String,
    pub end_label: String,
}

impl Slot {
    pub fn new(range: TimeRange, format: TimeFormat) -> Self {
        Self {
            start_minutes: range.start,
            end_minutes: range.end,
            start_label: codec::format_minutes(range.start, format),
            end_label: codec::format_minutes(range.end, format),
        }
    }

    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start_minutes, self.end_minutes)
    }

    /// Composite `"start-end"` lookup key.
    pub fn time_value(&self) -> String {
        self.range().to_string()
    }
}
