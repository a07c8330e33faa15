//! Read-only store interfaces the scheduler depends on.
//!
//! The surrounding application implements these against its persistence
//! layer. Every method is a plain read; the engine never writes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::codec::TimeFormat;
use crate::slot::TimeRange;

pub type BusinessId = u64;
pub type BookingId = u64;

/// Interval used when neither the caller nor the business supplies one.
pub const DEFAULT_INTERVAL_MINUTES: u32 = 15;

/// Opening hours for one business on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHourWindow {
    pub enabled: bool,
    pub from: u32,
    pub to: u32,
}

/// Per-business display and interval preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessTimeSettings {
    #[serde(default)]
    pub time_format: TimeFormat,
    #[serde(default = "default_interval")]
    pub default_interval_minutes: u32,
}

fn default_interval() -> u32 {
    DEFAULT_INTERVAL_MINUTES
}

impl Default for BusinessTimeSettings {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::default(),
            default_interval_minutes: DEFAULT_INTERVAL_MINUTES,
        }
    }
}

/// An appointment or break as the store holds it.
///
/// `time` is the raw `"start-end"` minute range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBooking {
    pub id: BookingId,
    pub time: String,
}

impl StoredBooking {
    pub fn new(id: BookingId, range: TimeRange) -> Self {
        Self {
            id,
            time: range.to_string(),
        }
    }
}

/// Reads the per-weekday working-hours store and business time settings.
pub trait WorkingHoursProvider: Send + Sync {
    /// Working-hour record for `day_id` (`1..=7`), if the business has one.
    fn working_hours(&self, business_id: BusinessId, day_id: u8) -> Option<WorkingHourWindow>;

    /// Display and interval preferences for the business.
    fn time_settings(&self, _business_id: BusinessId) -> BusinessTimeSettings {
        BusinessTimeSettings::default()
    }
}

/// Reads the appointments store for one business and date.
pub trait AppointmentProvider: Send + Sync {
    fn appointments_for_date(&self, business_id: BusinessId, date: NaiveDate)
        -> Vec<StoredBooking>;
}

/// Reads the breaks store for one business and date.
pub trait BreakProvider: Send + Sync {
    fn breaks_for_date(&self, business_id: BusinessId, date: NaiveDate) -> Vec<StoredBooking>;
}
