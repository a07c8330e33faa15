//! Candidate slot generation from working hours.
//!
//! Resolves a calendar date to its weekday, looks up the business's window for
//! that weekday and tiles the window with fixed-length slots. Conflict
//! filtering happens later in [`crate::conflict`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::{self, TimeFormat, MINUTES_PER_DAY};
use crate::error::{Result, SchedulerError};
use crate::provider::{BusinessId, WorkingHourWindow, WorkingHoursProvider};
use crate::slot::{Slot, TimeRange};
use crate::weekday;

/// Slots for one date together with the resolved weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub times: Vec<Slot>,
    pub day_id: u8,
    pub date: NaiveDate,
}

/// Fetch the working-hour window for a weekday.
///
/// Returns `None` when the business has no record for the day or the day is
/// disabled. This is the only gate that closes a day.
///
/// # Errors
/// `UnknownDayId` for ids outside `1..=7`, `InvalidWindow` when an enabled
/// window's bounds fall outside the day.
pub fn timeslot_by_day(
    provider: &dyn WorkingHoursProvider,
    business_id: BusinessId,
    day_id: u8,
) -> Result<Option<WorkingHourWindow>> {
    weekday::day_name(day_id, false)?;

    let window = match provider.working_hours(business_id, day_id) {
        Some(w) if w.enabled => w,
        _ => return Ok(None),
    };

    if window.from >= MINUTES_PER_DAY || window.to >= MINUTES_PER_DAY {
        return Err(SchedulerError::InvalidWindow {
            day_id,
            from: window.from,
            to: window.to,
        });
    }

    Ok(Some(window))
}

/// Tile `[start, end)` with contiguous slots of `interval` minutes.
///
/// A slot is emitted only while it fits entirely inside the window, so a 9:00
/// to 17:00 window at 60 minutes yields eight slots. `start >= end` (including
/// the all-zero window) yields no slots.
///
/// # Errors
/// `InvalidInterval` when `interval` is zero or longer than a day.
pub fn time_slots(interval: u32, start: u32, end: u32, format: TimeFormat) -> Result<Vec<Slot>> {
    let interval = codec::check_interval(interval)?;
    if start >= end {
        return Ok(Vec::new());
    }

    let mut slots = Vec::with_capacity(((end - start) / interval) as usize);
    let mut minutes = start;
    while let Some(slot_end) = minutes.checked_add(interval).filter(|e| *e <= end) {
        slots.push(Slot::new(TimeRange::new(minutes, slot_end), format));
        minutes = slot_end;
    }
    Ok(slots)
}

/// Candidate slots for a date before conflict filtering.
///
/// `interval` falls back to the business's default when `None`.
pub fn resolve_day(
    provider: &dyn WorkingHoursProvider,
    business_id: BusinessId,
    date: NaiveDate,
    interval: Option<u32>,
) -> Result<DayAvailability> {
    let settings = provider.time_settings(business_id);
    let interval = codec::check_interval(interval.unwrap_or(settings.default_interval_minutes))?;
    let day_id = weekday::day_id_for_date(date);

    let times = match timeslot_by_day(provider, business_id, day_id)? {
        Some(window) => time_slots(interval, window.from, window.to, settings.time_format)?,
        None => {
            debug!(business_id, %date, day_id, "no working hours for day");
            Vec::new()
        }
    };

    Ok(DayAvailability {
        times,
        day_id,
        date,
    })
}
