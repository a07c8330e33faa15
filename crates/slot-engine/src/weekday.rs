//! Fixed weekday table: `1 = Monday` through `7 = Sunday`.

use chrono::{Datelike, NaiveDate};

use crate::error::{Result, SchedulerError};

/// Full weekday names indexed by `day_id - 1`.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Look up the id of a weekday name.
///
/// Matching is case-insensitive and accepts the three-letter abbreviation.
pub fn day_id(name: &str) -> Result<u8> {
    let needle = name.trim();
    WEEKDAYS
        .iter()
        .position(|day| day.eq_ignore_ascii_case(needle) || day[..3].eq_ignore_ascii_case(needle))
        .map(|idx| idx as u8 + 1)
        .ok_or_else(|| SchedulerError::UnknownWeekday(name.to_string()))
}

/// Look up the name of a weekday id, optionally abbreviated to three letters.
pub fn day_name(id: u8, abbreviated: bool) -> Result<&'static str> {
    let name = match id {
        1..=7 => WEEKDAYS[id as usize - 1],
        other => return Err(SchedulerError::UnknownDayId(other)),
    };
    Ok(if abbreviated { &name[..3] } else { name })
}

/// Weekday id of a calendar date.
pub fn day_id_for_date(date: NaiveDate) -> u8 {
    date.weekday().number_from_monday() as u8
}
