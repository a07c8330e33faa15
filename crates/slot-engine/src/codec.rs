//! Conversion between minute offsets and display labels.
//!
//! Minutes since midnight are the canonical representation everywhere in the
//! engine. Labels are produced only at the edges, in either 24-hour (`HH:mm`)
//! or 12-hour (`h:mm AM`) form depending on the business preference.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// First minute of the afternoon (12:00 noon).
pub const NOON: u32 = 720;

/// Display preference for rendering times.
///
/// Serialised as the bare integer `12` or `24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TimeFormat {
    /// `h:mm AM` / `h:mm PM`
    TwelveHour,
    /// `HH:mm`
    #[default]
    TwentyFourHour,
}

impl TryFrom<u8> for TimeFormat {
    type Error = SchedulerError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            12 => Ok(TimeFormat::TwelveHour),
            24 => Ok(TimeFormat::TwentyFourHour),
            other => Err(SchedulerError::InvalidTimeFormat(other)),
        }
    }
}

impl From<TimeFormat> for u8 {
    fn from(format: TimeFormat) -> u8 {
        match format {
            TimeFormat::TwelveHour => 12,
            TimeFormat::TwentyFourHour => 24,
        }
    }
}

/// One entry of the time selector list produced by [`array_time`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOption {
    pub label_24: String,
    pub label_12: String,
    pub minutes: u32,
}

/// Hour component for display.
///
/// In 12-hour mode hours past noon wrap down by 12, so `13:00` shows as `1`.
/// Noon itself stays `12` and the midnight hour stays `0`.
pub fn minutes_to_hours(minutes: u32, format: TimeFormat) -> u32 {
    if minutes == 0 {
        return 0;
    }
    let hours = minutes / 60;
    match format {
        TimeFormat::TwelveHour if hours > 12 => hours - 12,
        _ => hours,
    }
}

/// Meridiem suffix: empty in 24-hour mode, `AM` before 720, `PM` from 720.
pub fn am_or_pm(minutes: u32, format: TimeFormat) -> &'static str {
    match format {
        TimeFormat::TwentyFourHour => "",
        TimeFormat::TwelveHour if minutes < NOON => "AM",
        TimeFormat::TwelveHour => "PM",
    }
}

/// Render a minute offset as a display label.
pub fn format_minutes(minutes: u32, format: TimeFormat) -> String {
    let hours = minutes_to_hours(minutes, format);
    let mins = minutes % 60;
    match format {
        TimeFormat::TwentyFourHour => format!("{:02}:{:02}", hours, mins),
        TimeFormat::TwelveHour => {
            format!("{}:{:02} {}", hours, mins, am_or_pm(minutes, format))
        }
    }
}

/// Render a stored raw minute value.
///
/// Blank input means "unset" and yields `Ok(None)` rather than an error.
pub fn format_raw(raw: &str, format: TimeFormat) -> Result<Option<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let minutes: u32 = trimmed
        .parse()
        .map_err(|_| SchedulerError::InvalidMinutes(raw.to_string()))?;
    Ok(Some(format_minutes(minutes, format)))
}

/// Parse a display label back to a minute offset.
///
/// Accepts everything [`format_minutes`] produces, plus unpadded 24-hour hours
/// and the conventional `12:xx AM` spelling of the midnight hour.
pub fn parse_time(label: &str, format: TimeFormat) -> Result<u32> {
    let invalid = |message: &str| SchedulerError::InvalidTimeLabel {
        label: label.to_string(),
        message: message.to_string(),
    };

    let trimmed = label.trim();
    let (clock, meridiem) = match format {
        TimeFormat::TwentyFourHour => (trimmed, None),
        TimeFormat::TwelveHour => {
            let (clock, suffix) = trimmed
                .rsplit_once(' ')
                .ok_or_else(|| invalid("missing AM/PM suffix"))?;
            (clock.trim(), Some(suffix.to_ascii_uppercase()))
        }
    };

    let (h, m) = clock
        .split_once(':')
        .ok_or_else(|| invalid("expected hours:minutes"))?;
    let hours: u32 = h.parse().map_err(|_| invalid("hours are not a number"))?;
    let mins: u32 = m.parse().map_err(|_| invalid("minutes are not a number"))?;
    if m.len() != 2 || mins >= 60 {
        return Err(invalid("minutes must be two digits below 60"));
    }

    let hours = match meridiem.as_deref() {
        None if hours < 24 => hours,
        None => return Err(invalid("hour out of range")),
        Some("AM") if hours == 12 => 0,
        Some("AM") if hours < 12 => hours,
        Some("PM") if hours < 12 => hours + 12,
        Some("PM") if hours == 12 => 12,
        Some("AM") | Some("PM") => return Err(invalid("hour out of range")),
        Some(_) => return Err(invalid("suffix must be AM or PM")),
    };

    Ok(hours * 60 + mins)
}

/// Reject slot lengths that cannot tile a day: zero, or longer than the day.
pub(crate) fn check_interval(interval: u32) -> Result<u32> {
    if interval == 0 || interval > MINUTES_PER_DAY {
        return Err(SchedulerError::InvalidInterval(interval));
    }
    Ok(interval)
}

/// Every selector boundary from minute 0 up to (not including) 1439.
pub fn array_time(interval: u32) -> Result<Vec<TimeOption>> {
    check_interval(interval)?;
    Ok((0..MINUTES_PER_DAY - 1)
        .step_by(interval as usize)
        .map(|minutes| TimeOption {
            label_24: format_minutes(minutes, TimeFormat::TwentyFourHour),
            label_12: format_minutes(minutes, TimeFormat::TwelveHour),
            minutes,
        })
        .collect())
}
