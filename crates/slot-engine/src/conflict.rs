//! Overlap checks against existing appointments and breaks.
//!
//! Appointments and breaks block a candidate identically. Stored ranges that
//! cannot be parsed are logged and skipped so one bad record does not hide the
//! rest of the day.

use chrono::NaiveDate;
use tracing::warn;

use crate::provider::{AppointmentProvider, BookingId, BreakProvider, BusinessId, StoredBooking};
use crate::slot::TimeRange;

/// A stored appointment or break with its range parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExistingBooking {
    pub id: BookingId,
    pub range: TimeRange,
}

/// Parse stored records, dropping the ones with malformed ranges.
fn parse_existing(
    business_id: BusinessId,
    date: NaiveDate,
    records: Vec<StoredBooking>,
) -> Vec<ExistingBooking> {
    records
        .into_iter()
        .filter_map(|record| match record.time.parse::<TimeRange>() {
            Ok(range) => Some(ExistingBooking {
                id: record.id,
                range,
            }),
            Err(e) => {
                warn!(
                    business_id,
                    %date,
                    booking_id = record.id,
                    error = %e,
                    "skipping stored booking"
                );
                None
            }
        })
        .collect()
}

/// Everything that blocks one business on one date, fetched once.
#[derive(Debug, Clone, Default)]
pub struct ConflictDetector {
    appointments: Vec<ExistingBooking>,
    breaks: Vec<ExistingBooking>,
}

impl ConflictDetector {
    /// Fetch appointments and breaks for `(business_id, date)`.
    ///
    /// A business or date with no records yields an empty detector that
    /// reports no conflicts.
    pub fn load(
        appointments: &dyn AppointmentProvider,
        breaks: &dyn BreakProvider,
        business_id: BusinessId,
        date: NaiveDate,
    ) -> Self {
        Self {
            appointments: parse_existing(
                business_id,
                date,
                appointments.appointments_for_date(business_id, date),
            ),
            breaks: parse_existing(business_id, date, breaks.breaks_for_date(business_id, date)),
        }
    }

    pub fn from_parts(appointments: Vec<ExistingBooking>, breaks: Vec<ExistingBooking>) -> Self {
        Self {
            appointments,
            breaks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty() && self.breaks.is_empty()
    }

    /// Whether any appointment or break blocks `range`.
    pub fn conflicts(&self, range: &TimeRange) -> bool {
        self.appointments
            .iter()
            .chain(&self.breaks)
            .any(|existing| existing.range.overlaps(range))
    }

    /// Ids of the breaks that block `range`, or `None` when no break does.
    pub fn conflicting_breaks(&self, range: &TimeRange) -> Option<Vec<BookingId>> {
        let ids: Vec<BookingId> = self
            .breaks
            .iter()
            .filter(|b| b.range.overlaps(range))
            .map(|b| b.id)
            .collect();
        if ids.is_empty() {
            None
        } else {
            Some(ids)
        }
    }
}

/// Whether `range` on `date` conflicts with an appointment or break.
pub fn check_time<P>(
    providers: &P,
    business_id: BusinessId,
    date: NaiveDate,
    range: &TimeRange,
) -> bool
where
    P: AppointmentProvider + BreakProvider,
{
    ConflictDetector::load(providers, providers, business_id, date).conflicts(range)
}

/// Ids of the breaks overlapping `range` on `date`, or `None`.
pub fn check_break_time<P>(
    providers: &P,
    business_id: BusinessId,
    date: NaiveDate,
    range: &TimeRange,
) -> Option<Vec<BookingId>>
where
    P: BreakProvider,
{
    let breaks = parse_existing(business_id, date, providers.breaks_for_date(business_id, date));
    ConflictDetector::from_parts(Vec::new(), breaks).conflicting_breaks(range)
}

/// Whether `range` is free for every resource in `resource_ids`.
///
/// Each resource is checked independently; one conflict makes the whole set
/// unavailable.
pub fn check_time_all<P>(
    providers: &P,
    resource_ids: &[BusinessId],
    date: NaiveDate,
    range: &TimeRange,
) -> bool
where
    P: AppointmentProvider + BreakProvider,
{
    resource_ids
        .iter()
        .all(|&id| !check_time(providers, id, date, range))
}
