//! Bookable slot resolution: working hours minus appointments and breaks.
//!
//! The scheduler holds only borrowed providers and no mutable state, so one
//! instance can serve any number of businesses from any number of threads.
//! Its answers are advisory: a slot reported free can be taken before the
//! caller writes, so booking code must re-check inside its own transaction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::availability::{self, DayAvailability};
use crate::conflict::ConflictDetector;
use crate::error::Result;
use crate::provider::{AppointmentProvider, BreakProvider, BusinessId, WorkingHoursProvider};
use crate::slot::Slot;

/// Whether a date is closed, fully booked or has free slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DayStatus {
    /// No enabled working hours (or a window too short for one slot).
    Closed,
    /// Working hours exist but every candidate slot is blocked.
    FullyBooked,
    /// At least one slot is bookable.
    Open { bookable: usize },
}

/// A bookable slot paired with its date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedSlot {
    pub date: NaiveDate,
    pub slot: Slot,
}

/// Resolves bookable slots from working hours, appointments and breaks.
pub struct SlotScheduler<'a> {
    working_hours: &'a dyn WorkingHoursProvider,
    appointments: &'a dyn AppointmentProvider,
    breaks: &'a dyn BreakProvider,
}

impl<'a> SlotScheduler<'a> {
    pub fn new(
        working_hours: &'a dyn WorkingHoursProvider,
        appointments: &'a dyn AppointmentProvider,
        breaks: &'a dyn BreakProvider,
    ) -> Self {
        Self {
            working_hours,
            appointments,
            breaks,
        }
    }

    /// Build a scheduler over a single store that serves all three reads.
    pub fn from_store<S>(store: &'a S) -> Self
    where
        S: WorkingHoursProvider + AppointmentProvider + BreakProvider,
    {
        Self::new(store, store, store)
    }

    /// Bookable slots for `date`, in ascending start order.
    ///
    /// A closed day and a fully booked day both return an empty list; use
    /// [`SlotScheduler::day_status`] to tell them apart.
    pub fn resolve_bookable_slots(
        &self,
        business_id: BusinessId,
        date: NaiveDate,
        interval: Option<u32>,
    ) -> Result<Vec<Slot>> {
        Ok(self.resolve_day(business_id, date, interval)?.0.times)
    }

    /// Closed / fully booked / open for `date`.
    pub fn day_status(
        &self,
        business_id: BusinessId,
        date: NaiveDate,
        interval: Option<u32>,
    ) -> Result<DayStatus> {
        let (day, candidates) = self.resolve_day(business_id, date, interval)?;
        Ok(match (candidates, day.times.len()) {
            (0, _) => DayStatus::Closed,
            (_, 0) => DayStatus::FullyBooked,
            (_, bookable) => DayStatus::Open { bookable },
        })
    }

    /// Bookable slots for every date in `from..=to`.
    pub fn resolve_range(
        &self,
        business_id: BusinessId,
        from: NaiveDate,
        to: NaiveDate,
        interval: Option<u32>,
    ) -> Result<Vec<DayAvailability>> {
        from.iter_days()
            .take_while(|date| *date <= to)
            .map(|date| {
                self.resolve_day(business_id, date, interval)
                    .map(|(day, _)| day)
            })
            .collect()
    }

    /// Earliest bookable slot within `days` days starting at `from`.
    pub fn first_bookable_slot(
        &self,
        business_id: BusinessId,
        from: NaiveDate,
        days: u32,
        interval: Option<u32>,
    ) -> Result<Option<DatedSlot>> {
        for date in from.iter_days().take(days as usize) {
            let (day, _) = self.resolve_day(business_id, date, interval)?;
            if let Some(slot) = day.times.into_iter().next() {
                return Ok(Some(DatedSlot { date, slot }));
            }
        }
        Ok(None)
    }

    /// Filtered day plus the number of candidates before filtering.
    fn resolve_day(
        &self,
        business_id: BusinessId,
        date: NaiveDate,
        interval: Option<u32>,
    ) -> Result<(DayAvailability, usize)> {
        let mut day = availability::resolve_day(self.working_hours, business_id, date, interval)?;
        let candidates = day.times.len();
        if candidates == 0 {
            return Ok((day, 0));
        }

        let detector = ConflictDetector::load(self.appointments, self.breaks, business_id, date);
        if !detector.is_empty() {
            day.times.retain(|slot| !detector.conflicts(&slot.range()));
        }

        debug!(
            business_id,
            %date,
            candidates,
            bookable = day.times.len(),
            "resolved bookable slots"
        );
        Ok((day, candidates))
    }
}
