//! In-memory store implementing all three provider traits.
//!
//! Loaded from JSON by the CLI and used as the fixture store in tests:
//!
//! ```json
//! {
//!   "businesses": [{
//!     "id": 1,
//!     "settings": { "time_format": 12, "default_interval_minutes": 30 },
//!     "working_hours": { "1": { "enabled": true, "from": 540, "to": 1020 } },
//!     "appointments": [{ "id": 7, "date": "2026-03-16", "time": "600-660" }],
//!     "breaks": []
//!   }]
//! }
//! ```

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::provider::{
    AppointmentProvider, BookingId, BreakProvider, BusinessId, BusinessTimeSettings, StoredBooking,
    WorkingHourWindow, WorkingHoursProvider,
};
use crate::slot::TimeRange;

/// A stored booking tagged with its date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedBooking {
    pub id: BookingId,
    pub date: NaiveDate,
    pub time: String,
}

/// Everything the engine reads about one business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub id: BusinessId,
    #[serde(default)]
    pub settings: BusinessTimeSettings,
    /// Keyed by weekday id `1..=7`.
    #[serde(default)]
    pub working_hours: HashMap<u8, WorkingHourWindow>,
    #[serde(default)]
    pub appointments: Vec<DatedBooking>,
    #[serde(default)]
    pub breaks: Vec<DatedBooking>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreDocument {
    businesses: Vec<BusinessRecord>,
}

/// Businesses keyed by id, serving every provider read from memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    businesses: HashMap<BusinessId, BusinessRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a store document. Later records with a repeated id replace
    /// earlier ones.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: StoreDocument = serde_json::from_str(json)?;
        let mut store = Self::new();
        for record in doc.businesses {
            store.insert(record);
        }
        Ok(store)
    }

    pub fn insert(&mut self, record: BusinessRecord) {
        self.businesses.insert(record.id, record);
    }

    fn business_mut(&mut self, business_id: BusinessId) -> &mut BusinessRecord {
        self.businesses
            .entry(business_id)
            .or_insert_with(|| BusinessRecord {
                id: business_id,
                ..Default::default()
            })
    }

    pub fn set_settings(
        &mut self,
        business_id: BusinessId,
        settings: BusinessTimeSettings,
    ) -> &mut Self {
        self.business_mut(business_id).settings = settings;
        self
    }

    pub fn set_working_hours(
        &mut self,
        business_id: BusinessId,
        day_id: u8,
        window: WorkingHourWindow,
    ) -> &mut Self {
        self.business_mut(business_id)
            .working_hours
            .insert(day_id, window);
        self
    }

    pub fn add_appointment(
        &mut self,
        business_id: BusinessId,
        id: BookingId,
        date: NaiveDate,
        range: TimeRange,
    ) -> &mut Self {
        self.business_mut(business_id).appointments.push(DatedBooking {
            id,
            date,
            time: range.to_string(),
        });
        self
    }

    pub fn add_break(
        &mut self,
        business_id: BusinessId,
        id: BookingId,
        date: NaiveDate,
        range: TimeRange,
    ) -> &mut Self {
        self.business_mut(business_id).breaks.push(DatedBooking {
            id,
            date,
            time: range.to_string(),
        });
        self
    }

    /// Insert a raw stored record as-is, without validating the range.
    pub fn add_raw_appointment(
        &mut self,
        business_id: BusinessId,
        id: BookingId,
        date: NaiveDate,
        time: &str,
    ) -> &mut Self {
        self.business_mut(business_id).appointments.push(DatedBooking {
            id,
            date,
            time: time.to_string(),
        });
        self
    }
}

fn on_date(records: &[DatedBooking], date: NaiveDate) -> Vec<StoredBooking> {
    records
        .iter()
        .filter(|r| r.date == date)
        .map(|r| StoredBooking {
            id: r.id,
            time: r.time.clone(),
        })
        .collect()
}

impl WorkingHoursProvider for InMemoryStore {
    fn working_hours(&self, business_id: BusinessId, day_id: u8) -> Option<WorkingHourWindow> {
        self.businesses
            .get(&business_id)?
            .working_hours
            .get(&day_id)
            .copied()
    }

    fn time_settings(&self, business_id: BusinessId) -> BusinessTimeSettings {
        self.businesses
            .get(&business_id)
            .map(|b| b.settings)
            .unwrap_or_default()
    }
}

impl AppointmentProvider for InMemoryStore {
    fn appointments_for_date(
        &self,
        business_id: BusinessId,
        date: NaiveDate,
    ) -> Vec<StoredBooking> {
        self.businesses
            .get(&business_id)
            .map(|b| on_date(&b.appointments, date))
            .unwrap_or_default()
    }
}

impl BreakProvider for InMemoryStore {
    fn breaks_for_date(&self, business_id: BusinessId, date: NaiveDate) -> Vec<StoredBooking> {
        self.businesses
            .get(&business_id)
            .map(|b| on_date(&b.breaks, date))
            .unwrap_or_default()
    }
}
