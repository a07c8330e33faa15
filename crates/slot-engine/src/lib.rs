//! # slot-engine
//!
//! Bookable time-slot computation for appointment scheduling.
//!
//! Turns a business's weekly working hours into fixed-length candidate slots
//! for a date and removes the ones that overlap an existing appointment or
//! break. All arithmetic is on integer minute offsets from midnight in the
//! business's local time; display labels (12h or 24h) are derived at the edge.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slot_engine::{InMemoryStore, SlotScheduler, TimeRange, WorkingHourWindow};
//!
//! let monday = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
//! let mut store = InMemoryStore::new();
//! store
//!     .set_working_hours(1, 1, WorkingHourWindow { enabled: true, from: 540, to: 1020 })
//!     .add_appointment(1, 10, monday, TimeRange::new(600, 660));
//!
//! let scheduler = SlotScheduler::from_store(&store);
//! let slots = scheduler.resolve_bookable_slots(1, monday, Some(60)).unwrap();
//! assert_eq!(slots.len(), 7);
//! assert_eq!(slots[0].start_label, "09:00");
//! ```
//!
//! ## Modules
//!
//! - [`codec`] — minute offsets ↔ `HH:mm` / `h:mm AM` labels
//! - [`weekday`] — fixed Monday=1 … Sunday=7 table
//! - [`availability`] — working hours → candidate slots
//! - [`conflict`] — overlap checks against appointments and breaks
//! - [`scheduler`] — composition: bookable slots, day status, date ranges
//! - [`provider`] — read-only store traits
//! - [`store`] — in-memory store (JSON loadable)
//! - [`error`] — Error types

pub mod availability;
pub mod codec;
pub mod conflict;
pub mod error;
pub mod provider;
pub mod scheduler;
pub mod slot;
pub mod store;
pub mod weekday;

pub use availability::{resolve_day, time_slots, timeslot_by_day, DayAvailability};
pub use codec::{array_time, format_minutes, parse_time, TimeFormat, TimeOption};
pub use conflict::{check_break_time, check_time, check_time_all, ConflictDetector, ExistingBooking};
pub use error::SchedulerError;
pub use provider::{
    AppointmentProvider, BookingId, BreakProvider, BusinessId, BusinessTimeSettings, StoredBooking,
    WorkingHourWindow, WorkingHoursProvider, DEFAULT_INTERVAL_MINUTES,
};
pub use scheduler::{DatedSlot, DayStatus, SlotScheduler};
pub use slot::{Slot, TimeRange};
pub use store::{BusinessRecord, DatedBooking, InMemoryStore};
