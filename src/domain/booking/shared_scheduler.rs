use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDateTime;

use crate::domain::booking::booking_scheduler::BookingScheduler;
use crate::domain::booking::schedule_ledger::ScheduleId;
use crate::domain::schedule::Schedule;
use crate::error::BookingError;

/// Cloneable handle to a [`BookingScheduler`] used by several callers.
///
/// Every request holds the lock for the whole check-commit-notify sequence, so
/// two bookings racing for the same hour-slot cannot both pass the capacity check.
#[derive(Debug, Clone)]
pub struct SharedBookingScheduler {
    inner: Arc<Mutex<BookingScheduler>>,
}

impl SharedBookingScheduler {
    pub fn new(scheduler: BookingScheduler) -> Self {
        Self { inner: Arc::new(Mutex::new(scheduler)) }
    }

    pub fn add_schedule(&self, schedule: Schedule) -> Result<ScheduleId, BookingError> {
        self.lock()?.add_schedule(schedule)
    }

    pub fn has_schedule(&self, schedule: &Schedule) -> Result<bool, BookingError> {
        Ok(self.lock()?.has_schedule(schedule))
    }

    pub fn occupancy(&self, date_time: NaiveDateTime) -> Result<u32, BookingError> {
        Ok(self.lock()?.occupancy(date_time))
    }

    /// Runs `f` with exclusive access to the scheduler, e.g. to rebind senders.
    pub fn with_scheduler<R>(&self, f: impl FnOnce(&mut BookingScheduler) -> R) -> Result<R, BookingError> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    fn lock(&self) -> Result<MutexGuard<'_, BookingScheduler>, BookingError> {
        self.inner.lock().map_err(|_| {
            log::error!("Booking scheduler lock poisoned.");
            BookingError::SchedulerPoisoned
        })
    }
}
