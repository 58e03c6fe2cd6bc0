use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime, Weekday};

use crate::domain::booking::schedule_ledger::{ScheduleId, ScheduleLedger};
use crate::domain::clock::clock::{SharedDateSource, SystemClock};
use crate::domain::notification::notification_sender::{NotificationChannel, SharedNotificationSender};
use crate::domain::schedule::Schedule;
use crate::error::{BookingError, weekday_name};

/// Admits bookings into a per-hour capacity ledger and notifies the customer.
///
/// A booking request passes three checks, in this order:
/// 1. the restaurant takes no bookings while "today" (as reported by the bound
///    [`DateSource`](crate::domain::clock::clock::DateSource)) is the closed day, Sunday unless configured otherwise;
/// 2. the requested time must be on the hour;
/// 3. the hour-slot must have room for the whole party.
///
/// Only then is the schedule committed to the ledger, followed by an SMS and,
/// if the customer left an address, a mail. A rejected request leaves no trace.
#[derive(Debug)]
pub struct BookingScheduler {
    capacity_per_hour: u32,
    closed_on: Weekday,
    ledger: ScheduleLedger,
    date_source: SharedDateSource,
    sms_sender: Option<SharedNotificationSender>,
    mail_sender: Option<SharedNotificationSender>,
}

impl BookingScheduler {
    /// Scheduler bound to the local wall clock.
    pub fn new(capacity_per_hour: u32) -> Self {
        Self::with_date_source(capacity_per_hour, Arc::new(SystemClock::new()))
    }

    pub fn with_date_source(capacity_per_hour: u32, date_source: SharedDateSource) -> Self {
        BookingScheduler {
            capacity_per_hour,
            closed_on: Weekday::Sun,
            ledger: ScheduleLedger::new(),
            date_source,
            sms_sender: None,
            mail_sender: None,
        }
    }

    pub fn with_closed_day(mut self, closed_on: Weekday) -> Self {
        self.closed_on = closed_on;
        self
    }

    pub fn set_sms_sender(&mut self, sender: SharedNotificationSender) {
        self.sms_sender = Some(sender);
    }

    pub fn set_mail_sender(&mut self, sender: SharedNotificationSender) {
        self.mail_sender = Some(sender);
    }

    pub fn set_date_source(&mut self, date_source: SharedDateSource) {
        self.date_source = date_source;
    }

    /// Validates `schedule` and, if it is admissible, records it and sends the
    /// confirmations.
    ///
    /// # Returns
    /// The ScheduleId of the accepted entry. A failing notification transport is
    /// reported as [`BookingError::Notification`]; the schedule stays booked in that case.
    pub fn add_schedule(&mut self, schedule: Schedule) -> Result<ScheduleId, BookingError> {
        self.validate(&schedule)?;

        let sms_sender = self.bound_sender(NotificationChannel::Sms)?;
        let mail_sender =
            if schedule.customer().has_email() { Some(self.bound_sender(NotificationChannel::Mail)?) } else { None };

        let key = self.ledger.insert(schedule.clone());
        tracing::info!(
            LogDescription = "Booking accepted",
            Customer = schedule.customer().name(),
            Slot = %schedule.hour_slot(),
            NumberOfPeople = schedule.number_of_people(),
            SlotLoad = self.ledger.occupancy(schedule.date_time()),
            Capacity = self.capacity_per_hour,
        );

        sms_sender.send(&schedule)?;
        if let Some(mail_sender) = mail_sender {
            mail_sender.send(&schedule)?;
        }

        Ok(key)
    }

    /// Returns true if an entry equal to `schedule` has been accepted.
    pub fn has_schedule(&self, schedule: &Schedule) -> bool {
        self.ledger.contains(schedule)
    }

    pub fn get(&self, key: ScheduleId) -> Option<&Schedule> {
        self.ledger.get(key)
    }

    /// Accepted schedules in the order they were admitted.
    pub fn schedules(&self) -> impl Iterator<Item = &Schedule> {
        self.ledger.iter().map(|(_, schedule)| schedule)
    }

    pub fn ledger(&self) -> &ScheduleLedger {
        &self.ledger
    }

    pub fn capacity_per_hour(&self) -> u32 {
        self.capacity_per_hour
    }

    pub fn closed_on(&self) -> Weekday {
        self.closed_on
    }

    /// People already booked into the hour-slot containing `date_time`.
    pub fn occupancy(&self, date_time: NaiveDateTime) -> u32 {
        self.ledger.occupancy(date_time)
    }

    pub fn remaining_capacity(&self, date_time: NaiveDateTime) -> u32 {
        self.capacity_per_hour.saturating_sub(self.occupancy(date_time))
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    fn validate(&self, schedule: &Schedule) -> Result<(), BookingError> {
        let today = self.date_source.now().weekday();
        if today == self.closed_on {
            tracing::warn!(
                LogDescription = "Booking rejected",
                Reason = "closed",
                Weekday = weekday_name(&today),
                Customer = schedule.customer().name(),
            );
            return Err(BookingError::BookingClosed { weekday: today });
        }

        if !schedule.is_on_the_hour() {
            tracing::warn!(
                LogDescription = "Booking rejected",
                Reason = "not on the hour",
                RequestedTime = %schedule.date_time(),
                Customer = schedule.customer().name(),
            );
            return Err(BookingError::InvalidTimeSlot { date_time: schedule.date_time() });
        }

        let available = self.remaining_capacity(schedule.date_time());
        if schedule.number_of_people() > available {
            tracing::warn!(
                LogDescription = "Booking rejected",
                Reason = "over capacity",
                Slot = %schedule.hour_slot(),
                NumberOfPeople = schedule.number_of_people(),
                Available = available,
                Customer = schedule.customer().name(),
            );
            return Err(BookingError::CapacityExceeded { requested: schedule.number_of_people(), available });
        }

        Ok(())
    }

    fn bound_sender(&self, channel: NotificationChannel) -> Result<SharedNotificationSender, BookingError> {
        let sender = match channel {
            NotificationChannel::Sms => &self.sms_sender,
            NotificationChannel::Mail => &self.mail_sender,
        };

        sender.clone().ok_or_else(|| {
            tracing::error!(LogDescription = "Notification sender not bound", Channel = %channel);
            BookingError::SenderNotBound(channel)
        })
    }
}
