use chrono::{NaiveDateTime, Timelike};

use crate::api::booking_dto::BookingDto;
use crate::domain::customer::Customer;
use crate::error::Error;

const BOOKING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single table reservation request: when, for how many people and for whom.
///
/// The value is immutable. Once the [`BookingScheduler`](crate::domain::booking::booking_scheduler::BookingScheduler)
/// accepts it, the schedule is moved into the scheduler's ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schedule {
    date_time: NaiveDateTime,
    number_of_people: u32,
    customer: Customer,
}

impl Schedule {
    /// `number_of_people` is expected to be greater than zero.
    pub fn new(date_time: NaiveDateTime, number_of_people: u32, customer: Customer) -> Self {
        Schedule { date_time, number_of_people, customer }
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn number_of_people(&self) -> u32 {
        self.number_of_people
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// True if the requested time has no minute, second or sub-second part.
    pub fn is_on_the_hour(&self) -> bool {
        self.date_time.minute() == 0 && self.date_time.second() == 0 && self.date_time.nanosecond() == 0
    }

    /// The requested time truncated to the start of its hour.
    pub fn hour_slot(&self) -> NaiveDateTime {
        hour_slot_of(self.date_time)
    }
}

/// Truncates a date-time to the start of its hour. Schedules sharing the same
/// result belong to the same hour-slot.
pub fn hour_slot_of(date_time: NaiveDateTime) -> NaiveDateTime {
    date_time.date().and_hms_opt(date_time.hour(), 0, 0).unwrap_or(date_time)
}

impl TryFrom<BookingDto> for Schedule {
    type Error = Error;

    fn try_from(dto: BookingDto) -> Result<Self, Self::Error> {
        let date_time = NaiveDateTime::parse_from_str(dto.date_time.trim(), BOOKING_TIME_FORMAT)
            .map_err(|e| Error::InvalidBooking(format!("'{}' of {} is not a valid booking time: {}", dto.date_time, dto.name, e)))?;

        if dto.number_of_people == 0 {
            return Err(Error::InvalidBooking(format!("Booking of {} at {} is for zero people.", dto.name, dto.date_time)));
        }

        let customer = match dto.email.filter(|email| !email.trim().is_empty()) {
            Some(email) => Customer::with_email(dto.name, dto.phone, email),
            None => Customer::new(dto.name, dto.phone),
        };

        Ok(Schedule::new(date_time, dto.number_of_people, customer))
    }
}
