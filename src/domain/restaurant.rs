use std::str::FromStr;
use std::sync::Arc;

use chrono::{NaiveDateTime, Weekday};

use crate::api::restaurant_dto::{ClockDto, RestaurantDto};
use crate::domain::booking::booking_scheduler::BookingScheduler;
use crate::domain::clock::clock::{SharedDateSource, SystemClock};
use crate::domain::clock::clock_mock::FixedClock;
use crate::error::{Error, Result};

const CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A restaurant and the booking scheduler configured for it. Notification
/// senders still have to be bound by the caller.
#[derive(Debug)]
pub struct Restaurant {
    pub name: String,
    pub scheduler: BookingScheduler,
}

impl TryFrom<RestaurantDto> for Restaurant {
    type Error = Error;

    fn try_from(dto: RestaurantDto) -> Result<Self> {
        if dto.capacity_per_hour == 0 {
            return Err(Error::InvalidConfig(format!("Restaurant '{}' must seat at least one person per hour.", dto.name)));
        }

        let closed_on = match dto.closed_on.as_deref() {
            Some(day) => Weekday::from_str(day).map_err(|_| Error::InvalidConfig(format!("Unknown weekday '{}' for closedOn.", day)))?,
            None => Weekday::Sun,
        };

        let date_source = date_source_from_dto(&dto.clock)?;
        let scheduler = BookingScheduler::with_date_source(dto.capacity_per_hour, date_source).with_closed_day(closed_on);

        log::debug!("Restaurant '{}' configured: {} people per hour, closed on {}.", dto.name, dto.capacity_per_hour, closed_on);

        Ok(Restaurant { name: dto.name, scheduler })
    }
}

fn date_source_from_dto(dto: &ClockDto) -> Result<SharedDateSource> {
    match (&dto.fixed_now, &dto.simulation_start) {
        (Some(_), Some(_)) => Err(Error::InvalidConfig("Clock can either be fixed or simulated, not both.".to_string())),
        (Some(fixed_now), None) => Ok(Arc::new(FixedClock::new(parse_clock_time(fixed_now)?))),
        (None, Some(start)) => Ok(Arc::new(SystemClock::simulated(parse_clock_time(start)?))),
        (None, None) => Ok(Arc::new(SystemClock::new())),
    }
}

pub fn parse_clock_time(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, CLOCK_FORMAT)
        .map_err(|e| Error::InvalidConfig(format!("Invalid clock time '{}' (expected {}): {}", value, CLOCK_FORMAT, e)))
}
