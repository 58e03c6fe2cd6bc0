use chrono::{NaiveDateTime, Weekday};
use thiserror::Error;

use crate::domain::notification::notification_sender::{NotificationChannel, NotificationError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse restaurant config JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to read bookings CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid restaurant config: {0}")]
    InvalidConfig(String),

    #[error("Invalid booking entry: {0}")]
    InvalidBooking(String),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons for the scheduler to turn down a booking request.
///
/// The first three kinds are ordinary rejections of the request. The remaining
/// ones signal wiring mistakes or a failing notification transport.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Booking system is not available on {}", weekday_name(.weekday))]
    BookingClosed { weekday: Weekday },

    #[error("Booking time must be on the hour")]
    InvalidTimeSlot { date_time: NaiveDateTime },

    #[error("Number of people is over restaurant capacity per hour")]
    CapacityExceeded { requested: u32, available: u32 },

    #[error("No {0} sender bound to the booking scheduler")]
    SenderNotBound(NotificationChannel),

    #[error(transparent)]
    Notification(#[from] NotificationError),

    #[error("Booking scheduler lock was poisoned")]
    SchedulerPoisoned,
}

/// Lowercase english name of a weekday, as used in user facing messages.
pub fn weekday_name(weekday: &Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_rejection_messages() {
        let date_time = NaiveDate::from_ymd_opt(2021, 3, 26).unwrap().and_hms_opt(9, 5, 0).unwrap();

        assert_eq!(BookingError::BookingClosed { weekday: Weekday::Sun }.to_string(), "Booking system is not available on sunday");
        assert_eq!(BookingError::InvalidTimeSlot { date_time }.to_string(), "Booking time must be on the hour");
        assert_eq!(
            BookingError::CapacityExceeded { requested: 2, available: 1 }.to_string(),
            "Number of people is over restaurant capacity per hour"
        );
        assert_eq!(BookingError::SenderNotBound(NotificationChannel::Mail).to_string(), "No mail sender bound to the booking scheduler");
    }

    #[test]
    fn test_booking_error_converts_into_crate_error() {
        let error: Error = BookingError::BookingClosed { weekday: Weekday::Sat }.into();
        assert_eq!(error.to_string(), "Booking system is not available on saturday");
    }
}
