use std::sync::Arc;

use chrono::{NaiveDate, Weekday};

use restaurant_booking::domain::notification::notification_mock::RecordingSender;
use restaurant_booking::error::{BookingError, Error};
use restaurant_booking::{generate_restaurant, load_bookings};

fn data_path(file: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), file)
}

#[test]
fn test_restaurant_config_loading() {
    let restaurant = generate_restaurant(&data_path("restaurant.json")).unwrap();

    assert_eq!(restaurant.name, "Test Bistro");
    assert_eq!(restaurant.scheduler.capacity_per_hour(), 3);
    assert_eq!(restaurant.scheduler.closed_on(), Weekday::Sun);
    assert!(restaurant.scheduler.is_empty());
}

#[test]
fn test_bookings_loading() {
    let bookings = load_bookings(&data_path("bookings.csv")).unwrap();

    assert_eq!(bookings.len(), 5);
    assert_eq!(bookings[0].customer().name(), "Kim Minsu");
    assert!(!bookings[0].customer().has_email());
    assert_eq!(bookings[1].customer().email(), Some("jiwon@test.com"));
    assert_eq!(bookings[3].number_of_people(), 3);
    assert_eq!(bookings[4].date_time(), NaiveDate::from_ymd_opt(2021, 3, 26).unwrap().and_hms_opt(11, 30, 0).unwrap());
}

#[test]
fn test_replay_of_bookings_file() {
    let mut restaurant = generate_restaurant(&data_path("restaurant.json")).unwrap();
    let sms = RecordingSender::sms();
    let mail = RecordingSender::mail();
    restaurant.scheduler.set_sms_sender(Arc::new(sms.clone()));
    restaurant.scheduler.set_mail_sender(Arc::new(mail.clone()));

    let results: Vec<_> = load_bookings(&data_path("bookings.csv"))
        .unwrap()
        .into_iter()
        .map(|schedule| restaurant.scheduler.add_schedule(schedule))
        .collect();

    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(matches!(results[2], Err(BookingError::CapacityExceeded { requested: 1, available: 0 })));
    assert!(results[3].is_ok());
    assert!(matches!(results[4], Err(BookingError::InvalidTimeSlot { .. })));

    assert_eq!(restaurant.scheduler.len(), 3);
    assert_eq!(sms.count(), 3);
    assert_eq!(mail.count(), 2);
}

#[test]
fn test_closed_restaurant_rejects_whole_file() {
    let mut restaurant = generate_restaurant(&data_path("restaurant_sunday.json")).unwrap();
    let sms = RecordingSender::sms();
    restaurant.scheduler.set_sms_sender(Arc::new(sms.clone()));
    restaurant.scheduler.set_mail_sender(Arc::new(RecordingSender::mail()));

    for schedule in load_bookings(&data_path("bookings.csv")).unwrap() {
        let error = restaurant.scheduler.add_schedule(schedule).unwrap_err();
        assert_eq!(error.to_string(), "Booking system is not available on sunday");
    }
    assert!(!sms.is_called());
}

#[test]
fn test_invalid_inputs() {
    assert!(matches!(load_bookings(&data_path("bookings_invalid.csv")), Err(Error::InvalidBooking(_))));
    assert!(matches!(load_bookings(&data_path("missing.csv")), Err(Error::CsvError(_))));
    assert!(matches!(generate_restaurant(&data_path("missing.json")), Err(Error::IoError(_))));
    assert!(matches!(generate_restaurant(&data_path("bookings.csv")), Err(Error::DeserializationError(_))));
}
