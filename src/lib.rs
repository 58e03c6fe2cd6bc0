use crate::api::booking_dto::BookingDto;
use crate::api::restaurant_dto::RestaurantDto;
use crate::domain::restaurant::Restaurant;
use crate::domain::schedule::Schedule;
use crate::error::Result;
use crate::loader::parser::{parse_csv_file, parse_json_file};

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Builds a restaurant and its booking scheduler from a JSON config file.
pub fn generate_restaurant(file_path: &str) -> Result<Restaurant> {
    let root_dto: RestaurantDto = parse_json_file::<RestaurantDto>(file_path)?;
    log::info!("Restaurant config '{}' parsed successfully.", file_path);

    let restaurant = Restaurant::try_from(root_dto)?;
    log::info!("Booking scheduler for '{}' constructed successfully.", restaurant.name);

    Ok(restaurant)
}

/// Reads booking requests from a CSV file, in file order.
pub fn load_bookings(file_path: &str) -> Result<Vec<Schedule>> {
    let rows: Vec<BookingDto> = parse_csv_file(file_path)?;
    log::info!("Loaded {} booking requests from '{}'.", rows.len(), file_path);

    rows.into_iter().map(Schedule::try_from).collect()
}
