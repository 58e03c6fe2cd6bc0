use serde::Deserialize;

/// One row of a bookings CSV file.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingDto {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    /// `YYYY-MM-DD HH:MM`
    pub date_time: String,
    pub number_of_people: u32,
}
