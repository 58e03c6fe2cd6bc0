use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDto {
    pub name: String,
    pub capacity_per_hour: u32,
    /// Weekday on which no bookings are taken, e.g. "sunday". Defaults to sunday.
    pub closed_on: Option<String>,
    #[serde(default)]
    pub clock: ClockDto,
}

/// Which "now" the booking engine sees. Without any field set the local wall
/// clock is used.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockDto {
    /// Frozen date-time, `YYYY-MM-DDTHH:MM:SS`.
    pub fixed_now: Option<String>,
    /// Start of a simulated timeline that advances in real time.
    pub simulation_start: Option<String>,
}
