pub mod booking_dto;
pub mod restaurant_dto;
