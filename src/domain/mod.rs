pub mod booking;
pub mod clock;
pub mod customer;
pub mod notification;
pub mod restaurant;
pub mod schedule;
