pub mod booking_scheduler;
pub mod schedule_ledger;
pub mod shared_scheduler;
