pub mod console_sender;
pub mod notification_mock;
pub mod notification_sender;
