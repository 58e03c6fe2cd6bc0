use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::schedule::Schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationChannel {
    Sms,
    Mail,
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationChannel::Sms => write!(f, "sms"),
            NotificationChannel::Mail => write!(f, "mail"),
        }
    }
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Failed to deliver {channel} notification: {reason}")]
    Transport { channel: NotificationChannel, reason: String },

    #[error("Customer '{0}' has no address for a mail notification")]
    MissingRecipient(String),
}

/// Delivers a confirmation for an accepted booking over one channel.
///
/// The booking engine only cares that `send` was called. How and whether the
/// message reaches the customer is up to the implementation.
pub trait NotificationSender: fmt::Debug + Send + Sync {
    fn channel(&self) -> NotificationChannel;

    fn send(&self, schedule: &Schedule) -> Result<(), NotificationError>;
}

pub type SharedNotificationSender = Arc<dyn NotificationSender>;

/// Confirmation text sent to the customer of an accepted booking.
pub fn confirmation_message(schedule: &Schedule) -> String {
    let people = match schedule.number_of_people() {
        1 => "1 person".to_string(),
        n => format!("{} people", n),
    };

    format!(
        "Dear {}, your table for {} on {} at {} is confirmed.",
        schedule.customer().name(),
        people,
        schedule.date_time().format("%Y-%m-%d"),
        schedule.date_time().format("%H:%M")
    )
}
