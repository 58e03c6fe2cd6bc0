use std::sync::{Arc, Mutex};

use crate::domain::notification::notification_sender::{NotificationChannel, NotificationError, NotificationSender};
use crate::domain::schedule::Schedule;

/// Sender that records every schedule it was asked to deliver.
///
/// Clones share the recorded list, so a test keeps one handle and binds
/// another to the scheduler.
#[derive(Debug, Clone)]
pub struct RecordingSender {
    channel: NotificationChannel,
    sent: Arc<Mutex<Vec<Schedule>>>,
}

impl RecordingSender {
    pub fn new(channel: NotificationChannel) -> RecordingSender {
        RecordingSender { channel, sent: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn sms() -> RecordingSender {
        RecordingSender::new(NotificationChannel::Sms)
    }

    pub fn mail() -> RecordingSender {
        RecordingSender::new(NotificationChannel::Mail)
    }

    pub fn count(&self) -> usize {
        self.sent().len()
    }

    pub fn is_called(&self) -> bool {
        self.count() > 0
    }

    pub fn sent(&self) -> Vec<Schedule> {
        match self.sent.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl NotificationSender for RecordingSender {
    fn channel(&self) -> NotificationChannel {
        self.channel
    }

    fn send(&self, schedule: &Schedule) -> Result<(), NotificationError> {
        match self.sent.lock() {
            Ok(mut guard) => guard.push(schedule.clone()),
            Err(poisoned) => poisoned.into_inner().push(schedule.clone()),
        }
        Ok(())
    }
}

/// Sender whose transport is always down.
#[derive(Debug, Clone)]
pub struct FailingSender {
    channel: NotificationChannel,
}

impl FailingSender {
    pub fn new(channel: NotificationChannel) -> FailingSender {
        FailingSender { channel }
    }
}

impl NotificationSender for FailingSender {
    fn channel(&self) -> NotificationChannel {
        self.channel
    }

    fn send(&self, _schedule: &Schedule) -> Result<(), NotificationError> {
        Err(NotificationError::Transport { channel: self.channel, reason: "gateway unreachable".to_string() })
    }
}
