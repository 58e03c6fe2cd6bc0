use crate::domain::notification::notification_sender::{NotificationChannel, NotificationError, NotificationSender, confirmation_message};
use crate::domain::schedule::Schedule;

/// SMS transport that only writes the message to the log.
#[derive(Debug, Default, Clone)]
pub struct ConsoleSmsSender;

impl NotificationSender for ConsoleSmsSender {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Sms
    }

    fn send(&self, schedule: &Schedule) -> Result<(), NotificationError> {
        log::info!("[SMS -> {}] {}", schedule.customer().phone(), confirmation_message(schedule));
        Ok(())
    }
}

/// Mail transport that only writes the message to the log.
#[derive(Debug, Default, Clone)]
pub struct ConsoleMailSender;

impl NotificationSender for ConsoleMailSender {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Mail
    }

    fn send(&self, schedule: &Schedule) -> Result<(), NotificationError> {
        let customer = schedule.customer();
        let Some(email) = customer.email() else {
            return Err(NotificationError::MissingRecipient(customer.name().to_string()));
        };

        log::info!("[MAIL -> {}] {}", email, confirmation_message(schedule));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::Customer;
    use chrono::NaiveDate;

    fn schedule_for(customer: Customer) -> Schedule {
        let date_time = NaiveDate::from_ymd_opt(2021, 3, 26).unwrap().and_hms_opt(9, 0, 0).unwrap();
        Schedule::new(date_time, 2, customer)
    }

    #[test]
    fn test_mail_sender_requires_address() {
        let sender = ConsoleMailSender;

        let result = sender.send(&schedule_for(Customer::new("Fake name", "010-1234-5678")));
        assert!(matches!(result, Err(NotificationError::MissingRecipient(name)) if name == "Fake name"));

        let result = sender.send(&schedule_for(Customer::with_email("Fake name", "010-1234-5678", "test@test.com")));
        assert!(result.is_ok());
    }

    #[test]
    fn test_sms_sender_always_succeeds() {
        let sender = ConsoleSmsSender;
        assert_eq!(sender.channel(), NotificationChannel::Sms);
        assert!(sender.send(&schedule_for(Customer::new("Fake name", "010-1234-5678"))).is_ok());
    }
}
