use std::sync::{Arc, RwLock};

use chrono::NaiveDateTime;

use crate::domain::clock::clock::DateSource;

/// Clock frozen at a given moment. Clones share the same time, so a test can
/// keep a handle and move time after binding the clock to a scheduler.
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: Arc<RwLock<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(time: NaiveDateTime) -> FixedClock {
        FixedClock { time: Arc::new(RwLock::new(time)) }
    }

    pub fn set_now(&self, time: NaiveDateTime) {
        match self.time.write() {
            Ok(mut guard) => *guard = time,
            Err(poisoned) => *poisoned.into_inner() = time,
        }
    }
}

impl DateSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        match self.time.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_is_shared_between_clones() {
        let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap().and_hms_opt(17, 0, 0).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2021, 3, 28).unwrap().and_hms_opt(17, 0, 0).unwrap();

        let clock = FixedClock::new(monday);
        let bound: Arc<dyn DateSource> = Arc::new(clock.clone());
        assert_eq!(bound.now(), monday);

        clock.set_now(sunday);
        assert_eq!(bound.now(), sunday);
    }
}
