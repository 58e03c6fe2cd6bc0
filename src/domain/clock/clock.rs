use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

/// Source of "now" for the booking engine.
///
/// The engine never reads the wall clock itself. Production code binds a
/// [`SystemClock`], tests and replays bind a fixed or simulated one.
pub trait DateSource: std::fmt::Debug + Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

pub type SharedDateSource = Arc<dyn DateSource>;

/// Local wall clock, optionally shifted into a simulated timeline.
///
/// In simulation mode the clock starts at `simulation_start` when it is
/// constructed and then advances with real elapsed time.
#[derive(Debug, Clone)]
pub struct SystemClock {
    simulation_start: Option<NaiveDateTime>,
    real_time_base: NaiveDateTime,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock { simulation_start: None, real_time_base: Self::get_system_time() }
    }

    pub fn simulated(simulation_start: NaiveDateTime) -> SystemClock {
        SystemClock { simulation_start: Some(simulation_start), real_time_base: Self::get_system_time() }
    }

    pub fn is_simulation(&self) -> bool {
        self.simulation_start.is_some()
    }

    fn get_system_time() -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new()
    }
}

impl DateSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.simulation_start {
            Some(start) => start + (Self::get_system_time() - self.real_time_base),
            None => Self::get_system_time(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_simulated_clock_starts_at_base() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap().and_hms_opt(17, 0, 0).unwrap();
        let clock = SystemClock::simulated(start);

        let now = clock.now();
        assert!(clock.is_simulation());
        assert!(now >= start);
        assert!(now - start < chrono::Duration::minutes(1));
    }

    #[test]
    fn test_system_clock_follows_wall_clock() {
        let clock = SystemClock::default();
        let before = Local::now().naive_local();
        let now = clock.now();

        assert!(!clock.is_simulation());
        assert!(now >= before);
    }
}
