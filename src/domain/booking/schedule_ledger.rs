use chrono::NaiveDateTime;
use slotmap::{SlotMap, new_key_type};
use std::collections::{BTreeMap, HashMap};

use crate::domain::schedule::{Schedule, hour_slot_of};

new_key_type! {
    pub struct ScheduleId;
}

/// Bookkeeping of one hour-slot: the party sizes admitted into it and which
/// schedules they belong to.
#[derive(Debug, Clone, Default)]
pub struct HourSlot {
    /// Sum of `number_of_people` over all schedules in this slot.
    pub load: u32,

    pub schedule_ids: Vec<ScheduleId>,
}

impl HourSlot {
    /// Seats still free in this slot for a restaurant with the given capacity.
    pub fn remaining(&self, capacity: u32) -> u32 {
        capacity.saturating_sub(self.load)
    }
}

/// Accepted schedules in insertion order, indexed by hour-slot.
///
/// The ledger only grows. It performs no validation; the
/// [`BookingScheduler`](super::booking_scheduler::BookingScheduler) is the single
/// place that decides what gets inserted.
#[derive(Debug, Default)]
pub struct ScheduleLedger {
    entries: SlotMap<ScheduleId, Schedule>,

    /// Insertion order of `entries`.
    order: Vec<ScheduleId>,

    /// Index hour-slot start -> slot bookkeeping.
    hour_index: HashMap<NaiveDateTime, HourSlot>,
}

impl ScheduleLedger {
    pub fn new() -> Self {
        Self { entries: SlotMap::with_key(), order: Vec::new(), hour_index: HashMap::new() }
    }

    /// Adds an accepted schedule to the ledger.
    ///
    /// # Returns
    /// Returns the ScheduleId under which the schedule is stored.
    pub(crate) fn insert(&mut self, schedule: Schedule) -> ScheduleId {
        let slot_start = schedule.hour_slot();
        let people = schedule.number_of_people();
        let key = self.entries.insert(schedule);

        self.order.push(key);
        let slot = self.hour_index.entry(slot_start).or_default();
        slot.load += people;
        slot.schedule_ids.push(key);

        key
    }

    /// Number of people already booked into the hour-slot containing `date_time`.
    pub fn occupancy(&self, date_time: NaiveDateTime) -> u32 {
        self.hour_index.get(&hour_slot_of(date_time)).map_or(0, |slot| slot.load)
    }

    pub fn hour_slot(&self, date_time: NaiveDateTime) -> Option<&HourSlot> {
        self.hour_index.get(&hour_slot_of(date_time))
    }

    /// Returns true if an entry equal to `schedule` was accepted.
    pub fn contains(&self, schedule: &Schedule) -> bool {
        self.hour_slot(schedule.date_time())
            .is_some_and(|slot| slot.schedule_ids.iter().any(|key| self.entries.get(*key) == Some(schedule)))
    }

    pub fn get(&self, key: ScheduleId) -> Option<&Schedule> {
        self.entries.get(key)
    }

    /// Accepted schedules in the order they were admitted.
    pub fn iter(&self) -> impl Iterator<Item = (ScheduleId, &Schedule)> {
        self.order.iter().filter_map(|key| self.entries.get(*key).map(|schedule| (*key, schedule)))
    }

    /// Load per hour-slot, ordered by time.
    pub fn loads(&self) -> BTreeMap<NaiveDateTime, u32> {
        self.hour_index.iter().map(|(start, slot)| (*start, slot.load)).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::Customer;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 3, day).unwrap().and_hms_opt(hour, min, 0).unwrap()
    }

    fn schedule(date_time: NaiveDateTime, people: u32, name: &str) -> Schedule {
        Schedule::new(date_time, people, Customer::new(name, "010-1234-5678"))
    }

    #[test]
    fn test_insert_keeps_order_and_load() {
        let mut ledger = ScheduleLedger::new();
        assert!(ledger.is_empty());

        let first = ledger.insert(schedule(at(26, 9, 0), 2, "a"));
        let second = ledger.insert(schedule(at(26, 10, 0), 1, "b"));
        let third = ledger.insert(schedule(at(26, 9, 0), 1, "c"));

        let keys: Vec<ScheduleId> = ledger.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![first, second, third]);
        assert_eq!(ledger.len(), 3);

        assert_eq!(ledger.occupancy(at(26, 9, 0)), 3);
        assert_eq!(ledger.occupancy(at(26, 10, 0)), 1);
        assert_eq!(ledger.occupancy(at(27, 9, 0)), 0);
    }

    #[test]
    fn test_occupancy_matches_sum_per_slot() {
        let mut ledger = ScheduleLedger::new();
        for (day, hour, people) in [(26, 9, 2), (26, 9, 1), (26, 11, 3), (27, 9, 2)] {
            ledger.insert(schedule(at(day, hour, 0), people, "guest"));
        }

        for (start, load) in ledger.loads() {
            let sum: u32 =
                ledger.iter().filter(|(_, s)| s.hour_slot() == start).map(|(_, s)| s.number_of_people()).sum();
            assert_eq!(load, sum);
        }
        assert_eq!(ledger.loads().len(), 3);
    }

    #[test]
    fn test_contains_only_accepted_entries() {
        let mut ledger = ScheduleLedger::new();
        let accepted = schedule(at(26, 9, 0), 2, "a");
        let key = ledger.insert(accepted.clone());

        assert!(ledger.contains(&accepted));
        assert_eq!(ledger.get(key), Some(&accepted));
        assert!(!ledger.contains(&schedule(at(26, 9, 0), 2, "b")));
        assert!(!ledger.contains(&schedule(at(26, 10, 0), 2, "a")));
    }

    #[test]
    fn test_remaining_saturates() {
        let slot = HourSlot { load: 5, schedule_ids: Vec::new() };
        assert_eq!(slot.remaining(3), 0);
        assert_eq!(slot.remaining(8), 3);
    }
}
