use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::schedule::event::EventRecord;
use crate::schedule::slot::TimeSlot;

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    days: BTreeMap<NaiveDate, BTreeMap<TimeSlot, EventRecord>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    pub fn place(&mut self, at: NaiveDateTime, slot: TimeSlot, record: EventRecord) -> bool {
        let day = self.days.entry(at.date()).or_default();
        if day.contains_key(&slot) {
            return false;
        }
        day.insert(slot, record);
        true
    }

    pub fn lookup(&self, at: NaiveDateTime, slot: TimeSlot) -> Option<&EventRecord> {
        self.days.get(&at.date()).and_then(|day| day.get(&slot))
    }

    pub fn lookup_on(&self, date: NaiveDate, slot: TimeSlot) -> Option<&EventRecord> {
        self.days.get(&date).and_then(|day| day.get(&slot))
    }

    pub fn slots_on(&self, date: NaiveDate) -> Vec<(TimeSlot, &EventRecord)> {
        self.days
            .get(&date)
            .map(|day| day.iter().map(|(slot, record)| (*slot, record)).collect())
            .unwrap_or_default()
    }

    pub fn has_events_on(&self, date: NaiveDate) -> bool {
        self.days.get(&date).is_some_and(|day| !day.is_empty())
    }

    pub fn len(&self) -> usize {
        self.days.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn place_into_empty_slot_succeeds() {
        let mut store = EventStore::new();
        let placed = store.place(
            at(2024, 1, 10, 8, 0),
            TimeSlot::EightAm,
            EventRecord::new("🍎", "Breakfast"),
        );

        assert!(placed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn first_write_wins_for_an_occupied_slot() {
        let mut store = EventStore::new();
        store.place(
            at(2024, 1, 10, 8, 0),
            TimeSlot::EightAm,
            EventRecord::new("🍎", "Breakfast"),
        );

        let placed = store.place(
            at(2024, 1, 10, 8, 0),
            TimeSlot::EightAm,
            EventRecord::new("🎒", "School"),
        );

        assert!(!placed);
        let kept = store.lookup(at(2024, 1, 10, 8, 0), TimeSlot::EightAm);
        assert_eq!(kept, Some(&EventRecord::new("🍎", "Breakfast")));
    }

    #[test]
    fn lookup_ignores_the_time_of_day() {
        let mut store = EventStore::new();
        store.place(
            at(2024, 1, 10, 8, 0),
            TimeSlot::EightAm,
            EventRecord::new("🍎", "Breakfast"),
        );

        let found = store.lookup(at(2024, 1, 10, 23, 59), TimeSlot::EightAm);
        assert_eq!(found, Some(&EventRecord::new("🍎", "Breakfast")));
    }

    #[test]
    fn same_slot_on_another_day_is_free() {
        let mut store = EventStore::new();
        store.place(
            at(2024, 1, 10, 8, 0),
            TimeSlot::EightAm,
            EventRecord::new("🍎", "Breakfast"),
        );

        let placed = store.place(
            at(2024, 1, 11, 8, 0),
            TimeSlot::EightAm,
            EventRecord::new("🎒", "School"),
        );

        assert!(placed);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn lookup_of_an_empty_slot_is_none() {
        let store = EventStore::new();
        assert_eq!(store.lookup(at(2024, 1, 10, 8, 0), TimeSlot::NineAm), None);
    }

    #[test]
    fn slots_on_returns_entries_in_slot_order() {
        let mut store = EventStore::new();
        store.place(
            at(2024, 1, 10, 16, 0),
            TimeSlot::FourPm,
            EventRecord::new("⚽", "Practice"),
        );
        store.place(
            at(2024, 1, 10, 8, 0),
            TimeSlot::EightAm,
            EventRecord::new("🍎", "Breakfast"),
        );

        let slots: Vec<TimeSlot> = store
            .slots_on(date(2024, 1, 10))
            .into_iter()
            .map(|(slot, _)| slot)
            .collect();
        assert_eq!(slots, vec![TimeSlot::EightAm, TimeSlot::FourPm]);
    }

    #[test]
    fn has_events_on_reflects_placements() {
        let mut store = EventStore::new();
        assert!(!store.has_events_on(date(2024, 1, 10)));

        store.place(
            at(2024, 1, 10, 8, 0),
            TimeSlot::EightAm,
            EventRecord::new("🍎", "Breakfast"),
        );

        assert!(store.has_events_on(date(2024, 1, 10)));
        assert!(!store.has_events_on(date(2024, 1, 11)));
    }

    #[test]
    fn new_store_is_empty() {
        let store = EventStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    proptest! {
        #[test]
        fn placements_are_keyed_by_day_not_by_time(
            place_hour in 0u32..24,
            place_minute in 0u32..60,
            probe_hour in 0u32..24,
            probe_minute in 0u32..60,
        ) {
            let mut store = EventStore::new();
            let day = date(2024, 1, 10);
            let record = EventRecord::new("🍎", "Breakfast");

            store.place(
                day.and_time(NaiveTime::from_hms_opt(place_hour, place_minute, 0).unwrap()),
                TimeSlot::EightAm,
                record.clone(),
            );

            let probe = day.and_time(NaiveTime::from_hms_opt(probe_hour, probe_minute, 0).unwrap());
            prop_assert_eq!(store.lookup(probe, TimeSlot::EightAm), Some(&record));
        }
    }
}
