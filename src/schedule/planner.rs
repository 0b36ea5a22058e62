use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::schedule::event::EventRecord;
use crate::schedule::slot::TimeSlot;
use crate::schedule::store::EventStore;
use crate::schedule::upcoming::{UpcomingEvent, UpcomingList};

#[derive(Debug, Clone, Default)]
pub struct Planner {
    store: EventStore,
    upcoming: UpcomingList,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            store: EventStore::new(),
            upcoming: UpcomingList::new(),
        }
    }

    pub fn place(&mut self, at: NaiveDateTime, slot: TimeSlot, record: EventRecord) -> bool {
        let Some(starts_at) = at.date().and_hms_opt(slot.hour(), 0, 0) else {
            return false;
        };

        if !self.store.place(at, slot, record.clone()) {
            debug!("slot {} on {} already taken", slot, at.date());
            return false;
        }

        self.upcoming.record(starts_at, &record.icon, &record.title);
        debug!("placed {} at {} {}", record.title, at.date(), slot);
        true
    }

    pub fn lookup(&self, at: NaiveDateTime, slot: TimeSlot) -> Option<&EventRecord> {
        self.store.lookup(at, slot)
    }

    pub fn lookup_on(&self, date: NaiveDate, slot: TimeSlot) -> Option<&EventRecord> {
        self.store.lookup_on(date, slot)
    }

    pub fn slots_on(&self, date: NaiveDate) -> Vec<(TimeSlot, &EventRecord)> {
        self.store.slots_on(date)
    }

    pub fn has_events_on(&self, date: NaiveDate) -> bool {
        self.store.has_events_on(date)
    }

    pub fn upcoming_events(&self) -> &[UpcomingEvent] {
        self.upcoming.events()
    }

    pub fn placed_count(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty() && self.upcoming.is_empty()
    }
}
