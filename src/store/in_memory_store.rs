use std::collections::HashMap;

use chrono::NaiveDate;

use crate::traits::EventStore;
use crate::Event;


/// An event store that keeps everything in memory, one bucket per date
#[derive(Clone, Debug, Default)]
pub struct InMemoryEventStore {
    events: HashMap<NaiveDate, Vec<Event>>,
}

impl InMemoryEventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dates that have at least one event, in no particular order
    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.events.keys()
    }
}

impl EventStore for InMemoryEventStore {
    fn add_event(&mut self, event: Event) {
        log::trace!("Storing event {:?} on {}", event.name(), event.date());
        self.events.entry(event.date())
            .or_insert_with(Vec::new)
            .push(event);
    }

    fn get_events(&self, date: NaiveDate) -> Vec<Event> {
        self.events.get(&date)
            .cloned()
            .unwrap_or_default()
    }

    fn event_count(&self) -> usize {
        self.events.values()
            .map(|bucket| bucket.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 3, d).unwrap()
    }

    #[test]
    fn empty_store_has_no_events() {
        let store = InMemoryEventStore::new();
        for d in 1..=31 {
            assert!(store.get_events(day(d)).is_empty());
        }
        assert_eq!(store.event_count(), 0);
        assert_eq!(store.dates().count(), 0);
    }

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let mut store = InMemoryEventStore::new();
        store.add_event(Event::new("b", day(15)));
        store.add_event(Event::new("a", day(15)));
        store.add_event(Event::new("other day", day(16)));
        store.add_event(Event::new("b", day(15)));

        let names: Vec<String> = store.get_events(day(15))
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, vec!["b", "a", "b"]);
        assert_eq!(store.event_count(), 4);
        assert_eq!(store.dates().count(), 2);
    }

    #[test]
    fn returned_events_are_a_copy() {
        let mut store = InMemoryEventStore::new();
        store.add_event(Event::new("Meeting", day(1)));

        let mut events = store.get_events(day(1));
        events.clear();
        events.push(Event::new("Intruder", day(1)));

        assert_eq!(store.get_events(day(1)), vec![Event::new("Meeting", day(1))]);
    }
}
