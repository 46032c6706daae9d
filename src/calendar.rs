//! The calendar, a facade over an event store

use chrono::NaiveDate;

use crate::traits::EventStore;
use crate::store::InMemoryEventStore;
use crate::Event;

/// A calendar, that owns the store its events are kept in
#[derive(Clone, Debug, Default)]
pub struct Calendar<S: EventStore = InMemoryEventStore> {
    store: S,
}

impl Calendar<InMemoryEventStore> {
    /// Create a calendar backed by a fresh [`InMemoryEventStore`]
    pub fn in_memory() -> Self {
        Self::new(InMemoryEventStore::new())
    }
}

impl<S: EventStore> Calendar<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add an event to this calendar.
    /// The name is not validated in any way.
    pub fn add_event<N: Into<String>>(&mut self, name: N, date: NaiveDate) {
        self.add(Event::new(name, date));
    }

    /// Add an event that has already been built
    pub fn add(&mut self, event: Event) {
        self.store.add_event(event);
    }

    /// Returns the events of this day, in the order they have been added
    pub fn get_events(&self, date: NaiveDate) -> Vec<Event> {
        self.store.get_events(date)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
