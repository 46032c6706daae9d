use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::traits::EventStore;
use crate::Event;

/// A handle to an [`EventStore`] that can be shared between several owners, possibly on several threads.
///
/// Every clone of this handle refers to the same underlying store, which is guarded by a single lock.
#[derive(Debug)]
pub struct SharedEventStore<S: EventStore> {
    inner: Arc<Mutex<S>>,
}

impl<S: EventStore> SharedEventStore<S> {
    pub fn new(store: S) -> Self {
        Self { inner: Arc::new(Mutex::new(store)) }
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        // Neither add_event nor get_events can leave a store half-updated, so a poisoned lock is still usable
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("Event store lock was poisoned. Recovering it");
            poisoned.into_inner()
        })
    }
}

impl<S: EventStore> Clone for SharedEventStore<S> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<S: EventStore + Default> Default for SharedEventStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: EventStore> EventStore for SharedEventStore<S> {
    fn add_event(&mut self, event: Event) {
        self.lock().add_event(event)
    }

    fn get_events(&self, date: NaiveDate) -> Vec<Event> {
        self.lock().get_events(date)
    }

    fn event_count(&self) -> usize {
        self.lock().event_count()
    }
}
