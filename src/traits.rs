//! Traits used by multiple structs in this crate

use chrono::NaiveDate;

use crate::Event;

/// A place where events are stored and looked up by date.
///
/// Implementations must keep the events of a single date in their insertion order.
pub trait EventStore {
    /// Store an event. Identical events are all kept as distinct entries
    fn add_event(&mut self, event: Event);

    /// Returns the events of this date, in insertion order.
    /// The returned `Vec` is a copy: modifying it does not affect the store.
    fn get_events(&self, date: NaiveDate) -> Vec<Event>;

    /// Returns the total number of events in this store, across all dates
    fn event_count(&self) -> usize;
}
