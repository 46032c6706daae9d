//! Implementations of [`EventStore`](crate::traits::EventStore)

pub mod in_memory_store;
pub mod shared_store;

pub use in_memory_store::InMemoryEventStore;
pub use shared_store::SharedEventStore;
