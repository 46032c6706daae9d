//! This crate provides a small in-memory calendar.
//!
//! Events are named occurrences bound to a single day. They are kept in an [`EventStore`](traits::EventStore), usually an [`InMemoryEventStore`](store::InMemoryEventStore),
//! behind a [`Calendar`] facade. \
//! A [`MonthlyReportGenerator`](report::MonthlyReportGenerator) walks the days of a month (see [`DateRange`](date_range::DateRange)) and lists the events of every day in a plain-text report.

pub mod traits;
pub mod error;
pub use error::Error;

mod event;
pub use event::Event;
pub mod store;
pub mod calendar;
pub use calendar::Calendar;

pub mod date_range;
pub use date_range::DateRange;
pub mod report;
pub use report::MonthlyReportGenerator;

pub mod settings;
