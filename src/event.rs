//! Calendar events

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::error::{checked_date, Result};

/// A named occurrence on a single day.
///
/// Events cannot be modified once they are created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    name: String,
    date: NaiveDate,
}

impl Event {
    /// Create a new event. Any name is accepted, including an empty one
    pub fn new<S: Into<String>>(name: S, date: NaiveDate) -> Self {
        Self { name: name.into(), date }
    }

    /// Create a new event from its date components.
    /// Returns an [`Error::InvalidDate`](crate::error::Error::InvalidDate) in case this day does not exist
    pub fn from_ymd<S: Into<String>>(name: S, year: i32, month: u32, day: u32) -> Result<Self> {
        Ok(Self::new(name, checked_date(year, month, day)?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn from_ymd() {
        let event = Event::from_ymd("Meeting 1", 2023, 3, 15).unwrap();
        assert_eq!(event.name(), "Meeting 1");
        assert_eq!(event.date(), NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());

        assert_eq!(
            Event::from_ymd("Nope", 2023, 2, 30),
            Err(Error::InvalidDate { year: 2023, month: 2, day: 30 })
        );
    }

    #[test]
    fn empty_name_is_allowed() {
        let event = Event::new("", NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(event.name(), "");
    }
}
