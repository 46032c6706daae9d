//! Inclusive ranges of consecutive days

use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate};

use crate::error::{checked_date, Result};

/// Every day from `start` to `end`, both included.
///
/// This is a plain value: every call to [`DateRange::iter`] starts over from `start`, so the same range can be walked as many times as needed.
/// A range whose `end` is before its `start` is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The range that covers a whole month
    pub fn for_month(month: u32, year: i32) -> Result<Self> {
        let start = checked_date(year, month, 1)?;
        let end = last_day_of_month(month, year)?;
        Ok(Self::new(start, end))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

/// Iterator over the days of a [`DateRange`]
#[derive(Clone, Debug)]
pub struct DateRangeIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateRangeIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|date| *date <= self.end)?;
        // succ_opt is None past the last representable date, which ends the iteration
        self.next = current.succ_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) if next <= self.end => (self.end - next).num_days() as usize + 1,
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRangeIter {}

impl FusedIterator for DateRangeIter {}

/// Returns the last day of a month, taking leap years into account
pub fn last_day_of_month(month: u32, year: i32) -> Result<NaiveDate> {
    let first = checked_date(year, month, 1)?;
    let first_of_next = match first.month() {
        12 => checked_date(year + 1, 1, 1),
        m => checked_date(year, m + 1, 1),
    };

    match first_of_next.ok().and_then(|date| date.pred_opt()) {
        Some(last) => Ok(last),
        // December of the last representable year
        None => checked_date(year, month, 31),
    }
}
