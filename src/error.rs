//! Errors returned by this crate

/// The only way things can go wrong here: a date that does not exist in the calendar
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid date: year {year}, month {month}, day {day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Build a `NaiveDate`, or an [`Error::InvalidDate`] when this combination does not exist
pub fn checked_date(year: i32, month: u32, day: u32) -> Result<chrono::NaiveDate> {
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(Error::InvalidDate { year, month, day })
}
