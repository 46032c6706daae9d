//! Text reports of the events of a calendar

use chrono::{Datelike, NaiveDate};

use crate::calendar::Calendar;
use crate::date_range::DateRange;
use crate::error::Result;
use crate::traits::EventStore;

/// Builds monthly reports out of a calendar
pub struct MonthlyReportGenerator<'a, S: EventStore> {
    calendar: &'a Calendar<S>,
}

impl<'a, S: EventStore> MonthlyReportGenerator<'a, S> {
    pub fn new(calendar: &'a Calendar<S>) -> Self {
        Self { calendar }
    }

    /// Generate the report for a month (1 to 12) of a year.
    ///
    /// The report looks like this, with one block for every day that has events, and nothing for the other days:
    /// ```text
    /// Calendar report for March 2023:
    /// 15 March 2023:
    /// - Meeting 1
    /// 22 March 2023:
    /// - Meeting 2
    /// ```
    /// Lines are separated by `\n`, without a trailing one.
    ///
    /// Returns [`Error::InvalidDate`](crate::error::Error::InvalidDate) for months outside 1-12, or years that cannot be represented
    pub fn generate_report(&self, month: u32, year: i32) -> Result<String> {
        let month_range = DateRange::for_month(month, year)?;
        log::debug!("Generating the report from {} to {}", month_range.start(), month_range.end());

        let mut lines = vec![format!("Calendar report for {}:", month_and_year(month_range.start()))];

        for date in month_range.iter() {
            let events = self.calendar.get_events(date);
            if events.is_empty() {
                continue;
            }

            log::trace!("{} event(s) on {}", events.len(), date);
            lines.push(day_header(date));
            lines.extend(events.iter().map(|event| format!("- {}", event.name())));
        }

        Ok(lines.join("\n"))
    }
}

/// `March 2023`, with the year as a plain number, unlike the padded and signed `%Y`
fn month_and_year(date: NaiveDate) -> String {
    format!("{} {}", date.format("%B"), date.year())
}

fn day_header(date: NaiveDate) -> String {
    format!("{} {}:", date.format("%d"), month_and_year(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_headers_are_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2023, 9, 5).unwrap();
        assert_eq!(day_header(date), "05 September 2023:");
    }

    #[test]
    fn years_are_plain_numbers() {
        assert_eq!(day_header(NaiveDate::from_ymd_opt(999, 3, 7).unwrap()), "07 March 999:");
        assert_eq!(day_header(NaiveDate::from_ymd_opt(10000, 3, 7).unwrap()), "07 March 10000:");
        assert_eq!(day_header(NaiveDate::from_ymd_opt(-44, 3, 15).unwrap()), "15 March -44:");
    }

    #[test]
    fn events_outside_the_month_are_ignored() {
        let mut calendar = Calendar::in_memory();
        calendar.add_event("Too early", NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
        calendar.add_event("Inside", NaiveDate::from_ymd_opt(2023, 3, 31).unwrap());
        calendar.add_event("Too late", NaiveDate::from_ymd_opt(2023, 4, 1).unwrap());

        let report = MonthlyReportGenerator::new(&calendar).generate_report(3, 2023).unwrap();
        assert_eq!(report, "Calendar report for March 2023:\n31 March 2023:\n- Inside");
    }
}
