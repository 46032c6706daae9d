use std::error::Error;

use monthly_agenda::{Calendar, Event, MonthlyReportGenerator};
use monthly_agenda::settings::{DEMO_EVENTS, DEMO_MONTH, DEMO_YEAR};


fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut calendar = Calendar::in_memory();
    for (name, year, month, day) in DEMO_EVENTS {
        calendar.add(Event::from_ymd(*name, *year, *month, *day)?);
    }

    let report = match MonthlyReportGenerator::new(&calendar).generate_report(DEMO_MONTH, DEMO_YEAR) {
        Ok(report) => report,
        Err(err) => {
            log::error!("Unable to generate the report: {}", err);
            return Err(err.into());
        }
    };
    println!("{}", report);

    Ok(())
}
