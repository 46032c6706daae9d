//! Values used by the `monthly-report` binary

/// The month the demo report is generated for
pub const DEMO_MONTH: u32 = 3;
/// The year the demo report is generated for
pub const DEMO_YEAR: i32 = 2023;

/// Events added to the demo calendar, as `(name, year, month, day)`
pub const DEMO_EVENTS: &[(&str, i32, u32, u32)] = &[
    ("Meeting 1", 2023, 3, 15),
    ("Meeting 2", 2023, 3, 22),
];
