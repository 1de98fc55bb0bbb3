//! Utility functions

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::SECONDS_PER_DAY;

/// `date` at 00:00:00.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// `date` at 23:59:59.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::seconds(SECONDS_PER_DAY - 1)
}

/// Widens a date range to `[from 00:00:00, to 23:59:59]`, both ends inclusive.
pub fn day_bounds(from: NaiveDate, to: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    (start_of_day(from), end_of_day(to))
}

/// Name part with every whitespace character removed (`" Mary Ann "` -> `"MaryAnn"`).
pub fn compact_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}
