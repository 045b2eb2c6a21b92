//! Week utilities: calendar-week alignment and the data model's fixed
//! weekday numbering.
//!
//! The surrounding system historically computed "start of week" two
//! different ways (Sunday-aligned for weekly-override matching,
//! Monday-aligned for dashboard totals). The conventions are deliberately
//! not unified here: `WeekStart` carries no `Default` and must be passed
//! explicitly at every call site, and a single report must use one value
//! for every boundary it computes.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Which weekday a calendar week begins on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekStart {
    Sunday,
    Monday,
}

impl WeekStart {
    /// First day of the week containing `date`.
    pub fn start_of(self, date: NaiveDate) -> NaiveDate {
        let back = match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        };
        // back <= 6; underflow is only possible in the calendar's first week
        date.checked_sub_days(Days::new(back as u64)).unwrap_or(date)
    }

    /// Last day of the week containing `date` (start + 6).
    pub fn end_of(self, date: NaiveDate) -> NaiveDate {
        self.start_of(date)
            .checked_add_days(Days::new(6))
            .unwrap_or(date)
    }
}

/// Data-model weekday numbering: 0 = Sunday .. 6 = Saturday, independent
/// of any `WeekStart` convention.
pub fn day_number(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

/// Inverse of [`day_number`]; `None` for anything outside 0..=6.
pub fn weekday_from_number(n: u8) -> Option<Weekday> {
    match n {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
