use crate::errors::{CoreError, CoreResult};
use crate::utils::week::WeekStart;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A reporting window. Week boundaries depend on the caller's explicit
/// [`WeekStart`]; one convention must be used for every boundary of a
/// single report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportPeriod {
    /// One calendar day.
    Day(NaiveDate),
    /// The calendar week containing the given date.
    Week(NaiveDate),
    /// One calendar month.
    Month { year: i32, month: u32 },
    /// An explicit inclusive date range.
    Range { from: NaiveDate, to: NaiveDate },
}

impl ReportPeriod {
    /// Inclusive first and last date of the window.
    pub fn date_bounds(&self, week_start: WeekStart) -> CoreResult<(NaiveDate, NaiveDate)> {
        match *self {
            ReportPeriod::Day(d) => Ok((d, d)),
            ReportPeriod::Week(d) => Ok((week_start.start_of(d), week_start.end_of(d))),
            ReportPeriod::Month { year, month } => {
                let last = month_last_day(year, month)
                    .ok_or_else(|| CoreError::InvalidPeriod(format!("{}-{:02}", year, month)))?;
                let from = NaiveDate::from_ymd_opt(year, month, 1)
                    .ok_or_else(|| CoreError::InvalidPeriod(format!("{}-{:02}", year, month)))?;
                let to = NaiveDate::from_ymd_opt(year, month, last)
                    .ok_or_else(|| CoreError::InvalidPeriod(format!("{}-{:02}", year, month)))?;
                Ok((from, to))
            }
            ReportPeriod::Range { from, to } => {
                if to < from {
                    return Err(CoreError::InvalidPeriod(format!(
                        "range end {} before start {}",
                        to, from
                    )));
                }
                Ok((from, to))
            }
        }
    }

    /// Half-open UTC timestamp window `[from 00:00, day-after-to 00:00)`
    /// covering the same dates, ready for a time-entry fetch.
    pub fn timestamp_bounds(
        &self,
        week_start: WeekStart,
    ) -> CoreResult<(DateTime<Utc>, DateTime<Utc>)> {
        let (from, to) = self.date_bounds(week_start)?;
        let end = to
            .checked_add_days(Days::new(1))
            .ok_or_else(|| CoreError::InvalidPeriod(format!("range end {} overflows", to)))?;
        Ok((
            from.and_hms_opt(0, 0, 0)
                .expect("midnight is always a valid time")
                .and_utc(),
            end.and_hms_opt(0, 0, 0)
                .expect("midnight is always a valid time")
                .and_utc(),
        ))
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
