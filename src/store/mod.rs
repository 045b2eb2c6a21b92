//! Read-only store seams.
//!
//! Persistence is an external collaborator: the surrounding system fetches
//! rows however it likes and exposes them through these two traits. The
//! core never mutates anything behind them. Implementations report backend
//! failures as [`CoreError::Store`](crate::errors::CoreError); absent rows
//! are `Ok(None)` / empty vectors, never errors.

pub mod catalog;
pub mod memory;

pub use catalog::ScheduleCatalog;
pub use memory::MemoryStore;

use crate::errors::CoreResult;
use crate::models::{
    AssignedSchedule, CompanyId, EmployeeId, Schedule, ScheduleId, TimeEntry, WeeklySchedule,
};
use chrono::{DateTime, NaiveDate, Utc, Weekday};

/// Read operations backing schedule resolution.
pub trait ScheduleStore {
    /// The weekly-override row for `(employee_id, week_start, day_of_week)`,
    /// if one exists.
    fn weekly_override(
        &self,
        employee_id: EmployeeId,
        week_start: NaiveDate,
        day_of_week: Weekday,
    ) -> CoreResult<Option<WeeklySchedule>>;

    /// Recurring assignments in force for the employee on `date`,
    /// pre-filtered: assignment active and covering `date`, schedule active,
    /// owned by `company_id` and listing `day_of_week`. Ordered newest
    /// `created_at` first, each joined with its schedule.
    fn recurring_assignments(
        &self,
        employee_id: EmployeeId,
        company_id: CompanyId,
        day_of_week: Weekday,
        date: NaiveDate,
    ) -> CoreResult<Vec<AssignedSchedule>>;

    /// Look up a schedule template by id.
    fn schedule(&self, schedule_id: ScheduleId) -> CoreResult<Option<Schedule>>;
}

/// Read operations backing aggregation and reporting.
pub trait TimeEntryStore {
    /// Clock events for one employee with `from <= timestamp < to`.
    /// No ordering is guaranteed.
    fn entries_between(
        &self,
        employee_id: EmployeeId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> CoreResult<Vec<TimeEntry>>;
}
