use super::schedule::Schedule;
use super::{EmployeeId, ScheduleId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Recurring assignment: a standing binding of an employee to a schedule
/// template, valid from `start_date` until `end_date` (or indefinitely when
/// `end_date` is `None`). Rows are soft-deactivated or end-dated, never
/// hard-deleted; an inactive row simply stops matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSchedule {
    pub id: i64,
    pub employee_id: EmployeeId,
    pub schedule_id: ScheduleId,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl EmployeeSchedule {
    /// True when this assignment is in force on `date`.
    /// A row violating `end_date >= start_date` covers nothing.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.active && self.start_date <= date && self.end_date.is_none_or(|end| end >= date)
    }
}

/// The joined shape the recurring-assignment read operation returns:
/// an assignment together with its resolved schedule template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedSchedule {
    pub assignment: EmployeeSchedule,
    pub schedule: Schedule,
}
