use super::{EmployeeId, ScheduleId};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Weekly override: an explicit, per-employee decision for one weekday of
/// one specific calendar week. Unique per `(employee_id, week_start,
/// day_of_week)`. `schedule_id = None` declares an explicit rest day, which
/// outranks any recurring assignment for that date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub employee_id: EmployeeId,
    pub week_start: NaiveDate,
    pub day_of_week: Weekday,
    pub schedule_id: Option<ScheduleId>,
}

impl WeeklySchedule {
    pub fn is_rest_day(&self) -> bool {
        self.schedule_id.is_none()
    }
}
