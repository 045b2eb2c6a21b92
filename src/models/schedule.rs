use super::{CompanyId, ScheduleId};
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A named, reusable work-time template owned by a company.
/// `start_time`/`end_time` are times-of-day, never tied to a specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub company_id: CompanyId,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub active: bool,
}

impl Schedule {
    /// True when this template may be applied on behalf of `company_id`:
    /// it must belong to that company and still be active.
    pub fn usable_by(&self, company_id: CompanyId) -> bool {
        self.active && self.company_id == company_id
    }
}

/// Join row binding a schedule template to one weekday it applies on.
/// A schedule applies only on its listed weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub schedule_id: ScheduleId,
    pub day_of_week: Weekday,
}
