use crate::models::{CompanyId, Schedule, ScheduleDay, ScheduleId};
use chrono::Weekday;
use std::collections::{HashMap, HashSet};

/// Read-only snapshot of a company's schedule templates and the weekdays
/// each applies on. Admins edit templates elsewhere; the core only reads.
#[derive(Debug, Clone, Default)]
pub struct ScheduleCatalog {
    schedules: HashMap<ScheduleId, Schedule>,
    days: HashMap<ScheduleId, HashSet<Weekday>>,
}

impl ScheduleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a template. Weekday bindings are kept separately
    /// via [`set_days`](Self::set_days).
    pub fn insert(&mut self, schedule: Schedule) {
        self.schedules.insert(schedule.id, schedule);
    }

    /// Replace the set of weekdays `schedule_id` applies on.
    pub fn set_days(&mut self, schedule_id: ScheduleId, days: &[Weekday]) {
        self.days.insert(schedule_id, days.iter().copied().collect());
    }

    /// Add one weekday binding, the shape `ScheduleDay` join rows arrive in.
    pub fn insert_day(&mut self, row: ScheduleDay) {
        self.days
            .entry(row.schedule_id)
            .or_default()
            .insert(row.day_of_week);
    }

    pub fn get(&self, schedule_id: ScheduleId) -> Option<&Schedule> {
        self.schedules.get(&schedule_id)
    }

    /// Whether `schedule_id` lists `day` among its weekdays.
    /// A template with no weekday rows applies on no day.
    pub fn applies_on(&self, schedule_id: ScheduleId, day: Weekday) -> bool {
        self.days
            .get(&schedule_id)
            .is_some_and(|set| set.contains(&day))
    }

    /// All templates owned by one company, inactive ones included.
    pub fn company_schedules(&self, company_id: CompanyId) -> Vec<&Schedule> {
        let mut out: Vec<&Schedule> = self
            .schedules
            .values()
            .filter(|s| s.company_id == company_id)
            .collect();
        out.sort_by_key(|s| s.id);
        out
    }
}
