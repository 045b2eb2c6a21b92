use super::catalog::ScheduleCatalog;
use super::{ScheduleStore, TimeEntryStore};
use crate::errors::CoreResult;
use crate::models::{
    AssignedSchedule, CompanyId, EmployeeId, EmployeeSchedule, Schedule, ScheduleId, TimeEntry,
    WeeklySchedule,
};
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use std::cmp::Reverse;

/// In-process store over plain row vectors. Backs the test suite and
/// snapshot-style embedding; also the reference implementation of the
/// filter contract the traits document.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub catalog: ScheduleCatalog,
    assignments: Vec<EmployeeSchedule>,
    overrides: Vec<WeeklySchedule>,
    entries: Vec<TimeEntry>,
}

impl MemoryStore {
    pub fn new(catalog: ScheduleCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn push_assignment(&mut self, assignment: EmployeeSchedule) {
        self.assignments.push(assignment);
    }

    /// Insert an override, replacing any existing row for the same
    /// `(employee_id, week_start, day_of_week)` (the uniqueness rule).
    pub fn push_override(&mut self, row: WeeklySchedule) {
        self.overrides.retain(|o| {
            !(o.employee_id == row.employee_id
                && o.week_start == row.week_start
                && o.day_of_week == row.day_of_week)
        });
        self.overrides.push(row);
    }

    pub fn push_entry(&mut self, entry: TimeEntry) {
        self.entries.push(entry);
    }
}

impl ScheduleStore for MemoryStore {
    fn weekly_override(
        &self,
        employee_id: EmployeeId,
        week_start: NaiveDate,
        day_of_week: Weekday,
    ) -> CoreResult<Option<WeeklySchedule>> {
        Ok(self
            .overrides
            .iter()
            .find(|o| {
                o.employee_id == employee_id
                    && o.week_start == week_start
                    && o.day_of_week == day_of_week
            })
            .cloned())
    }

    fn recurring_assignments(
        &self,
        employee_id: EmployeeId,
        company_id: CompanyId,
        day_of_week: Weekday,
        date: NaiveDate,
    ) -> CoreResult<Vec<AssignedSchedule>> {
        let mut rows: Vec<AssignedSchedule> = self
            .assignments
            .iter()
            .filter(|a| a.employee_id == employee_id && a.covers(date))
            .filter_map(|a| {
                let schedule = self.catalog.get(a.schedule_id)?;
                if schedule.usable_by(company_id) && self.catalog.applies_on(schedule.id, day_of_week)
                {
                    Some(AssignedSchedule {
                        assignment: a.clone(),
                        schedule: schedule.clone(),
                    })
                } else {
                    None
                }
            })
            .collect();

        rows.sort_by_key(|r| Reverse((r.assignment.created_at, r.assignment.id)));
        Ok(rows)
    }

    fn schedule(&self, schedule_id: ScheduleId) -> CoreResult<Option<Schedule>> {
        Ok(self.catalog.get(schedule_id).cloned())
    }
}

impl TimeEntryStore for MemoryStore {
    fn entries_between(
        &self,
        employee_id: EmployeeId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> CoreResult<Vec<TimeEntry>> {
        // Insertion order is preserved on purpose: callers must not rely
        // on the store sorting for them.
        Ok(self
            .entries
            .iter()
            .filter(|e| e.employee_id == employee_id && e.timestamp >= from && e.timestamp < to)
            .cloned()
            .collect())
    }
}
