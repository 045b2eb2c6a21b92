#![allow(dead_code)]
use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use worktime_core::models::{
    CompanyId, EmployeeId, EmployeeSchedule, EntryId, EntryKind, Schedule, ScheduleId, TimeEntry,
    WeeklySchedule,
};
use worktime_core::store::{MemoryStore, ScheduleCatalog};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("test time")
}

/// "YYYY-MM-DD HH:MM" as a UTC timestamp.
pub fn ts(s: &str) -> DateTime<Utc> {
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .expect("test timestamp")
        .and_utc()
}

pub fn schedule(id: ScheduleId, company_id: CompanyId, name: &str) -> Schedule {
    Schedule {
        id,
        company_id,
        name: name.to_string(),
        start_time: time("09:00"),
        end_time: time("17:00"),
        active: true,
    }
}

pub fn entry(id: EntryId, employee_id: EmployeeId, kind: EntryKind, at: &str) -> TimeEntry {
    TimeEntry {
        id,
        employee_id,
        company_id: 1,
        kind,
        timestamp: ts(at),
        source: "clock".to_string(),
        created_by_employee: true,
    }
}

pub fn assignment(
    id: i64,
    employee_id: EmployeeId,
    schedule_id: ScheduleId,
    start: &str,
    created: &str,
) -> EmployeeSchedule {
    EmployeeSchedule {
        id,
        employee_id,
        schedule_id,
        start_date: date(start),
        end_date: None,
        active: true,
        created_at: ts(created),
    }
}

pub fn weekly_override(
    employee_id: EmployeeId,
    week_start: &str,
    day_of_week: Weekday,
    schedule_id: Option<ScheduleId>,
) -> WeeklySchedule {
    WeeklySchedule {
        employee_id,
        week_start: date(week_start),
        day_of_week,
        schedule_id,
    }
}

pub const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Store with schedule 1 ("Office") for company 1 applying Mon..Fri.
pub fn office_store() -> MemoryStore {
    let mut catalog = ScheduleCatalog::new();
    catalog.insert(schedule(1, 1, "Office"));
    catalog.set_days(1, &WEEKDAYS);
    MemoryStore::new(catalog)
}
