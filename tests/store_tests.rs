use chrono::Weekday;

mod common;
use common::{assignment, date, entry, office_store, schedule, ts};

use worktime_core::models::{EntryKind, ScheduleDay};
use worktime_core::store::{ScheduleCatalog, ScheduleStore, TimeEntryStore};

#[test]
fn test_catalog_weekday_membership() {
    let mut catalog = ScheduleCatalog::new();
    catalog.insert(schedule(1, 1, "Office"));
    catalog.set_days(1, &[Weekday::Mon, Weekday::Wed]);

    assert!(catalog.applies_on(1, Weekday::Mon));
    assert!(!catalog.applies_on(1, Weekday::Tue));
    assert!(
        !catalog.applies_on(2, Weekday::Mon),
        "an unknown schedule applies on no day"
    );
}

#[test]
fn test_catalog_without_day_rows_applies_nowhere() {
    let mut catalog = ScheduleCatalog::new();
    catalog.insert(schedule(1, 1, "Office"));

    for n in [Weekday::Mon, Weekday::Sat, Weekday::Sun] {
        assert!(!catalog.applies_on(1, n));
    }
}

#[test]
fn test_catalog_accepts_join_rows() {
    let mut catalog = ScheduleCatalog::new();
    catalog.insert(schedule(1, 1, "Office"));
    catalog.insert_day(ScheduleDay {
        schedule_id: 1,
        day_of_week: Weekday::Fri,
    });

    assert!(catalog.applies_on(1, Weekday::Fri));
    assert!(!catalog.applies_on(1, Weekday::Mon));
}

#[test]
fn test_company_schedules_filters_by_owner() {
    let mut catalog = ScheduleCatalog::new();
    catalog.insert(schedule(1, 1, "Office"));
    catalog.insert(schedule(2, 1, "Evening"));
    catalog.insert(schedule(3, 2, "OtherCo"));

    let ids: Vec<i64> = catalog.company_schedules(1).iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2], "only company 1 templates, ordered by id");
}

#[test]
fn test_recurring_assignments_come_newest_first() {
    let mut store = office_store();
    store.push_assignment(assignment(10, 1, 1, "2025-01-01", "2025-01-01 08:00"));
    store.push_assignment(assignment(11, 1, 1, "2025-01-01", "2025-03-01 08:00"));
    store.push_assignment(assignment(12, 1, 1, "2025-01-01", "2025-02-01 08:00"));

    let rows = store
        .recurring_assignments(1, 1, Weekday::Wed, date("2025-09-10"))
        .expect("query");
    let ids: Vec<i64> = rows.iter().map(|r| r.assignment.id).collect();
    assert_eq!(ids, vec![11, 12, 10], "descending created_at order");
}

#[test]
fn test_weekly_override_unique_per_slot() {
    let mut store = office_store();
    store.push_override(common::weekly_override(1, "2025-09-07", Weekday::Wed, None));
    // Same slot again: the later row replaces the earlier one.
    store.push_override(common::weekly_override(
        1,
        "2025-09-07",
        Weekday::Wed,
        Some(1),
    ));

    let row = store
        .weekly_override(1, date("2025-09-07"), Weekday::Wed)
        .expect("query")
        .expect("row present");
    assert_eq!(row.schedule_id, Some(1));
}

#[test]
fn test_entries_between_is_half_open() {
    let mut store = office_store();
    store.push_entry(entry(1, 1, EntryKind::In, "2025-09-10 00:00"));
    store.push_entry(entry(2, 1, EntryKind::Out, "2025-09-10 23:59"));
    store.push_entry(entry(3, 1, EntryKind::In, "2025-09-11 00:00"));
    store.push_entry(entry(4, 2, EntryKind::In, "2025-09-10 09:00"));

    let rows = store
        .entries_between(1, ts("2025-09-10 00:00"), ts("2025-09-11 00:00"))
        .expect("query");
    let ids: Vec<i64> = rows.iter().map(|e| e.id).collect();
    assert_eq!(
        ids,
        vec![1, 2],
        "from is inclusive, to is exclusive, other employees excluded"
    );
}
