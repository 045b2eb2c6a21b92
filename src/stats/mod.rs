//! Multi-employee reporting on top of the aggregator.
//!
//! A report runs one aggregation per employee over the period window and
//! sums the totals. A store failure for one employee never aborts the
//! batch: it is recorded in `failures` and the other employees still
//! report.

pub mod period;

pub use period::ReportPeriod;

use crate::aggregator::{Aggregation, aggregate};
use crate::errors::CoreResult;
use crate::models::{EmployeeId, TimeEntry};
use crate::store::TimeEntryStore;
use crate::utils::week::WeekStart;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeHours {
    pub employee_id: EmployeeId,
    pub totals: Aggregation,
}

/// One isolated per-employee fetch failure inside a batch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFailure {
    pub employee_id: EmployeeId,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub week_start: WeekStart,
    pub rows: Vec<EmployeeHours>,
    pub total_seconds: i64,
    pub failures: Vec<ReportFailure>,
}

pub struct StatsReporter<'a, S: TimeEntryStore> {
    store: &'a S,
    week_start: WeekStart,
}

impl<'a, S: TimeEntryStore> StatsReporter<'a, S> {
    /// `week_start` governs every boundary this reporter computes; the
    /// surrounding system historically used [`WeekStart::Monday`] for
    /// dashboard totals.
    pub fn new(store: &'a S, week_start: WeekStart) -> Self {
        Self { store, week_start }
    }

    /// Worked-hours totals for the given employees over `period`.
    /// Fails only on an invalid period; per-employee store failures are
    /// isolated into `failures`.
    pub fn report(
        &self,
        employee_ids: &[EmployeeId],
        period: ReportPeriod,
    ) -> CoreResult<StatsReport> {
        let (from, to) = period.date_bounds(self.week_start)?;
        let (ts_from, ts_to) = period.timestamp_bounds(self.week_start)?;

        let mut rows = Vec::with_capacity(employee_ids.len());
        let mut failures = Vec::new();
        let mut total_seconds: i64 = 0;

        for &employee_id in employee_ids {
            match self.store.entries_between(employee_id, ts_from, ts_to) {
                Ok(entries) => {
                    let totals = aggregate(&entries);
                    total_seconds += totals.total_seconds;
                    rows.push(EmployeeHours {
                        employee_id,
                        totals,
                    });
                }
                Err(err) => {
                    warn!(
                        "report {}..{}: entry fetch failed for employee {}: {}",
                        from, to, employee_id, err
                    );
                    failures.push(ReportFailure {
                        employee_id,
                        error: err.to_string(),
                    });
                }
            }
        }

        Ok(StatsReport {
            from,
            to,
            week_start: self.week_start,
            rows,
            total_seconds,
            failures,
        })
    }
}

/// Employees with at least one IN and no OUT in the window: the set of
/// clock-ins minus the set of clock-outs. Output is sorted ascending so
/// repeated calls compare equal.
pub fn needs_checkout(
    entries_by_employee: &HashMap<EmployeeId, Vec<TimeEntry>>,
) -> Vec<EmployeeId> {
    let mut clocked_in: HashSet<EmployeeId> = HashSet::new();
    let mut clocked_out: HashSet<EmployeeId> = HashSet::new();

    for (&employee_id, entries) in entries_by_employee {
        for entry in entries {
            if entry.kind.is_in() {
                clocked_in.insert(employee_id);
            } else if entry.kind.is_out() {
                clocked_out.insert(employee_id);
            }
        }
    }

    let mut flagged: Vec<EmployeeId> = clocked_in.difference(&clocked_out).copied().collect();
    flagged.sort_unstable();
    flagged
}
