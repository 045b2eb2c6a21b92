//! Effective-schedule resolution.
//!
//! The precedence chain is an ordered list of stages sharing the
//! [`ResolveStage`] trait: weekly override first, recurring assignment
//! second. The first stage to return [`Resolution::Decided`] settles the
//! day; when every stage passes, the employee is simply unscheduled.
//! Resolution is a pure function of the store snapshot: same inputs, same
//! answer.

pub mod recurring;
pub mod stage;
pub mod weekly;

pub use recurring::RecurringAssignmentStage;
pub use stage::{Resolution, ResolveContext, ResolveStage};
pub use weekly::WeeklyOverrideStage;

use crate::errors::CoreResult;
use crate::models::{CompanyId, EffectiveSchedule, EmployeeId};
use crate::store::ScheduleStore;
use crate::utils::week::WeekStart;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

pub struct EffectiveScheduleResolver {
    week_start: WeekStart,
    stages: Vec<Box<dyn ResolveStage>>,
}

impl EffectiveScheduleResolver {
    /// Resolver with the standard chain: weekly override, then recurring
    /// assignment. `week_start` aligns override matching; the surrounding
    /// system historically used [`WeekStart::Sunday`] here.
    pub fn new(week_start: WeekStart) -> Self {
        Self::with_stages(
            week_start,
            vec![
                Box::new(WeeklyOverrideStage),
                Box::new(RecurringAssignmentStage),
            ],
        )
    }

    /// Resolver with a custom stage list, consulted in the order given.
    pub fn with_stages(week_start: WeekStart, stages: Vec<Box<dyn ResolveStage>>) -> Self {
        Self { week_start, stages }
    }

    pub fn resolve(
        &self,
        store: &dyn ScheduleStore,
        employee_id: EmployeeId,
        company_id: CompanyId,
        date: NaiveDate,
    ) -> CoreResult<EffectiveSchedule> {
        let ctx = ResolveContext {
            employee_id,
            company_id,
            date,
            day_of_week: date.weekday(),
            week_start: self.week_start.start_of(date),
        };

        for stage in &self.stages {
            if let Resolution::Decided(answer) = stage.try_resolve(store, &ctx)? {
                return Ok(answer);
            }
        }

        debug!("employee {} unscheduled on {}", employee_id, date);
        Ok(EffectiveSchedule::Unscheduled)
    }
}

/// One-shot resolution with the standard stage chain.
pub fn resolve_effective_schedule(
    store: &dyn ScheduleStore,
    employee_id: EmployeeId,
    company_id: CompanyId,
    date: NaiveDate,
    week_start: WeekStart,
) -> CoreResult<EffectiveSchedule> {
    EffectiveScheduleResolver::new(week_start).resolve(store, employee_id, company_id, date)
}
