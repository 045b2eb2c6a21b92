use crate::errors::CoreResult;
use crate::models::{CompanyId, EffectiveSchedule, EmployeeId};
use crate::store::ScheduleStore;
use chrono::{NaiveDate, Weekday};

/// Everything a stage needs to know about the resolution request.
/// `week_start` is already aligned with the resolver's week convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveContext {
    pub employee_id: EmployeeId,
    pub company_id: CompanyId,
    pub date: NaiveDate,
    pub day_of_week: Weekday,
    pub week_start: NaiveDate,
}

/// Outcome of consulting one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Definitive answer; no later stage is consulted.
    Decided(EffectiveSchedule),
    /// This stage has nothing to say; defer to the next one.
    Pass,
}

/// One step of the precedence chain. Stages are consulted strictly in
/// priority order; the first `Decided` wins.
pub trait ResolveStage {
    fn try_resolve(
        &self,
        store: &dyn ScheduleStore,
        ctx: &ResolveContext,
    ) -> CoreResult<Resolution>;
}
