use super::stage::{Resolution, ResolveContext, ResolveStage};
use crate::errors::CoreResult;
use crate::models::EffectiveSchedule;
use crate::store::ScheduleStore;
use tracing::debug;

/// Second stage: standing recurring assignments.
///
/// Among the assignments in force for the day, the most recently created
/// one wins; exact `created_at` ties break on the higher assignment id.
/// The selection is done here rather than trusting the store's ordering.
pub struct RecurringAssignmentStage;

impl ResolveStage for RecurringAssignmentStage {
    fn try_resolve(
        &self,
        store: &dyn ScheduleStore,
        ctx: &ResolveContext,
    ) -> CoreResult<Resolution> {
        let matches = store.recurring_assignments(
            ctx.employee_id,
            ctx.company_id,
            ctx.day_of_week,
            ctx.date,
        )?;

        let best = matches
            .into_iter()
            .max_by_key(|m| (m.assignment.created_at, m.assignment.id));

        match best {
            Some(m) => {
                debug!(
                    "recurring assignment {}: schedule {} for employee {} on {}",
                    m.assignment.id, m.schedule.id, ctx.employee_id, ctx.date
                );
                Ok(Resolution::Decided(EffectiveSchedule::Scheduled(m.schedule)))
            }
            None => Ok(Resolution::Pass),
        }
    }
}
