use super::stage::{Resolution, ResolveContext, ResolveStage};
use crate::errors::CoreResult;
use crate::models::EffectiveSchedule;
use crate::store::ScheduleStore;
use tracing::debug;

/// Highest-precedence stage: the explicit per-week decision.
///
/// Precedence is by decision, not by outcome: once an override row exists
/// for the day it consumes the resolution even when the schedule it points
/// at turns out to be missing, inactive or foreign — the day then resolves
/// to `Unscheduled` instead of falling through to the recurring stage.
pub struct WeeklyOverrideStage;

impl ResolveStage for WeeklyOverrideStage {
    fn try_resolve(
        &self,
        store: &dyn ScheduleStore,
        ctx: &ResolveContext,
    ) -> CoreResult<Resolution> {
        let Some(row) = store.weekly_override(ctx.employee_id, ctx.week_start, ctx.day_of_week)?
        else {
            return Ok(Resolution::Pass);
        };

        let Some(schedule_id) = row.schedule_id else {
            debug!(
                "weekly override: rest day for employee {} on {}",
                ctx.employee_id, ctx.date
            );
            return Ok(Resolution::Decided(EffectiveSchedule::Rest));
        };

        match store.schedule(schedule_id)? {
            Some(schedule) if schedule.usable_by(ctx.company_id) => {
                debug!(
                    "weekly override: schedule {} for employee {} on {}",
                    schedule.id, ctx.employee_id, ctx.date
                );
                Ok(Resolution::Decided(EffectiveSchedule::Scheduled(schedule)))
            }
            _ => {
                debug!(
                    "weekly override for employee {} on {} points at unusable schedule {}",
                    ctx.employee_id, ctx.date, schedule_id
                );
                Ok(Resolution::Decided(EffectiveSchedule::Unscheduled))
            }
        }
    }
}
