use super::schedule::Schedule;
use serde::{Deserialize, Serialize};

/// The single answer of schedule resolution for one (employee, date):
/// an explicit rest day, one schedule template, or nothing at all.
/// `Unscheduled` is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "schedule", rename_all = "lowercase")]
pub enum EffectiveSchedule {
    Rest,
    Scheduled(Schedule),
    Unscheduled,
}

impl EffectiveSchedule {
    pub fn is_rest(&self) -> bool {
        matches!(self, EffectiveSchedule::Rest)
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, EffectiveSchedule::Scheduled(_))
    }

    pub fn is_unscheduled(&self) -> bool {
        matches!(self, EffectiveSchedule::Unscheduled)
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            EffectiveSchedule::Scheduled(s) => Some(s),
            _ => None,
        }
    }
}
