//! worktime-core library root.
//!
//! Pure computation core for a workforce time-tracking system: effective
//! work-schedule resolution (weekly override > recurring assignment >
//! unscheduled) and clock-event aggregation into worked-hours totals,
//! plus multi-employee report composition. Persistence, transport and UI
//! live outside; the core reads snapshots through the traits in
//! [`store`] and mutates nothing.

pub mod aggregator;
pub mod errors;
pub mod models;
pub mod resolver;
pub mod stats;
pub mod store;
pub mod utils;

pub use aggregator::{
    Aggregation, InRecovery, LastInWins, OutRecovery, RecoveryPolicy, RejectMalformed,
    WorkInterval, aggregate, aggregate_with,
};
pub use errors::{CoreError, CoreResult, MalformedKind};
pub use models::{
    AssignedSchedule, CompanyId, EffectiveSchedule, EmployeeId, EmployeeSchedule, EntryId,
    EntryKind, Schedule, ScheduleDay, ScheduleId, TimeEntry, WeeklySchedule,
};
pub use resolver::{EffectiveScheduleResolver, resolve_effective_schedule};
pub use stats::{
    EmployeeHours, ReportFailure, ReportPeriod, StatsReport, StatsReporter, needs_checkout,
};
pub use store::{MemoryStore, ScheduleCatalog, ScheduleStore, TimeEntryStore};
pub use utils::week::WeekStart;
