//! Snapshot row types consumed and produced by the core.
//! The core owns no persistent state; every struct here is a plain value
//! fetched by the surrounding system and handed in by reference or by move.

pub mod assignment;
pub mod effective;
pub mod schedule;
pub mod time_entry;
pub mod weekly;

pub use assignment::{AssignedSchedule, EmployeeSchedule};
pub use effective::EffectiveSchedule;
pub use schedule::{Schedule, ScheduleDay};
pub use time_entry::{EntryKind, TimeEntry};
pub use weekly::WeeklySchedule;

pub type ScheduleId = i64;
pub type EmployeeId = i64;
pub type CompanyId = i64;
pub type EntryId = i64;
