//! Time-entry aggregation: one employee's raw clock events in, worked
//! intervals and a total out.
//!
//! Input order is never trusted; entries are sorted by `(timestamp, id)`
//! first, which makes the result identical for every permutation of the
//! same batch, duplicate timestamps included. Callers partition by
//! employee before calling; the aggregator does not group.

pub mod policy;

pub use policy::{InRecovery, LastInWins, OutRecovery, RecoveryPolicy, RejectMalformed};

use crate::errors::{CoreError, CoreResult, MalformedKind};
use crate::models::{EntryKind, TimeEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One contiguous worked span, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl WorkInterval {
    /// Duration in whole seconds, clamped at zero for corrupt spans.
    pub fn seconds(&self) -> i64 {
        (self.end - self.start).num_seconds().max(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Sum of all closed intervals; an open shift contributes nothing.
    pub total_seconds: i64,
    pub intervals: Vec<WorkInterval>,
    /// Start of a shift still open at the end of the batch ("ongoing").
    pub open_interval_start: Option<DateTime<Utc>>,
    /// Count of malformed entries encountered, an observability signal
    /// rather than a failure channel.
    pub malformed: u32,
}

/// Aggregate with the default [`LastInWins`] policy, which never rejects.
pub fn aggregate(entries: &[TimeEntry]) -> Aggregation {
    match aggregate_with(&LastInWins, entries) {
        Ok(agg) => agg,
        // LastInWins never returns RejectBatch from any hook.
        Err(_) => unreachable!("LastInWins rejects no batch"),
    }
}

/// Aggregate under an explicit recovery policy. Only policies that answer
/// `RejectBatch` can make this fail.
pub fn aggregate_with(
    policy: &dyn RecoveryPolicy,
    entries: &[TimeEntry],
) -> CoreResult<Aggregation> {
    let mut sorted: Vec<&TimeEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.sort_key());

    let mut intervals: Vec<WorkInterval> = Vec::new();
    let mut total_seconds: i64 = 0;
    let mut malformed: u32 = 0;
    let mut open_start: Option<DateTime<Utc>> = None;

    for entry in sorted {
        match entry.kind {
            EntryKind::In => match open_start {
                None => open_start = Some(entry.timestamp),
                Some(_) => {
                    malformed += 1;
                    match policy.on_duplicate_in() {
                        InRecovery::ReplaceStart => open_start = Some(entry.timestamp),
                        InRecovery::KeepFirst => {}
                        InRecovery::RejectBatch => {
                            return Err(CoreError::BatchRejected {
                                kind: MalformedKind::DuplicateIn,
                                at: entry.timestamp,
                            });
                        }
                    }
                }
            },
            EntryKind::Out => match open_start.take() {
                Some(start) => {
                    if entry.timestamp < start {
                        malformed += 1;
                        if policy.on_negative_interval() == OutRecovery::RejectBatch {
                            return Err(CoreError::BatchRejected {
                                kind: MalformedKind::NegativeInterval,
                                at: entry.timestamp,
                            });
                        }
                    }
                    let interval = WorkInterval {
                        start,
                        end: entry.timestamp,
                    };
                    total_seconds += interval.seconds();
                    intervals.push(interval);
                }
                None => {
                    malformed += 1;
                    match policy.on_orphan_out() {
                        OutRecovery::Ignore => {}
                        OutRecovery::RejectBatch => {
                            return Err(CoreError::BatchRejected {
                                kind: MalformedKind::OrphanOut,
                                at: entry.timestamp,
                            });
                        }
                    }
                }
            },
            // Breaks do not open or close intervals and subtract no time
            // for this metric.
            EntryKind::Break | EntryKind::Resume => {}
        }
    }

    debug!(
        "aggregated {} entries: {} intervals, {}s worked, {} malformed, open shift: {}",
        entries.len(),
        intervals.len(),
        total_seconds,
        malformed,
        open_start.is_some()
    );

    Ok(Aggregation {
        total_seconds,
        intervals,
        open_interval_start: open_start,
        malformed,
    })
}
