//! Malformed-entry recovery policies.
//!
//! The discard-previous-IN / ignore-orphan-OUT behavior is observed
//! practice, not a documented business rule, so it lives behind a trait:
//! the state machine asks the policy what to do at each malformed entry
//! and a stricter rule can be swapped in without touching the machine.

/// What to do when an IN arrives while a shift is already open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InRecovery {
    /// Discard the previous open start and start over (last-IN-wins).
    ReplaceStart,
    /// Keep the first open start and drop the new IN.
    KeepFirst,
    /// Fail the whole batch.
    RejectBatch,
}

/// What to do when an OUT arrives with no open shift, or when an interval
/// would come out negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutRecovery {
    /// Drop the entry (orphan OUT) or clamp the duration to zero
    /// (negative interval) and keep going.
    Ignore,
    /// Fail the whole batch.
    RejectBatch,
}

pub trait RecoveryPolicy {
    fn on_duplicate_in(&self) -> InRecovery;
    fn on_orphan_out(&self) -> OutRecovery;
    fn on_negative_interval(&self) -> OutRecovery;
}

/// The observed production behavior: discard the stale open start, ignore
/// orphan OUTs, clamp corrupt durations to zero. Never rejects, which is
/// what makes plain [`aggregate`](crate::aggregator::aggregate) infallible.
pub struct LastInWins;

impl RecoveryPolicy for LastInWins {
    fn on_duplicate_in(&self) -> InRecovery {
        InRecovery::ReplaceStart
    }

    fn on_orphan_out(&self) -> OutRecovery {
        OutRecovery::Ignore
    }

    fn on_negative_interval(&self) -> OutRecovery {
        OutRecovery::Ignore
    }
}

/// Strict policy: the first malformed entry fails the batch with
/// [`CoreError::BatchRejected`](crate::errors::CoreError), carrying the
/// malformation kind and the offending timestamp.
pub struct RejectMalformed;

impl RecoveryPolicy for RejectMalformed {
    fn on_duplicate_in(&self) -> InRecovery {
        InRecovery::RejectBatch
    }

    fn on_orphan_out(&self) -> OutRecovery {
        OutRecovery::RejectBatch
    }

    fn on_negative_interval(&self) -> OutRecovery {
        OutRecovery::RejectBatch
    }
}
