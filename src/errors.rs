//! Unified library error type.
//! All modules (store, resolver, aggregator, stats) return CoreError to keep
//! the error handling consistent and easy to manage.
//!
//! "No applicable schedule" and "employee has an open shift" are ordinary
//! results, never errors; the variants below cover store failures, bad
//! report periods and strict-policy batch rejection only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),

    // ---------------------------
    // Reporting
    // ---------------------------
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Aggregation (strict recovery policies only)
    // ---------------------------
    #[error("Batch rejected: {kind} at {at}")]
    BatchRejected {
        kind: MalformedKind,
        at: DateTime<Utc>,
    },
}

impl CoreError {
    /// Wrap an arbitrary backend failure raised by a store implementation.
    pub fn store<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        CoreError::Store(err.into())
    }
}

/// Classification of a malformed clock-event sequence, reported when a
/// strict [`RecoveryPolicy`](crate::aggregator::RecoveryPolicy) rejects a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalformedKind {
    /// An IN arrived while a shift was already open.
    DuplicateIn,
    /// An OUT arrived with no open shift to close.
    OrphanOut,
    /// An OUT closed a shift before the shift started.
    NegativeInterval,
}

impl MalformedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MalformedKind::DuplicateIn => "duplicate IN",
            MalformedKind::OrphanOut => "orphan OUT",
            MalformedKind::NegativeInterval => "negative interval",
        }
    }
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
