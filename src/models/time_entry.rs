use super::{CompanyId, EmployeeId, EntryId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    In,
    Out,
    Break,
    Resume,
}

impl EntryKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            "break" => Some(Self::Break),
            "resume" => Some(Self::Resume),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::In => "in",
            EntryKind::Out => "out",
            EntryKind::Break => "break",
            EntryKind::Resume => "resume",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EntryKind::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EntryKind::Out)
    }
}

/// Append-only clock event. The store guarantees no ordering; the
/// aggregator sorts by `(timestamp, id)` before pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: EntryId,
    pub employee_id: EmployeeId,
    pub company_id: CompanyId,
    pub kind: EntryKind,
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub created_by_employee: bool,
}

impl TimeEntry {
    /// Total order used everywhere entries are sorted; the id tie-break
    /// keeps results stable under duplicate timestamps.
    pub fn sort_key(&self) -> (DateTime<Utc>, EntryId) {
        (self.timestamp, self.id)
    }
}
