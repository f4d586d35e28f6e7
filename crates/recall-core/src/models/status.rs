//! Status enumeration for scheduled revisions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of revision statuses.
///
/// `Pending` is the initial state. `Completed` and `Postponed` are terminal
/// for the row that carries them: the future work is always represented by a
/// freshly inserted pending row, never by reactivating an old one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RevisionStatus {
    /// Revision is waiting to be reviewed
    #[default]
    Pending,

    /// Revision was reviewed; a successor was scheduled at double the interval
    Completed,

    /// Revision was deferred; a successor was scheduled at the same interval
    Postponed,
}

impl FromStr for RevisionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(RevisionStatus::Pending),
            "completed" => Ok(RevisionStatus::Completed),
            "postponed" => Ok(RevisionStatus::Postponed),
            _ => Err(format!("Invalid revision status: {s}")),
        }
    }
}

impl RevisionStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RevisionStatus::Pending => "pending",
            RevisionStatus::Completed => "completed",
            RevisionStatus::Postponed => "postponed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `○ Pending` - Circle for revisions still waiting
    /// - `✓ Completed` - Checkmark for reviewed revisions
    /// - `➤ Postponed` - Arrow for deferred revisions
    pub fn with_icon(&self) -> &'static str {
        match self {
            RevisionStatus::Pending => "○ Pending",
            RevisionStatus::Completed => "✓ Completed",
            RevisionStatus::Postponed => "➤ Postponed",
        }
    }
}
