//! Revision model definition and related functionality.

use jiff::{civil, Timestamp};
use serde::{Deserialize, Serialize};

use super::RevisionStatus;

/// One scheduled review checkpoint for a topic.
///
/// Revisions form an append-only forward chain: completing or postponing a
/// pending revision terminally transitions that row and inserts a successor
/// row carrying the next scheduled date. Old rows are kept as history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Revision {
    /// Unique identifier for the revision
    pub id: u64,

    /// ID of the parent topic
    pub topic_id: u64,

    /// Calendar date the review is due (no time-of-day component)
    pub scheduled_date: civil::Date,

    /// Current status of the revision
    pub status: RevisionStatus,

    /// Date the review was performed (set when status becomes Completed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<civil::Date>,

    /// Date the review was deferred to (set when status becomes Postponed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postponed_to: Option<civil::Date>,

    /// Current interval length in days. Starts at 1 and doubles on every
    /// completion; postponing leaves it unchanged.
    pub interval: u32,

    /// Timestamp when the revision was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the revision was last updated (UTC)
    pub updated_at: Timestamp,
}
