//! Topic model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Revision;

/// A user-defined subject under spaced review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    /// Unique identifier for the topic
    pub id: u64,

    /// Opaque owner identity supplied by the access gateway. Every query is
    /// scoped to this value; the core never interprets it.
    pub owner: String,

    /// Title of the topic (required, non-empty)
    pub title: String,

    /// Detailed multi-line description of the topic
    pub description: Option<String>,

    /// Timestamp when the topic was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the topic was last modified (UTC)
    pub updated_at: Timestamp,

    /// Scheduled revisions for this topic, ordered by scheduled date
    #[serde(default)]
    pub revisions: Vec<Revision>,
}
