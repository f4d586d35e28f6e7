//! Topic summary types for list views.

use jiff::{civil, Timestamp};
use serde::{Deserialize, Serialize};

use super::{RevisionStatus, Topic};

/// Summary information about a topic with revision statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSummary {
    /// Topic ID
    pub id: u64,
    /// Title of the topic
    pub title: String,
    /// Detailed multi-line description of the topic
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Total number of revisions ever scheduled
    pub total_revisions: u32,
    /// Number of completed revisions
    pub completed_revisions: u32,
    /// Number of pending revisions
    pub pending_revisions: u32,
    /// Earliest scheduled date among pending revisions, if any
    pub next_due: Option<civil::Date>,
}

impl From<&Topic> for TopicSummary {
    fn from(topic: &Topic) -> Self {
        let total_revisions = topic.revisions.len() as u32;
        let completed_revisions = topic
            .revisions
            .iter()
            .filter(|r| r.status == RevisionStatus::Completed)
            .count() as u32;
        let pending: Vec<_> = topic
            .revisions
            .iter()
            .filter(|r| r.status == RevisionStatus::Pending)
            .collect();
        let next_due = pending.iter().map(|r| r.scheduled_date).min();

        Self {
            id: topic.id,
            title: topic.title.clone(),
            description: topic.description.clone(),
            created_at: topic.created_at,
            updated_at: topic.updated_at,
            total_revisions,
            completed_revisions,
            pending_revisions: pending.len() as u32,
            next_due,
        }
    }
}
