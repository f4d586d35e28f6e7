//! Parameter structures for scheduler operations.
//!
//! These structures carry validated-enough input from an interface layer (the
//! CLI today, any access gateway tomorrow) into the core without
//! framework-specific derives. Interface layers define their own argument
//! structs and convert into these via `From`/`Into`, keeping clap concerns out
//! of the scheduler.
//!
//! The `owner` field on every owner-scoped parameter is the opaque identity
//! the gateway resolved for the caller; the core trusts it completely and
//! performs no authentication of its own.

use jiff::civil;
use serde::{Deserialize, Serialize};

/// Generic parameters for owner-scoped operations on a single resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwnedId {
    /// Owner identity supplied by the gateway
    pub owner: String,
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new topic.
///
/// Creation atomically seeds the topic's first scheduled revision, so the
/// optional first review date lives here rather than on a revision call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTopic {
    /// Owner identity supplied by the gateway
    pub owner: String,
    /// Title of the topic (required, non-empty)
    pub title: String,
    /// Optional detailed description of the topic
    pub description: Option<String>,
    /// Date of the first scheduled revision; defaults to tomorrow
    pub first_revision_date: Option<civil::Date>,
}

/// Parameters for listing an owner's topics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTopics {
    /// Owner identity supplied by the gateway
    pub owner: String,
}

/// Parameters for partially updating a topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTopic {
    /// Owner identity supplied by the gateway
    pub owner: String,
    /// Topic ID to update
    pub id: u64,
    /// New title, if changing (must be non-empty)
    pub title: Option<String>,
    /// New description, if changing
    pub description: Option<String>,
}

/// Parameters for permanently deleting a topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTopic {
    /// Owner identity supplied by the gateway
    pub owner: String,
    /// Topic ID to delete
    pub id: u64,
    /// Explicit confirmation flag to prevent accidental deletion
    pub confirmed: bool,
}

/// Parameters for listing revisions with optional free-text filters.
///
/// Both filter values arrive as raw strings; parsing is delegated to
/// [`crate::models::RevisionFilter::from_raw`], which by default drops
/// unparseable values instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRevisions {
    /// Owner identity supplied by the gateway
    pub owner: String,
    /// Exact scheduled date filter (`YYYY-MM-DD`)
    pub date: Option<String>,
    /// Status filter (`pending`, `completed`, `postponed`)
    pub status: Option<String>,
}

/// Parameters for postponing a pending revision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostponeRevision {
    /// Owner identity supplied by the gateway
    pub owner: String,
    /// Revision ID to postpone
    pub id: u64,
    /// Number of days to defer by, as free text. Anything that does not
    /// parse as a positive integer falls back to 1.
    pub days: Option<String>,
}

impl PostponeRevision {
    /// Resolve the effective deferral in days.
    ///
    /// Missing, non-numeric, zero, and negative inputs all default to a
    /// single day. This permissive policy is intentional: postponement is a
    /// quick interactive action and a garbled `days` value should defer the
    /// review, not fail it.
    pub fn effective_days(&self) -> u32 {
        self.days
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|days| *days > 0)
            .map_or(1, |days| days.min(i64::from(u32::MAX)) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postpone(days: Option<&str>) -> PostponeRevision {
        PostponeRevision {
            owner: "alice".to_string(),
            id: 1,
            days: days.map(String::from),
        }
    }

    #[test]
    fn test_effective_days_parses_positive_integer() {
        assert_eq!(postpone(Some("3")).effective_days(), 3);
        assert_eq!(postpone(Some(" 14 ")).effective_days(), 14);
    }

    #[test]
    fn test_effective_days_defaults_when_missing() {
        assert_eq!(postpone(None).effective_days(), 1);
    }

    #[test]
    fn test_effective_days_defaults_for_garbage() {
        assert_eq!(postpone(Some("abc")).effective_days(), 1);
        assert_eq!(postpone(Some("3.5")).effective_days(), 1);
        assert_eq!(postpone(Some("")).effective_days(), 1);
    }

    #[test]
    fn test_effective_days_defaults_for_non_positive() {
        assert_eq!(postpone(Some("0")).effective_days(), 1);
        assert_eq!(postpone(Some("-2")).effective_days(), 1);
    }
}
