//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! update, delete, and state-transition operations with consistent messaging
//! and resource display.

use std::fmt;

use crate::models::{Revision, Topic};

/// Wrapper type for displaying the result of create operations.
///
/// This provides consistent formatting for creation results,
/// including success messages and the created resource information.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use recall_core::{display::CreateResult, models::Topic};
///
/// let topic = Topic {
///     id: 1,
///     owner: "alice".to_string(),
///     title: "New Topic".to_string(),
///     description: Some("A newly created topic".to_string()),
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     revisions: vec![],
/// };
///
/// let result = CreateResult::new(topic);
/// println!("{}", result);
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Topic> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created topic with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// This provides consistent formatting for update results,
/// including success messages and the updated resource information.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Topic> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated topic with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
///
/// This provides consistent formatting for deletion results,
/// including confirmation messages and resource identification.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Topic> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted topic '{}' (ID: {}) and its revision history",
            self.resource.title, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<Revision> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted revision {} (was due {})",
            self.resource.id, self.resource.scheduled_date
        )
    }
}

/// Wrapper type for displaying the result of completing a revision.
///
/// Completion always spawns a successor, so the formatter shows both the
/// completed ID and where the review chain goes next.
pub struct CompletionResult {
    pub completed_id: u64,
    pub successor: Revision,
}

impl CompletionResult {
    /// Create a new CompletionResult wrapper.
    pub fn new(completed_id: u64, successor: Revision) -> Self {
        Self {
            completed_id,
            successor,
        }
    }
}

impl fmt::Display for CompletionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Completed revision {}", self.completed_id)?;
        writeln!(f)?;
        writeln!(
            f,
            "Next review scheduled for {} (interval: {} day(s))",
            self.successor.scheduled_date, self.successor.interval
        )
    }
}

/// Wrapper type for displaying the result of postponing a revision.
pub struct PostponeResult {
    pub postponed_id: u64,
    pub successor: Revision,
}

impl PostponeResult {
    /// Create a new PostponeResult wrapper.
    pub fn new(postponed_id: u64, successor: Revision) -> Self {
        Self {
            postponed_id,
            successor,
        }
    }
}

impl fmt::Display for PostponeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Postponed revision {}", self.postponed_id)?;
        writeln!(f)?;
        writeln!(
            f,
            "Review moved to {} (interval: {} day(s))",
            self.successor.scheduled_date, self.successor.interval
        )
    }
}
