//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{Revision, TopicSummary};

/// Newtype wrapper for displaying collections of topic summaries.
///
/// This provides clean Display formatting for topic collections without title
/// handling, allowing consumers to handle titles separately. Handles empty
/// collections gracefully.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use recall_core::{display::TopicSummaries, models::TopicSummary};
///
/// let topic = TopicSummary {
///     id: 1,
///     title: "Rust Ownership".to_string(),
///     description: Some("Borrowing and lifetimes".to_string()),
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     total_revisions: 4,
///     completed_revisions: 2,
///     pending_revisions: 2,
///     next_due: Some(jiff::civil::date(2024, 1, 14)),
/// };
/// let topics = vec![topic];
///
/// // Format a collection of topics
/// let summaries = TopicSummaries(topics);
/// let output = format!("{}", summaries);
/// assert!(output.contains("Rust Ownership"));
/// ```
pub struct TopicSummaries(pub Vec<TopicSummary>);

impl TopicSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of topic summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the topic summary at the given index.
    pub fn get(&self, index: usize) -> Option<&TopicSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the topic summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, TopicSummary> {
        self.0.iter()
    }
}

impl Index<usize> for TopicSummaries {
    type Output = TopicSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for TopicSummaries {
    type Item = TopicSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TopicSummaries {
    type Item = &'a TopicSummary;
    type IntoIter = std::slice::Iter<'a, TopicSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TopicSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No topics found.")
        } else {
            for topic in &self.0 {
                write!(f, "{}", topic)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of revisions.
///
/// This wrapper provides Display implementation for collections of revisions
/// without requiring title formatting logic. It handles empty collections
/// gracefully and formats each revision using the existing Revision Display
/// trait.
pub struct Revisions(pub Vec<Revision>);

impl Revisions {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of revisions in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the revision at the given index.
    pub fn get(&self, index: usize) -> Option<&Revision> {
        self.0.get(index)
    }

    /// Get an iterator over the revisions.
    pub fn iter(&self) -> std::slice::Iter<'_, Revision> {
        self.0.iter()
    }
}

impl Index<usize> for Revisions {
    type Output = Revision;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Revisions {
    type Item = Revision;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Revisions {
    type Item = &'a Revision;
    type IntoIter = std::slice::Iter<'a, Revision>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Revisions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No revisions found.")
        } else {
            for revision in &self.0 {
                write!(f, "{}", revision)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil, Timestamp};

    use super::*;
    use crate::models::RevisionStatus;

    fn create_test_topic_summary() -> TopicSummary {
        TopicSummary {
            id: 1,
            title: "Test Topic".to_string(),
            description: Some("A test topic".to_string()),
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1640995200).unwrap(),
            total_revisions: 3,
            completed_revisions: 1,
            pending_revisions: 2,
            next_due: Some(civil::date(2022, 1, 5)),
        }
    }

    fn create_test_revision() -> Revision {
        Revision {
            id: 1,
            topic_id: 1,
            scheduled_date: civil::date(2022, 1, 5),
            status: RevisionStatus::Pending,
            completion_date: None,
            postponed_to: None,
            interval: 1,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_topic_summaries_display() {
        // Test with topics
        let topics = vec![create_test_topic_summary()];
        let summaries = TopicSummaries(topics);
        let output = format!("{}", summaries);
        assert!(output.contains("Test Topic"));
        assert!(output.contains("ID: 1"));
        assert!(output.contains("2022-01-05"));

        // Test empty collection
        let empty_summaries = TopicSummaries(vec![]);
        let empty_output = format!("{}", empty_summaries);
        assert_eq!(empty_output, "No topics found.\n");

        // Test multiple topics
        let topic1 = create_test_topic_summary();
        let mut topic2 = create_test_topic_summary();
        topic2.id = 2;
        topic2.title = "Second Topic".to_string();
        let topics = vec![topic1, topic2];
        let summaries = TopicSummaries(topics);
        let output = format!("{}", summaries);
        assert!(output.contains("## Test Topic"));
        assert!(output.contains("## Second Topic"));
        assert!(output.contains("ID: 2"));
        // Verify it doesn't start with a title header
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn test_revisions_display_empty() {
        let revisions = Revisions(vec![]);
        let output = format!("{}", revisions);
        assert_eq!(output, "No revisions found.\n");
    }

    #[test]
    fn test_revisions_display_single_revision() {
        let revision = create_test_revision();
        let revisions = Revisions(vec![revision]);
        let output = format!("{}", revisions);

        assert!(output.contains("Due 2022-01-05"));
        assert!(output.contains("○ Pending"));
        assert!(output.contains("Interval: 1 day(s)"));
    }

    #[test]
    fn test_revisions_display_multiple_revisions() {
        let revision1 = create_test_revision();
        let mut revision2 = create_test_revision();
        revision2.id = 2;
        revision2.status = RevisionStatus::Completed;
        revision2.completion_date = Some(civil::date(2022, 1, 5));

        let revisions = Revisions(vec![revision1, revision2]);
        let output = format!("{}", revisions);

        assert!(output.contains("○ Pending"));
        assert!(output.contains("✓ Completed"));
        assert!(output.contains("Completed on: 2022-01-05"));
    }
}
