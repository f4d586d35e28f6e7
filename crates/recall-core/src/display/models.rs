//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent formatting with status icons and structured sections
//! - Context-aware display behavior for different use cases

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{OwnerStatistics, Revision, RevisionStatus, ServerTime, Topic, TopicSummary};

impl fmt::Display for RevisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        // Description as a paragraph
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.revisions.is_empty() {
            writeln!(f, "\n## Revisions")?;
            writeln!(f)?;
            for revision in &self.revisions {
                write!(f, "{}", revision)?;
            }
        } else {
            writeln!(f, "\nNo revisions scheduled for this topic.")?;
        }

        Ok(())
    }
}

impl Revision {
    /// Format the revision using the clean, compact display format.
    ///
    /// This uses the same format whether the revision is displayed standalone
    /// or within a topic context.
    fn fmt_revision(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. Due {} ({})",
            self.id,
            self.scheduled_date,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- Interval: {} day(s)", self.interval)?;

        if let Some(completed) = &self.completion_date {
            writeln!(f, "- Completed on: {completed}")?;
        }

        if let Some(deferred) = &self.postponed_to {
            writeln!(f, "- Postponed to: {deferred}")?;
        }

        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_revision(f)
    }
}

impl fmt::Display for TopicSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_revisions > 0 {
            format!(" ({}/{})", self.completed_revisions, self.total_revisions)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }

        if let Some(due) = &self.next_due {
            writeln!(f, "- **Next due**: {due}")?;
        }

        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Add blank line after each topic

        Ok(())
    }
}

impl fmt::Display for OwnerStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Review Statistics")?;
        writeln!(f)?;
        writeln!(f, "- Topics: {}", self.total_topics)?;
        writeln!(f, "- Topics added this week: {}", self.topics_this_week)?;
        writeln!(
            f,
            "- Revisions: {} ({} completed, {} pending)",
            self.total_revisions, self.completed_revisions, self.pending_revisions
        )?;
        writeln!(f, "- Completed today: {}", self.revisions_completed_today)?;
        writeln!(f, "- Average topics per day: {:.2}", self.avg_daily_topics)?;

        Ok(())
    }
}

impl fmt::Display for ServerTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Server Time")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Time: {}",
            self.datetime.strftime("%Y-%m-%d %H:%M:%S %Z")
        )?;
        writeln!(f, "- Scheduling date: {}", self.date)?;
        writeln!(f, "- Timezone: {}", self.timezone)?;

        Ok(())
    }
}
