//! Data models for topics and scheduled revisions.
//!
//! This module contains the core domain models of the Recall spaced-repetition
//! scheduler. Display implementations live in [`crate::display::models`] to
//! keep data structures separate from presentation logic.
//!
//! A [`Topic`] owns an ordered chain of [`Revision`] rows. The chain is
//! append-only: every completion or postponement terminally transitions one
//! row and inserts the next checkpoint, so the full review history of a topic
//! stays queryable.

pub mod filters;
pub mod revision;
pub mod stats;
pub mod status;
pub mod summary;
pub mod topic;


// Re-export all public types at the models level
pub use filters::{Leniency, RevisionFilter};
pub use revision::Revision;
pub use stats::{OwnerStatistics, ServerTime};
pub use status::RevisionStatus;
pub use summary::TopicSummary;
pub use topic::Topic;
