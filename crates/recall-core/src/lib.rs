//! Core library for the Recall spaced-repetition review scheduler.
//!
//! This crate provides the core business logic for managing review topics and
//! their revision schedules, including database operations, data models, and
//! error handling.
//!
//! Each topic carries a forward chain of revisions: completing a review
//! doubles the interval to the next one, postponing defers it without growing
//! the interval. All data is scoped to an owner identity supplied by the
//! calling interface.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use recall_core::{SchedulerBuilder, params::CreateTopic};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a scheduler instance
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Create a new topic; its first revision is seeded automatically
//! let create_params = CreateTopic {
//!     owner: "alice".to_string(),
//!     title: "Rust Ownership".to_string(),
//!     description: Some("Borrowing and lifetimes".to_string()),
//!     first_revision_date: None,
//! };
//!
//! let topic = scheduler.create_topic(&create_params).await?;
//! println!("Created topic: {}", topic);
//!
//! // List topics as summaries
//! use recall_core::params::ListTopics;
//! let topics = scheduler
//!     .list_topics_summary(&ListTopics { owner: "alice".to_string() })
//!     .await?;
//! for topic in &topics {
//!     println!("Topic: {}", topic.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod scheduler;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CompletionResult, CreateResult, DeleteResult, OperationStatus, PostponeResult, Revisions,
    TopicSummaries, UpdateResult,
};
pub use error::{Result, SchedulerError};
pub use models::{
    Leniency, OwnerStatistics, Revision, RevisionFilter, RevisionStatus, ServerTime, Topic,
    TopicSummary,
};
pub use params::{
    CreateTopic, DeleteTopic, ListRevisions, ListTopics, OwnedId, PostponeRevision, UpdateTopic,
};
pub use scheduler::{Clock, Scheduler, SchedulerBuilder};
