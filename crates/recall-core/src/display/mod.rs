//! Display formatting functions and result types.
//!
//! This module provides wrapper types for formatting collections and operation
//! results, enabling consistent formatting across different output contexts
//! (lists, operations, reports).
//!
//! The Display architecture combines direct Display implementations on domain
//! models with newtype wrappers for collections and operation results. All
//! formatters produce markdown for rich terminal display.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (TopicSummaries, Revisions)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult, CompletionResult, PostponeResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use recall_core::display::OperationStatus;
//!
//! // Success messages
//! let success = OperationStatus::success("Operation completed successfully".to_string());
//! println!("{}", success);
//!
//! // Error messages
//! let error = OperationStatus::failure("Operation failed".to_string());
//! println!("{}", error);
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Revisions, TopicSummaries};
pub use datetime::LocalDateTime;
pub use results::{CompletionResult, CreateResult, DeleteResult, PostponeResult, UpdateResult};
pub use status::OperationStatus;
