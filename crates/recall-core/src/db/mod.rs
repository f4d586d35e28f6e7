//! Database operations and SQLite management for topics and revisions.
//!
//! This module provides the low-level persistence layer for the Recall
//! scheduler. It handles SQLite connections, schema management, and the
//! owner-scoped query interfaces for topics, revisions, and statistics.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod revision_queries;
pub mod stats_queries;
pub mod topic_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
