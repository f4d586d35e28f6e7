//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, SchedulerError};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases.
    ///
    /// Databases created before the schedule-table redesign carry revisions
    /// without a postponed_to column; add it so postponement can record where
    /// the checkpoint moved.
    fn apply_migrations(&self) -> Result<()> {
        let has_postponed_to: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('revisions') WHERE name = 'postponed_to'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_postponed_to {
            self.connection
                .execute("ALTER TABLE revisions ADD COLUMN postponed_to TEXT", [])
                .map_err(|e| {
                    SchedulerError::database_error(
                        "Failed to add postponed_to column to revisions table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
