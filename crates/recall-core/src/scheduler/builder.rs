//! Builder for creating and configuring Scheduler instances.

use std::path::{Path, PathBuf};

use jiff::civil;
use tokio::task;

use super::{Clock, Scheduler};
use crate::{
    db::Database,
    error::{Result, SchedulerError},
};

/// Builder for creating and configuring Scheduler instances.
#[derive(Debug, Clone)]
pub struct SchedulerBuilder {
    database_path: Option<PathBuf>,
    clock: Clock,
}

impl SchedulerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            clock: Clock::System,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/recall/recall.db` or `~/.local/share/recall/recall.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Pins the scheduling clock to a fixed calendar date.
    ///
    /// All due-date arithmetic derives from this date instead of the system
    /// clock, making completion chains deterministic.
    pub fn with_today(mut self, today: civil::Date) -> Self {
        self.clock = Clock::Fixed(today);
        self
    }

    /// Builds the configured scheduler instance.
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::FileSystem` if the database path is invalid
    /// Returns `SchedulerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Scheduler> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SchedulerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), SchedulerError>(())
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Scheduler {
            db_path,
            clock: self.clock,
        })
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("recall")
            .place_data_file("recall.db")
            .map_err(|e| SchedulerError::XdgDirectory(e.to_string()))
    }
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
