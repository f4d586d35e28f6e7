//! Due-date and statistics queries for the Scheduler.

use jiff::Zoned;
use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulerError},
    models::{OwnerStatistics, Revision, ServerTime},
};

impl Scheduler {
    /// Pending revisions scheduled for today.
    pub async fn due_today(&self, owner: &str) -> Result<Vec<Revision>> {
        let db_path = self.db_path.clone();
        let owner = owner.to_string();
        let today = self.today();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.due_on(&owner, today)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Pending revisions scheduled before today, oldest first.
    pub async fn overdue(&self, owner: &str) -> Result<Vec<Revision>> {
        let db_path = self.db_path.clone();
        let owner = owner.to_string();
        let today = self.today();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.overdue(&owner, today)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Aggregate statistics for an owner's topics and revisions.
    pub async fn statistics(&self, owner: &str) -> Result<OwnerStatistics> {
        let db_path = self.db_path.clone();
        let owner = owner.to_string();
        let today = self.today();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.statistics(&owner, today)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// The engine's current wall-clock time and scheduling date.
    ///
    /// The date comes from the scheduling clock, so against a pinned clock
    /// it reports the pinned date rather than the host's.
    pub fn server_time(&self) -> ServerTime {
        let now = Zoned::now();
        let timezone = now
            .time_zone()
            .iana_name()
            .unwrap_or("UTC")
            .to_string();

        ServerTime {
            datetime: now,
            date: self.today(),
            timezone,
        }
    }
}
