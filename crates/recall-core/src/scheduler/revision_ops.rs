//! Revision operations for the Scheduler.

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulerError},
    models::{Leniency, Revision, RevisionFilter},
    params::{ListRevisions, OwnedId, PostponeRevision},
};

impl Scheduler {
    /// Retrieves a revision by its ID.
    pub async fn get_revision(&self, params: &OwnedId) -> Result<Option<Revision>> {
        let db_path = self.db_path.clone();
        let owner = params.owner.clone();
        let revision_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_revision(&owner, revision_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists an owner's revisions with optional date and status filters.
    ///
    /// Filters are parsed leniently: a value that does not parse is dropped
    /// rather than rejected, matching how the listing surface has always
    /// behaved.
    pub async fn list_revisions(&self, params: &ListRevisions) -> Result<Vec<Revision>> {
        let db_path = self.db_path.clone();
        let owner = params.owner.clone();
        let filter = RevisionFilter::from_raw(
            params.date.as_deref(),
            params.status.as_deref(),
            Leniency::Lenient,
        )?;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_revisions(&owner, &filter)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Marks a pending revision as completed and schedules the successor at
    /// double the interval. Returns the successor.
    pub async fn complete_revision(&self, params: &OwnedId) -> Result<Revision> {
        let db_path = self.db_path.clone();
        let owner = params.owner.clone();
        let revision_id = params.id;
        let today = self.today();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.complete_revision(&owner, revision_id, today)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Marks a pending revision as postponed and schedules the successor
    /// `days` days out at the same interval. Returns the successor.
    pub async fn postpone_revision(&self, params: &PostponeRevision) -> Result<Revision> {
        let db_path = self.db_path.clone();
        let owner = params.owner.clone();
        let revision_id = params.id;
        let days = params.effective_days();
        let today = self.today();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.postpone_revision(&owner, revision_id, days, today)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a revision.
    /// This operation cannot be undone.
    pub async fn delete_revision(&self, params: &OwnedId) -> Result<()> {
        let db_path = self.db_path.clone();
        let owner = params.owner.clone();
        let revision_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_revision(&owner, revision_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
