//! Topic operations for the Scheduler.

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulerError},
    models::Topic,
    params::{CreateTopic, ListTopics, OwnedId, UpdateTopic},
};

impl Scheduler {
    /// Creates a new topic and seeds its first scheduled revision.
    ///
    /// When no explicit first revision date is given, the seed revision is
    /// scheduled for tomorrow.
    pub async fn create_topic(&self, params: &CreateTopic) -> Result<Topic> {
        let db_path = self.db_path.clone();
        let owner = params.owner.clone();
        let title = params.title.clone();
        let description = params.description.clone();
        let first_revision_date = params
            .first_revision_date
            .unwrap_or_else(|| crate::db::utils::add_days(self.today(), 1));

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_topic(&owner, &title, description.as_deref(), first_revision_date)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a topic by ID with its full revision history.
    pub async fn get_topic(&self, params: &OwnedId) -> Result<Option<Topic>> {
        let db_path = self.db_path.clone();
        let owner = params.owner.clone();
        let topic_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_topic(&owner, topic_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all of an owner's topics, newest first.
    pub async fn list_topics(&self, params: &ListTopics) -> Result<Vec<Topic>> {
        let db_path = self.db_path.clone();
        let owner = params.owner.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_topics(&owner)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Partially updates a topic's title and/or description.
    pub async fn update_topic(&self, params: &UpdateTopic) -> Result<Option<Topic>> {
        let db_path = self.db_path.clone();
        let owner = params.owner.clone();
        let topic_id = params.id;
        let title = params.title.clone();
        let description = params.description.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_topic(&owner, topic_id, title.as_deref(), description.as_deref())
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a topic and all its revisions.
    /// This operation cannot be undone.
    pub async fn delete_topic_by_id(&self, params: &OwnedId) -> Result<()> {
        let db_path = self.db_path.clone();
        let owner = params.owner.clone();
        let topic_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_topic(&owner, topic_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
