//! Handler operations that return formatted wrapper types for the Scheduler.

use super::Scheduler;
use crate::{
    error::Result,
    models::{Topic, TopicSummary},
    params::{DeleteTopic, ListTopics, OwnedId},
};

impl Scheduler {
    /// Handle listing topics as summaries.
    ///
    /// Converts topics to summaries with revision count information and the
    /// next pending due date, for consistent list display across interfaces.
    ///
    /// # Arguments
    ///
    /// * `params` - List parameters containing the owner identity
    ///
    /// # Returns
    ///
    /// A TopicSummaries wrapper containing topic summary objects with
    /// revision counts
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use recall_core::{params::ListTopics, SchedulerBuilder};
    /// # async {
    /// let scheduler = SchedulerBuilder::new().build().await?;
    /// let params = ListTopics { owner: "alice".to_string() };
    /// let summaries = scheduler.list_topics_summary(&params).await?;
    /// # Result::<(), recall_core::SchedulerError>::Ok(())
    /// # };
    /// ```
    pub async fn list_topics_summary(
        &self,
        params: &ListTopics,
    ) -> Result<crate::display::TopicSummaries> {
        let topics = self.list_topics(params).await?;
        let summaries: Vec<TopicSummary> = topics.iter().map(Into::into).collect();
        Ok(crate::display::TopicSummaries(summaries))
    }

    /// Handle showing a complete topic with its full revision history.
    ///
    /// The returned Topic object includes all revisions, pending and
    /// terminal, ordered by scheduled date.
    ///
    /// # Arguments
    ///
    /// * `params` - Owner-scoped ID parameters specifying which topic
    ///
    /// # Returns
    ///
    /// An optional Topic with its revisions loaded, or None if the topic
    /// doesn't exist or belongs to a different owner
    pub async fn show_topic_with_revisions(&self, params: &OwnedId) -> Result<Option<Topic>> {
        self.get_topic(params).await
    }

    /// Handle permanently deleting a topic with confirmation.
    ///
    /// Permanently removes a topic and all its revisions from the database.
    /// This operation cannot be undone. Uses get-before-delete so the topic
    /// details can be shown as confirmation.
    ///
    /// # Arguments
    ///
    /// * `params` - DeleteTopic parameters with the ID and confirmation flag
    ///
    /// # Returns
    ///
    /// The topic that was deleted, or None if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::InvalidInput` if `confirmed` is false
    pub async fn delete_topic(&self, params: &DeleteTopic) -> Result<Option<Topic>> {
        if !params.confirmed {
            return Err(crate::SchedulerError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Topic deletion removes its entire revision history. Set 'confirmed' to true to proceed with permanent deletion.".to_string(),
            });
        }

        let id_params = OwnedId {
            owner: params.owner.clone(),
            id: params.id,
        };
        let topic = self.get_topic(&id_params).await?;

        if topic.is_some() {
            self.delete_topic_by_id(&id_params).await?;
        }

        Ok(topic)
    }
}
