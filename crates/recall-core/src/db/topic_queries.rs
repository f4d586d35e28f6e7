//! Topic CRUD operations and queries.
//!
//! Every query here is owner-scoped: a topic that exists but belongs to a
//! different owner behaves exactly like a topic that does not exist.

use jiff::{civil, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, SchedulerError},
    models::{RevisionStatus, Topic},
};

const INSERT_TOPIC_SQL: &str = "INSERT INTO topics (owner, title, description, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_REVISION_SQL: &str = "INSERT INTO revisions (topic_id, scheduled_date, status, interval, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TOPIC_SQL: &str = "SELECT id, owner, title, description, created_at, updated_at FROM topics WHERE id = ?1 AND owner = ?2";
const SELECT_TOPICS_BY_OWNER_SQL: &str = "SELECT id, owner, title, description, created_at, updated_at FROM topics WHERE owner = ?1 ORDER BY created_at DESC";
const UPDATE_TOPIC_SQL: &str =
    "UPDATE topics SET title = ?1, description = ?2, updated_at = ?3 WHERE id = ?4 AND owner = ?5";
const DELETE_TOPIC_REVISIONS_SQL: &str = "DELETE FROM revisions WHERE topic_id = ?1";
const DELETE_TOPIC_SQL: &str = "DELETE FROM topics WHERE id = ?1 AND owner = ?2";

impl super::Database {
    /// Helper function to construct a Topic (without revisions) from a row.
    fn build_topic_from_row(row: &rusqlite::Row) -> rusqlite::Result<Topic> {
        Ok(Topic {
            id: row.get::<_, i64>(0)? as u64,
            owner: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            revisions: Vec::new(),
        })
    }

    /// Creates a new topic and atomically seeds its first scheduled revision.
    ///
    /// The seed revision is pending with an interval of one day, scheduled
    /// for `first_revision_date`. This is the only way a topic acquires its
    /// first revision.
    pub fn create_topic(
        &mut self,
        owner: &str,
        title: &str,
        description: Option<&str>,
        first_revision_date: civil::Date,
    ) -> Result<Topic> {
        if title.trim().is_empty() {
            return Err(SchedulerError::invalid_input(
                "title",
                "Topic title must not be empty",
            ));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_TOPIC_SQL,
            params![owner, title, description, &now_str, &now_str],
        )
        .map_err(|e| SchedulerError::database_error("Failed to insert topic", e))?;

        let topic_id = tx.last_insert_rowid();

        tx.execute(
            INSERT_REVISION_SQL,
            params![
                topic_id,
                first_revision_date.to_string(),
                RevisionStatus::Pending.as_str(),
                1i64,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| SchedulerError::database_error("Failed to insert seed revision", e))?;

        let revision_id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Topic {
            id: topic_id as u64,
            owner: owner.into(),
            title: title.into(),
            description: description.map(String::from),
            created_at: now,
            updated_at: now,
            revisions: vec![crate::models::Revision {
                id: revision_id,
                topic_id: topic_id as u64,
                scheduled_date: first_revision_date,
                status: RevisionStatus::Pending,
                completion_date: None,
                postponed_to: None,
                interval: 1,
                created_at: now,
                updated_at: now,
            }],
        })
    }

    /// Retrieves a topic by ID, scoped to its owner.
    pub fn get_topic(&self, owner: &str, id: u64) -> Result<Option<Topic>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TOPIC_SQL)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let mut topic = stmt
            .query_row(params![id as i64, owner], Self::build_topic_from_row)
            .optional()
            .map_err(|e| SchedulerError::database_error("Failed to query topic", e))?;

        // Eagerly load revisions if the topic exists
        if let Some(ref mut topic) = topic {
            topic.revisions = self.get_topic_revisions(topic.id)?;
        }

        Ok(topic)
    }

    /// Lists all topics for an owner, newest first, with revisions loaded.
    pub fn list_topics(&self, owner: &str) -> Result<Vec<Topic>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TOPICS_BY_OWNER_SQL)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let mut topics: Vec<Topic> = stmt
            .query_map(params![owner], Self::build_topic_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query topics", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database_error("Failed to fetch topics", e))?;

        for topic in &mut topics {
            topic.revisions = self.get_topic_revisions(topic.id)?;
        }

        Ok(topics)
    }

    /// Partially updates a topic's title and/or description.
    ///
    /// Returns the updated topic, or None when the topic is absent or owned
    /// by somebody else.
    pub fn update_topic(
        &mut self,
        owner: &str,
        id: u64,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Topic>> {
        if let Some(new_title) = title {
            if new_title.trim().is_empty() {
                return Err(SchedulerError::invalid_input(
                    "title",
                    "Topic title must not be empty",
                ));
            }
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        // Fetch current values first so unspecified fields are preserved
        let current = tx
            .query_row(SELECT_TOPIC_SQL, params![id as i64, owner], |row| {
                let title: String = row.get(2)?;
                let description: Option<String> = row.get(3)?;
                Ok((title, description))
            })
            .optional()
            .map_err(|e| SchedulerError::database_error("Failed to query topic", e))?;

        let Some((current_title, current_description)) = current else {
            return Ok(None);
        };

        let new_title = title.map(String::from).unwrap_or(current_title);
        let new_description = description.map(String::from).or(current_description);
        let now_str = Timestamp::now().to_string();

        tx.execute(
            UPDATE_TOPIC_SQL,
            params![&new_title, &new_description, &now_str, id as i64, owner],
        )
        .map_err(|e| SchedulerError::database_error("Failed to update topic", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_topic(owner, id)
    }

    /// Permanently deletes a topic and all of its revisions.
    ///
    /// The cascade is explicit even though the foreign key would handle it,
    /// so the delete works the same on connections without the pragma.
    pub fn delete_topic(&mut self, owner: &str, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM topics WHERE id = ?1 AND owner = ?2)",
                params![id as i64, owner],
                |row| row.get(0),
            )
            .map_err(|e| SchedulerError::database_error("Failed to check topic existence", e))?;

        if !exists {
            return Err(SchedulerError::TopicNotFound { id });
        }

        tx.execute(DELETE_TOPIC_REVISIONS_SQL, params![id as i64])
            .map_err(|e| SchedulerError::database_error("Failed to delete topic revisions", e))?;

        tx.execute(DELETE_TOPIC_SQL, params![id as i64, owner])
            .map_err(|e| SchedulerError::database_error("Failed to delete topic", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
