//! Revision queries and the completion/postponement state machine.
//!
//! The schedule is an append-only forward chain: a pending revision is never
//! rescheduled in place. Completing or postponing it terminally transitions
//! the row (guarded by a compare-and-set on status, so two racing calls
//! cannot both spawn a successor) and inserts a new pending row carrying the
//! next checkpoint.

use jiff::{civil, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension};

use super::utils::add_days;
use crate::{
    error::{DatabaseResultExt, Result, SchedulerError},
    models::{Revision, RevisionFilter, RevisionStatus},
};

const REVISION_COLUMNS: &str = "r.id, r.topic_id, r.scheduled_date, r.status, r.completion_date, r.postponed_to, r.interval, r.created_at, r.updated_at";
const SELECT_REVISION_SQL: &str = "SELECT r.id, r.topic_id, r.scheduled_date, r.status, r.completion_date, r.postponed_to, r.interval, r.created_at, r.updated_at FROM revisions r JOIN topics t ON t.id = r.topic_id WHERE r.id = ?1 AND t.owner = ?2";
const SELECT_TOPIC_REVISIONS_SQL: &str = "SELECT r.id, r.topic_id, r.scheduled_date, r.status, r.completion_date, r.postponed_to, r.interval, r.created_at, r.updated_at FROM revisions r WHERE r.topic_id = ?1 ORDER BY r.scheduled_date";
const SELECT_REVISION_STATUS_SQL: &str = "SELECT r.status FROM revisions r JOIN topics t ON t.id = r.topic_id WHERE r.id = ?1 AND t.owner = ?2";
const SELECT_TRANSITIONED_SQL: &str = "SELECT topic_id, interval FROM revisions WHERE id = ?1";
const COMPLETE_REVISION_SQL: &str = "UPDATE revisions SET status = ?1, completion_date = ?2, updated_at = ?3 WHERE id = ?4 AND status = ?5 AND topic_id IN (SELECT id FROM topics WHERE owner = ?6)";
const POSTPONE_REVISION_SQL: &str = "UPDATE revisions SET status = ?1, postponed_to = ?2, updated_at = ?3 WHERE id = ?4 AND status = ?5 AND topic_id IN (SELECT id FROM topics WHERE owner = ?6)";
const INSERT_REVISION_SQL: &str = "INSERT INTO revisions (topic_id, scheduled_date, status, interval, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_TOPIC_TIMESTAMP_SQL: &str = "UPDATE topics SET updated_at = ?1 WHERE id = ?2";
const DELETE_REVISION_SQL: &str = "DELETE FROM revisions WHERE id = ?1 AND topic_id IN (SELECT id FROM topics WHERE owner = ?2)";

/// Parse an optional stored date column.
fn get_date_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Option<civil::Date>> {
    row.get::<_, Option<String>>(idx)?
        .map(|s| {
            s.parse::<civil::Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })
        })
        .transpose()
}

impl super::Database {
    /// Helper function to construct a Revision from a database row.
    pub(super) fn build_revision_from_row(row: &rusqlite::Row) -> rusqlite::Result<Revision> {
        let status_str: String = row.get(3)?;
        let status = status_str.parse::<RevisionStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                Type::Text,
                format!("Invalid status: {status_str}").into(),
            )
        })?;

        Ok(Revision {
            id: row.get::<_, i64>(0)? as u64,
            topic_id: row.get::<_, i64>(1)? as u64,
            scheduled_date: row.get::<_, String>(2)?.parse::<civil::Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
            })?,
            status,
            completion_date: get_date_column(row, 4)?,
            postponed_to: get_date_column(row, 5)?,
            interval: row.get::<_, i64>(6)? as u32,
            created_at: row.get::<_, String>(7)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(8)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Retrieves all revisions of a topic, ordered by scheduled date.
    ///
    /// Ownership of the topic must already be established by the caller.
    pub(super) fn get_topic_revisions(&self, topic_id: u64) -> Result<Vec<Revision>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TOPIC_REVISIONS_SQL)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let revisions = stmt
            .query_map(params![topic_id as i64], Self::build_revision_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query revisions", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database_error("Failed to fetch revisions", e))?;

        Ok(revisions)
    }

    /// Retrieves a single revision by ID, scoped to the topic's owner.
    pub fn get_revision(&self, owner: &str, id: u64) -> Result<Option<Revision>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_REVISION_SQL)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let revision = stmt
            .query_row(params![id as i64, owner], Self::build_revision_from_row)
            .optional()
            .map_err(|e| SchedulerError::database_error("Failed to get revision", e))?;

        Ok(revision)
    }

    /// Lists an owner's revisions with optional date and status filters,
    /// ordered by scheduled date.
    pub fn list_revisions(&self, owner: &str, filter: &RevisionFilter) -> Result<Vec<Revision>> {
        let mut query = format!(
            "SELECT {REVISION_COLUMNS} FROM revisions r JOIN topics t ON t.id = r.topic_id WHERE t.owner = ?"
        );

        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(owner.to_string())];

        if let Some(date) = filter.scheduled_on {
            query.push_str(" AND r.scheduled_date = ?");
            params_vec.push(Box::new(date.to_string()));
        }

        if let Some(status) = filter.status {
            query.push_str(" AND r.status = ?");
            params_vec.push(Box::new(status.as_str().to_string()));
        }

        query.push_str(" ORDER BY r.scheduled_date");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let revisions = stmt
            .query_map(&params_refs[..], Self::build_revision_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query revisions", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database_error("Failed to fetch revisions", e))?;

        Ok(revisions)
    }

    /// Completes a pending revision and schedules its successor.
    ///
    /// The successor doubles the interval and lands `2 x interval` days from
    /// `today`. The completed row stays in place as history; the returned
    /// revision is the newly created successor.
    ///
    /// Fails with `InvalidState` when the row exists but is no longer
    /// pending -- the compare-and-set guard makes a doubled-up complete lose
    /// cleanly instead of spawning a second successor.
    pub fn complete_revision(
        &mut self,
        owner: &str,
        id: u64,
        today: civil::Date,
    ) -> Result<Revision> {
        self.transition_revision(owner, id, today, Transition::Complete)
    }

    /// Postpones a pending revision and schedules its successor.
    ///
    /// The successor keeps the interval unchanged and lands `days` days from
    /// `today`: postponing defers the next checkpoint without affecting the
    /// long-run growth of the schedule.
    pub fn postpone_revision(
        &mut self,
        owner: &str,
        id: u64,
        days: u32,
        today: civil::Date,
    ) -> Result<Revision> {
        self.transition_revision(owner, id, today, Transition::Postpone { days })
    }

    /// Shared implementation of the pending -> terminal transitions.
    fn transition_revision(
        &mut self,
        owner: &str,
        id: u64,
        today: civil::Date,
        transition: Transition,
    ) -> Result<Revision> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        // Compare-and-set: only a pending row owned by this caller moves.
        let (sql, terminal_status, marker_date) = match transition {
            Transition::Complete => (COMPLETE_REVISION_SQL, RevisionStatus::Completed, today),
            Transition::Postpone { days } => (
                POSTPONE_REVISION_SQL,
                RevisionStatus::Postponed,
                add_days(today, i64::from(days)),
            ),
        };

        let rows_affected = tx
            .execute(
                sql,
                params![
                    terminal_status.as_str(),
                    marker_date.to_string(),
                    &now_str,
                    id as i64,
                    RevisionStatus::Pending.as_str(),
                    owner
                ],
            )
            .map_err(|e| SchedulerError::database_error("Failed to transition revision", e))?;

        if rows_affected == 0 {
            // Distinguish "not yours / missing" from "already transitioned"
            let status: Option<String> = tx
                .query_row(SELECT_REVISION_STATUS_SQL, params![id as i64, owner], |row| {
                    row.get(0)
                })
                .optional()
                .map_err(|e| SchedulerError::database_error("Failed to query revision status", e))?;

            return match status {
                None => Err(SchedulerError::RevisionNotFound { id }),
                Some(status) => Err(SchedulerError::InvalidState { id, status }),
            };
        }

        let (topic_id, interval): (i64, i64) = tx
            .query_row(SELECT_TRANSITIONED_SQL, params![id as i64], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .map_err(|e| SchedulerError::database_error("Failed to query transitioned row", e))?;

        let (next_interval, next_date) = match transition {
            Transition::Complete => {
                let next_interval = (interval as u32).saturating_mul(2);
                (next_interval, add_days(today, i64::from(next_interval)))
            }
            // Postponement preserves the interval; the successor simply
            // lands on the deferred date.
            Transition::Postpone { .. } => (interval as u32, marker_date),
        };

        tx.execute(
            INSERT_REVISION_SQL,
            params![
                topic_id,
                next_date.to_string(),
                RevisionStatus::Pending.as_str(),
                i64::from(next_interval),
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| SchedulerError::database_error("Failed to insert successor revision", e))?;

        let successor_id = tx.last_insert_rowid() as u64;

        tx.execute(UPDATE_TOPIC_TIMESTAMP_SQL, params![&now_str, topic_id])
            .map_err(|e| SchedulerError::database_error("Failed to update topic timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        log::debug!(
            "revision {id} -> {status}; successor {successor_id} due {next_date} (interval {next_interval})",
            status = terminal_status.as_str(),
        );

        Ok(Revision {
            id: successor_id,
            topic_id: topic_id as u64,
            scheduled_date: next_date,
            status: RevisionStatus::Pending,
            completion_date: None,
            postponed_to: None,
            interval: next_interval,
            created_at: now,
            updated_at: now,
        })
    }

    /// Permanently deletes a revision, scoped to the topic's owner.
    pub fn delete_revision(&mut self, owner: &str, id: u64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_REVISION_SQL, params![id as i64, owner])
            .map_err(|e| SchedulerError::database_error("Failed to delete revision", e))?;

        if rows_affected == 0 {
            return Err(SchedulerError::RevisionNotFound { id });
        }

        Ok(())
    }
}

/// The two pending -> terminal transitions of the revision state machine.
#[derive(Clone, Copy)]
enum Transition {
    Complete,
    Postpone { days: u32 },
}
