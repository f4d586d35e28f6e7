//! Due-date views and per-owner aggregate statistics.

use jiff::{civil, Timestamp};
use rusqlite::params;

use super::utils::{add_days, timestamp_date};
use crate::{
    error::{Result, SchedulerError},
    models::{OwnerStatistics, Revision},
};

const SELECT_DUE_SQL: &str = "SELECT r.id, r.topic_id, r.scheduled_date, r.status, r.completion_date, r.postponed_to, r.interval, r.created_at, r.updated_at FROM revisions r JOIN topics t ON t.id = r.topic_id WHERE t.owner = ?1 AND r.status = 'pending' AND r.scheduled_date = ?2 ORDER BY r.scheduled_date, r.id";
const SELECT_OVERDUE_SQL: &str = "SELECT r.id, r.topic_id, r.scheduled_date, r.status, r.completion_date, r.postponed_to, r.interval, r.created_at, r.updated_at FROM revisions r JOIN topics t ON t.id = r.topic_id WHERE t.owner = ?1 AND r.status = 'pending' AND r.scheduled_date < ?2 ORDER BY r.scheduled_date, r.id";
const COUNT_TOPICS_SQL: &str = "SELECT COUNT(*) FROM topics WHERE owner = ?1";
const COUNT_REVISIONS_BY_STATUS_SQL: &str = "SELECT COUNT(*), COALESCE(SUM(r.status = 'completed'), 0), COALESCE(SUM(r.status = 'pending'), 0) FROM revisions r JOIN topics t ON t.id = r.topic_id WHERE t.owner = ?1";
const COUNT_TOPICS_SINCE_SQL: &str = "SELECT COUNT(*) FROM topics WHERE owner = ?1 AND created_at >= ?2";
const COUNT_COMPLETED_ON_SQL: &str = "SELECT COUNT(*) FROM revisions r JOIN topics t ON t.id = r.topic_id WHERE t.owner = ?1 AND r.status = 'completed' AND r.completion_date = ?2";
const OLDEST_TOPIC_SQL: &str = "SELECT MIN(created_at) FROM topics WHERE owner = ?1";

impl super::Database {
    /// Pending revisions scheduled exactly on the given date, oldest first.
    pub fn due_on(&self, owner: &str, date: civil::Date) -> Result<Vec<Revision>> {
        self.query_pending(SELECT_DUE_SQL, owner, date)
    }

    /// Pending revisions whose scheduled date is strictly before the given
    /// date, oldest first.
    pub fn overdue(&self, owner: &str, date: civil::Date) -> Result<Vec<Revision>> {
        self.query_pending(SELECT_OVERDUE_SQL, owner, date)
    }

    fn query_pending(&self, sql: &str, owner: &str, date: civil::Date) -> Result<Vec<Revision>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let revisions = stmt
            .query_map(params![owner, date.to_string()], Self::build_revision_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query revisions", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database_error("Failed to fetch revisions", e))?;

        Ok(revisions)
    }

    /// Computes aggregate statistics for an owner.
    ///
    /// An owner with no data gets all-zero counts rather than an error, so a
    /// fresh account can render its dashboard immediately.
    pub fn statistics(&self, owner: &str, today: civil::Date) -> Result<OwnerStatistics> {
        let total_topics: i64 = self
            .connection
            .query_row(COUNT_TOPICS_SQL, params![owner], |row| row.get(0))
            .map_err(|e| SchedulerError::database_error("Failed to count topics", e))?;

        let (total_revisions, completed_revisions, pending_revisions): (i64, i64, i64) = self
            .connection
            .query_row(COUNT_REVISIONS_BY_STATUS_SQL, params![owner], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .map_err(|e| SchedulerError::database_error("Failed to count revisions", e))?;

        // Timestamps are stored in RFC 3339. The cutoff deliberately omits
        // the zone suffix: stored values can carry fractional seconds, and
        // '.' sorts before 'Z', so "T00:00:00.5Z" must still compare after
        // the cutoff prefix.
        let week_cutoff = format!("{}T00:00:00", add_days(today, -7));
        let topics_this_week: i64 = self
            .connection
            .query_row(COUNT_TOPICS_SINCE_SQL, params![owner, week_cutoff], |row| {
                row.get(0)
            })
            .map_err(|e| SchedulerError::database_error("Failed to count recent topics", e))?;

        let revisions_completed_today: i64 = self
            .connection
            .query_row(
                COUNT_COMPLETED_ON_SQL,
                params![owner, today.to_string()],
                |row| row.get(0),
            )
            .map_err(|e| SchedulerError::database_error("Failed to count completions", e))?;

        let oldest: Option<String> = self
            .connection
            .query_row(OLDEST_TOPIC_SQL, params![owner], |row| row.get(0))
            .map_err(|e| SchedulerError::database_error("Failed to query oldest topic", e))?;

        // Average over days since the oldest topic, floored at one so the
        // first day doesn't divide by zero.
        let account_days = oldest
            .and_then(|s| s.parse::<Timestamp>().ok())
            .map(|ts| (today - timestamp_date(ts)).get_days())
            .unwrap_or(1)
            .max(1);
        let avg_daily_topics = total_topics as f64 / account_days as f64;

        Ok(OwnerStatistics {
            total_topics: total_topics as u64,
            total_revisions: total_revisions as u64,
            completed_revisions: completed_revisions as u64,
            pending_revisions: pending_revisions as u64,
            topics_this_week: topics_this_week as u64,
            revisions_completed_today: revisions_completed_today as u64,
            avg_daily_topics,
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil;
    use rusqlite::params;
    use tempfile::NamedTempFile;

    use crate::db::Database;

    fn insert_topic(db: &Database, owner: &str, title: &str, created_at: &str) {
        db.connection
            .execute(
                "INSERT INTO topics (owner, title, description, created_at, updated_at) VALUES (?1, ?2, NULL, ?3, ?3)",
                params![owner, title, created_at],
            )
            .expect("Failed to insert topic");
    }

    #[test]
    fn test_topics_this_week_counts_fractional_seconds_on_cutoff_day() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        let db = Database::new(temp_file.path()).expect("Failed to create test database");
        let today = civil::date(2024, 1, 10);

        // First second of the cutoff day, with fractional seconds
        insert_topic(&db, "alice", "On the cutoff", "2024-01-03T00:00:00.5Z");
        // Just before the cutoff
        insert_topic(&db, "alice", "Too old", "2024-01-02T23:59:59Z");

        let stats = db
            .statistics("alice", today)
            .expect("Failed to compute statistics");
        assert_eq!(stats.topics_this_week, 1);
    }
}
