//! Aggregate statistics and server time views.

use jiff::{civil, Zoned};
use serde::{Deserialize, Serialize};

/// Rollup counts for everything a single owner has scheduled.
///
/// All counts are computed from current state on demand; nothing is cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnerStatistics {
    /// Number of topics owned
    pub total_topics: u64,
    /// Number of revisions across all owned topics, any status
    pub total_revisions: u64,
    /// Number of completed revisions
    pub completed_revisions: u64,
    /// Number of pending revisions
    pub pending_revisions: u64,
    /// Topics created within the trailing seven days
    pub topics_this_week: u64,
    /// Revisions whose completion date is today
    pub revisions_completed_today: u64,
    /// `total_topics / max(1, days since the oldest topic was created)`.
    /// The one-day floor keeps a brand-new account from dividing by zero.
    pub avg_daily_topics: f64,
}

/// The scheduler's authoritative notion of "now".
///
/// All scheduling math is anchored to the server's current date, not
/// client-supplied timestamps; exposing this lets a caller reconcile its own
/// clock against the server's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerTime {
    /// Full zoned datetime on the server
    pub datetime: Zoned,
    /// The calendar date every "due today" computation uses
    pub date: civil::Date,
    /// IANA identifier of the server's configured timezone, when known
    pub timezone: String,
}
