//! High-level async scheduling engine.
//!
//! The `Scheduler` is the public entry point of the crate. Each operation
//! opens a fresh database connection on a blocking thread, performs the
//! owner-scoped work, and returns; SQLite serializes writers at the file
//! level, so there is no shared connection state to coordinate.

use jiff::{civil, Zoned};

mod builder;
mod handlers;
mod query_ops;
mod revision_ops;
mod topic_ops;

pub use builder::SchedulerBuilder;

/// The source of "today" for scheduling arithmetic.
///
/// Every date the engine computes derives from this clock, so a fixed clock
/// makes completion chains fully deterministic.
#[derive(Debug, Clone)]
pub enum Clock {
    /// The local system date.
    System,
    /// A pinned calendar date.
    Fixed(civil::Date),
}

impl Clock {
    /// The current calendar date according to this clock.
    pub fn today(&self) -> civil::Date {
        match self {
            Clock::System => Zoned::now().date(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Async scheduling engine over the SQLite store.
pub struct Scheduler {
    db_path: std::path::PathBuf,
    clock: Clock,
}

impl Scheduler {
    /// Creates a builder for configuring a scheduler instance.
    pub fn builder() -> SchedulerBuilder {
        SchedulerBuilder::new()
    }

    /// The database path this scheduler operates on.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    pub(crate) fn today(&self) -> civil::Date {
        self.clock.today()
    }
}
