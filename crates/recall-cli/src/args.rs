use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CompleteArgs, PostponeArgs, ReviewCommands, TopicCommands};

/// Main command-line interface for the Recall review scheduler
///
/// Recall is a spaced-repetition scheduling tool that tracks topics you want
/// to retain and tells you when to review them. Completing a review doubles
/// the interval to the next one; postponing defers it without growing the
/// interval. All data is scoped to an owner identity, so one database can
/// serve several users.
#[derive(Parser)]
#[command(version, about, name = "recall")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/recall/recall.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Owner identity to operate as. Defaults to $USER, then "default"
    #[arg(long, global = true)]
    pub owner: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Recall CLI
///
/// The CLI is organized into two command groups plus everyday shortcuts:
/// - `topic`: Operations for managing topics (create, list, update, etc.)
/// - `review`: Operations for inspecting scheduled revisions
/// - `complete`/`postpone`/`due`/`overdue`/`stats`/`now`: the daily workflow
#[derive(Subcommand)]
pub enum Commands {
    /// Manage topics
    #[command(alias = "t")]
    Topic {
        #[command(subcommand)]
        command: TopicCommands,
    },
    /// Inspect scheduled revisions
    #[command(alias = "r")]
    Review {
        #[command(subcommand)]
        command: ReviewCommands,
    },
    /// Complete a pending revision and schedule the next one
    #[command(alias = "c")]
    Complete(CompleteArgs),
    /// Postpone a pending revision by a number of days
    #[command(alias = "p")]
    Postpone(PostponeArgs),
    /// Show revisions due today
    Due,
    /// Show pending revisions scheduled before today
    Overdue,
    /// Show review statistics
    Stats,
    /// Show the scheduler's current time and date
    Now,
}
