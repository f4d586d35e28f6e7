//! Recall CLI Application
//!
//! Command-line interface for the Recall spaced-repetition review scheduler.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use recall_core::SchedulerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

/// Resolve the owner identity: explicit flag first, then $USER, then a
/// fixed fallback so single-user setups work without any configuration.
fn resolve_owner(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("USER").ok())
        .filter(|owner| !owner.trim().is_empty())
        .unwrap_or_else(|| "default".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        owner,
        no_color,
        command,
    } = Args::parse();

    let scheduler = SchedulerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize scheduler")?;

    let renderer = TerminalRenderer::new(!no_color);
    let owner = resolve_owner(owner);

    info!("Recall started (owner: {owner})");

    let cli = Cli::new(scheduler, renderer, owner);

    match command {
        Some(Topic { command }) => cli.handle_topic_command(command).await,
        Some(Review { command }) => cli.handle_review_command(command).await,
        Some(Complete(args)) => cli.complete(args).await,
        Some(Postpone(args)) => cli.postpone(args).await,
        Some(Due) => cli.due().await,
        Some(Overdue) => cli.overdue().await,
        Some(Stats) => cli.stats().await,
        Some(Now) => cli.now(),
        // Bare invocation shows what needs reviewing today
        None => cli.due().await,
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_owner;

    #[test]
    fn test_resolve_owner_prefers_flag() {
        assert_eq!(resolve_owner(Some("carol".to_string())), "carol");
    }

    #[test]
    fn test_resolve_owner_never_empty() {
        let owner = resolve_owner(None);
        assert!(!owner.is_empty());
    }
}
