//! Command-line interface definitions and command handlers
//!
//! This module defines the CLI argument structures using clap's derive API
//! and the `Cli` dispatcher that turns parsed arguments into scheduler calls.
//!
//! ## Parameter Wrapper Pattern
//!
//! Argument structs here carry clap-specific attributes (flags, help text,
//! aliases); the core parameter types in `recall_core::params` stay free of
//! framework derives. The dispatcher performs the conversion explicitly,
//! injecting the resolved owner identity that the argument structs never
//! carry themselves:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params (+ owner) → Scheduler
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use jiff::civil;
use recall_core::{
    display::{CompletionResult, CreateResult, DeleteResult, OperationStatus, PostponeResult, Revisions, UpdateResult},
    params::{CreateTopic, DeleteTopic, ListRevisions, ListTopics, OwnedId, PostponeRevision, UpdateTopic},
    Scheduler,
};

use crate::renderer::TerminalRenderer;

/// Create a new topic
///
/// The topic's first revision is scheduled automatically: tomorrow by
/// default, or on the date given with --first-review.
#[derive(Args)]
pub struct CreateTopicArgs {
    /// Title of the topic
    pub title: String,
    /// Optional description providing more context about the topic
    #[arg(short, long)]
    pub description: Option<String>,
    /// Date of the first review (YYYY-MM-DD); defaults to tomorrow
    #[arg(long, value_name = "DATE")]
    pub first_review: Option<civil::Date>,
}

/// Show details of a specific topic
///
/// Displays the topic's metadata and its full revision history, pending and
/// terminal alike, ordered by scheduled date.
#[derive(Args)]
pub struct ShowTopicArgs {
    /// ID of the topic to display
    #[arg(help = "Unique identifier of the topic to show details for")]
    pub id: u64,
}

/// Update a topic's title or description
#[derive(Args)]
pub struct UpdateTopicArgs {
    /// ID of the topic to update
    pub id: u64,
    /// Updated title for the topic
    #[arg(short, long)]
    pub title: Option<String>,
    /// Updated description for the topic
    #[arg(short, long)]
    pub description: Option<String>,
}

/// Delete a topic permanently
#[derive(Args)]
pub struct DeleteTopicArgs {
    /// ID of the topic to delete
    #[arg(help = "Unique identifier of the topic to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum TopicCommands {
    /// Create a new topic
    #[command(alias = "a", alias = "add")]
    Create(CreateTopicArgs),
    /// List all topics
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific topic
    #[command(alias = "s")]
    Show(ShowTopicArgs),
    /// Update a topic's title or description
    #[command(alias = "u")]
    Update(UpdateTopicArgs),
    /// Delete a topic permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTopicArgs),
}

/// List scheduled revisions
///
/// Filters are interpreted leniently: a date or status that does not parse
/// is ignored rather than rejected.
#[derive(Args)]
pub struct ListReviewsArgs {
    /// Only revisions scheduled on this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,
    /// Only revisions in this status (pending, completed, postponed)
    #[arg(long)]
    pub status: Option<String>,
}

/// Show details of a specific revision
#[derive(Args)]
pub struct ShowReviewArgs {
    /// ID of the revision to display
    pub id: u64,
}

/// Delete a revision permanently
#[derive(Args)]
pub struct DeleteReviewArgs {
    /// ID of the revision to delete
    pub id: u64,
}

#[derive(Subcommand)]
pub enum ReviewCommands {
    /// List scheduled revisions
    #[command(aliases = ["l", "ls"])]
    List(ListReviewsArgs),
    /// Show details of a specific revision
    #[command(alias = "s")]
    Show(ShowReviewArgs),
    /// Delete a revision permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteReviewArgs),
}

/// Complete a pending revision
///
/// Marks the revision as completed today and schedules the next review at
/// double the interval.
#[derive(Args)]
pub struct CompleteArgs {
    /// ID of the revision to complete
    pub id: u64,
}

/// Postpone a pending revision
///
/// Marks the revision as postponed and schedules the next review the given
/// number of days from today, keeping the interval unchanged.
#[derive(Args)]
pub struct PostponeArgs {
    /// ID of the revision to postpone
    pub id: u64,
    /// Days to defer by; anything unparseable defaults to 1
    #[arg(short = 'n', long)]
    pub days: Option<String>,
}

/// CLI command dispatcher holding the scheduler, renderer, and resolved
/// owner identity.
pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
    owner: String,
}

impl Cli {
    /// Create a new CLI dispatcher.
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer, owner: String) -> Self {
        Self {
            scheduler,
            renderer,
            owner,
        }
    }

    fn owned_id(&self, id: u64) -> OwnedId {
        OwnedId {
            owner: self.owner.clone(),
            id,
        }
    }

    /// Handle all `topic` subcommands.
    pub async fn handle_topic_command(&self, command: TopicCommands) -> Result<()> {
        match command {
            TopicCommands::Create(args) => self.create_topic(args).await,
            TopicCommands::List => self.list_topics().await,
            TopicCommands::Show(args) => self.show_topic(args).await,
            TopicCommands::Update(args) => self.update_topic(args).await,
            TopicCommands::Delete(args) => self.delete_topic(args).await,
        }
    }

    /// Handle all `review` subcommands.
    pub async fn handle_review_command(&self, command: ReviewCommands) -> Result<()> {
        match command {
            ReviewCommands::List(args) => self.list_reviews(args).await,
            ReviewCommands::Show(args) => self.show_review(args).await,
            ReviewCommands::Delete(args) => self.delete_review(args).await,
        }
    }

    async fn create_topic(&self, args: CreateTopicArgs) -> Result<()> {
        let params = CreateTopic {
            owner: self.owner.clone(),
            title: args.title,
            description: args.description,
            first_revision_date: args.first_review,
        };
        let topic = self.scheduler.create_topic(&params).await?;
        self.renderer.render(&CreateResult::new(topic).to_string())
    }

    /// List the owner's topics as summaries. Also serves as part of the
    /// default invocation output.
    pub async fn list_topics(&self) -> Result<()> {
        let params = ListTopics {
            owner: self.owner.clone(),
        };
        let summaries = self.scheduler.list_topics_summary(&params).await?;
        self.renderer.render(&format!("# Topics\n\n{summaries}"))
    }

    async fn show_topic(&self, args: ShowTopicArgs) -> Result<()> {
        match self
            .scheduler
            .show_topic_with_revisions(&self.owned_id(args.id))
            .await?
        {
            Some(topic) => self.renderer.render(&topic.to_string()),
            None => self.renderer.render(
                &OperationStatus::failure(format!("Topic with ID {} not found", args.id))
                    .to_string(),
            ),
        }
    }

    async fn update_topic(&self, args: UpdateTopicArgs) -> Result<()> {
        let mut changes = Vec::new();
        if args.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if args.description.is_some() {
            changes.push("Updated description".to_string());
        }

        let params = UpdateTopic {
            owner: self.owner.clone(),
            id: args.id,
            title: args.title,
            description: args.description,
        };
        match self.scheduler.update_topic(&params).await? {
            Some(topic) => self
                .renderer
                .render(&UpdateResult::with_changes(topic, changes).to_string()),
            None => self.renderer.render(
                &OperationStatus::failure(format!("Topic with ID {} not found", args.id))
                    .to_string(),
            ),
        }
    }

    async fn delete_topic(&self, args: DeleteTopicArgs) -> Result<()> {
        let params = DeleteTopic {
            owner: self.owner.clone(),
            id: args.id,
            confirmed: args.confirm,
        };
        match self.scheduler.delete_topic(&params).await? {
            Some(topic) => self.renderer.render(&DeleteResult::new(topic).to_string()),
            None => self.renderer.render(
                &OperationStatus::failure(format!("Topic with ID {} not found", args.id))
                    .to_string(),
            ),
        }
    }

    async fn list_reviews(&self, args: ListReviewsArgs) -> Result<()> {
        let params = ListRevisions {
            owner: self.owner.clone(),
            date: args.date,
            status: args.status,
        };
        let revisions = Revisions(self.scheduler.list_revisions(&params).await?);
        self.renderer.render(&format!("# Revisions\n\n{revisions}"))
    }

    async fn show_review(&self, args: ShowReviewArgs) -> Result<()> {
        match self.scheduler.get_revision(&self.owned_id(args.id)).await? {
            Some(revision) => self.renderer.render(&revision.to_string()),
            None => self.renderer.render(
                &OperationStatus::failure(format!("Revision with ID {} not found", args.id))
                    .to_string(),
            ),
        }
    }

    async fn delete_review(&self, args: DeleteReviewArgs) -> Result<()> {
        let params = self.owned_id(args.id);
        match self.scheduler.get_revision(&params).await? {
            Some(revision) => {
                self.scheduler.delete_revision(&params).await?;
                self.renderer
                    .render(&DeleteResult::new(revision).to_string())
            }
            None => self.renderer.render(
                &OperationStatus::failure(format!("Revision with ID {} not found", args.id))
                    .to_string(),
            ),
        }
    }

    /// Complete a pending revision and report the scheduled successor.
    pub async fn complete(&self, args: CompleteArgs) -> Result<()> {
        let successor = self
            .scheduler
            .complete_revision(&self.owned_id(args.id))
            .await?;
        self.renderer
            .render(&CompletionResult::new(args.id, successor).to_string())
    }

    /// Postpone a pending revision and report the deferred successor.
    pub async fn postpone(&self, args: PostponeArgs) -> Result<()> {
        let params = PostponeRevision {
            owner: self.owner.clone(),
            id: args.id,
            days: args.days,
        };
        let successor = self.scheduler.postpone_revision(&params).await?;
        self.renderer
            .render(&PostponeResult::new(args.id, successor).to_string())
    }

    /// Show revisions due today.
    pub async fn due(&self) -> Result<()> {
        let revisions = Revisions(self.scheduler.due_today(&self.owner).await?);
        self.renderer.render(&format!("# Due Today\n\n{revisions}"))
    }

    /// Show pending revisions scheduled before today.
    pub async fn overdue(&self) -> Result<()> {
        let revisions = Revisions(self.scheduler.overdue(&self.owner).await?);
        self.renderer
            .render(&format!("# Overdue Reviews\n\n{revisions}"))
    }

    /// Show aggregate review statistics.
    pub async fn stats(&self) -> Result<()> {
        let stats = self.scheduler.statistics(&self.owner).await?;
        self.renderer.render(&stats.to_string())
    }

    /// Show the scheduler's current time and scheduling date.
    pub fn now(&self) -> Result<()> {
        let time = self.scheduler.server_time();
        self.renderer.render(&time.to_string())
    }
}
