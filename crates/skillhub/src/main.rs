//! Skill Hub - command-line client for the Skill Hub learning platform
//!
//! Main entry point for the skillhub CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{
    auth, comments, config, followers, likes, notifications, plans, posts, progress, skills,
    users,
};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Skill Hub - share skills, follow learning plans, track progress
#[derive(Parser)]
#[command(name = "skillhub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Backend URL (default: current context, then http://localhost:8080)
    #[arg(long, global = true, env = "SKILLHUB_API_URL")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in, sign up and inspect the session
    Auth(auth::AuthArgs),

    /// Connection contexts
    Config(config::ConfigArgs),

    /// Browse and manage the skill catalogue
    Skills(skills::SkillsArgs),

    /// Create and browse skill posts
    Posts(posts::PostsArgs),

    /// Comment on posts
    Comments(comments::CommentsArgs),

    /// Like and unlike posts
    Likes(likes::LikesArgs),

    /// Read notifications
    Notifications(notifications::NotificationsArgs),

    /// Manage learning plans and their items
    Plans(plans::PlansArgs),

    /// Record progress against learning plans
    Progress(progress::ProgressArgs),

    /// Follow other learners
    Followers(followers::FollowersArgs),

    /// Profiles and skill preferences
    Users(users::UsersArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Console (human-readable) + rotating JSON file
    let filter = if cli.verbose {
        "skillhub=debug,skillhub_client=debug,skillhub_config=debug,info"
    } else {
        "skillhub=info,skillhub_client=info,skillhub_config=info,warn"
    };

    let log_dir = skillhub_config::log_dir();
    let file_appender = tracing_appender::rolling::daily(&log_dir, "skillhub.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "skillhub=trace,skillhub_client=trace,skillhub_config=trace,info",
                )),
        )
        .init();

    let ctx = commands::Context {
        server_override: cli.server,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Auth(args) => auth::run(args, &ctx).await,
        Commands::Config(args) => config::run(args, &ctx).await,
        Commands::Skills(args) => skills::run(args, &ctx).await,
        Commands::Posts(args) => posts::run(args, &ctx).await,
        Commands::Comments(args) => comments::run(args, &ctx).await,
        Commands::Likes(args) => likes::run(args, &ctx).await,
        Commands::Notifications(args) => notifications::run(args, &ctx).await,
        Commands::Plans(args) => plans::run(args, &ctx).await,
        Commands::Progress(args) => progress::run(args, &ctx).await,
        Commands::Followers(args) => followers::run(args, &ctx).await,
        Commands::Users(args) => users::run(args, &ctx).await,
    }
}
