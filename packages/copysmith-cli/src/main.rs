// Main entry point for the copysmith CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::context::AppContext;

mod cmd;
mod config;
mod context;

#[derive(Parser)]
#[command(name = "copysmith", version, about = "Danish SEO copywriting toolkit")]
struct Cli {
    /// Path to the state file
    #[arg(
        long,
        global = true,
        env = "COPYSMITH_STATE",
        default_value = "copysmith.json"
    )]
    state: PathBuf,

    /// Answer yes to confirmation prompts
    #[arg(long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage brand profiles
    Profile {
        #[command(subcommand)]
        command: cmd::profile::ProfileCommand,
    },
    /// Generate SEO texts from the current profile
    Generate(cmd::generate::GenerateArgs),
    /// Inspect and prune generated texts
    Texts {
        #[command(subcommand)]
        command: cmd::texts::TextsCommand,
    },
    /// Fetch website content into the current profile
    Scrape {
        #[command(subcommand)]
        command: cmd::scrape::ScrapeCommand,
    },
    /// Translate a Shopify product-export CSV
    Translate(cmd::translate::TranslateArgs),
    /// Manage the stored API key
    Key {
        #[command(subcommand)]
        command: cmd::key::KeyCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,copywriter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.state, cli.yes);

    match cli.command {
        Command::Profile { command } => cmd::profile::run(&ctx, command).await,
        Command::Generate(args) => cmd::generate::run(&ctx, args).await,
        Command::Texts { command } => cmd::texts::run(&ctx, command).await,
        Command::Scrape { command } => cmd::scrape::run(&ctx, command).await,
        Command::Translate(args) => cmd::translate::run(&ctx, args).await,
        Command::Key { command } => cmd::key::run(&ctx, command).await,
    }
}
