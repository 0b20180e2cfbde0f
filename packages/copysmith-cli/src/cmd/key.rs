//! Stored API key commands

use anyhow::Result;
use clap::Subcommand;

use copywriter::StateStore;

use crate::context::AppContext;

#[derive(Subcommand)]
pub enum KeyCommand {
    /// Store an API key in the state file
    Set { key: String },
    /// Remove the stored API key
    Clear,
    /// Show whether a key is stored
    Show,
}

pub async fn run(ctx: &AppContext, command: KeyCommand) -> Result<()> {
    let mut doc = ctx.store.load().await?;

    match command {
        KeyCommand::Set { key } => {
            doc.api_key = Some(key);
            ctx.store.save(&doc).await?;
            ctx.print_success("API key stored");
        }
        KeyCommand::Clear => {
            doc.api_key = None;
            ctx.store.save(&doc).await?;
            ctx.print_success("API key cleared");
        }
        KeyCommand::Show => match &doc.api_key {
            Some(key) => {
                let masked: String = key.chars().take(8).collect();
                println!("Stored key: {masked}…");
            }
            None => println!("No stored API key"),
        },
    }

    Ok(())
}
