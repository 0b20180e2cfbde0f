//! Generated-text management commands

use anyhow::{ensure, Context, Result};
use clap::Subcommand;
use colored::Colorize;

use copywriter::{word_count, StateStore};

use crate::context::AppContext;

#[derive(Subcommand)]
pub enum TextsCommand {
    /// List generated texts
    List,
    /// Print one text in full (1-based index)
    Show { index: usize },
    /// Delete one text (1-based index)
    Delete { index: usize },
}

pub async fn run(ctx: &AppContext, command: TextsCommand) -> Result<()> {
    let mut doc = ctx.store.load().await?;

    match command {
        TextsCommand::List => {
            if doc.generated_texts.is_empty() {
                println!("No generated texts yet.");
            }
            for (i, text) in doc.generated_texts.iter().enumerate() {
                println!(
                    "{} ({} words) {}",
                    format!("{:3}.", i + 1).bold(),
                    word_count(text),
                    preview(text)
                );
            }
        }
        TextsCommand::Show { index } => {
            ensure!(index >= 1, "indices are 1-based");
            let text = doc
                .generated_texts
                .get(index - 1)
                .with_context(|| format!("no text with index {index}"))?;
            println!("{text}");
        }
        TextsCommand::Delete { index } => {
            ensure!(index >= 1, "indices are 1-based");
            doc.remove_text(index - 1)
                .with_context(|| format!("no text with index {index}"))?;
            ctx.store.save(&doc).await?;
            ctx.print_success(&format!("Deleted text {index}"));
        }
    }

    Ok(())
}

fn preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("");
    let mut preview: String = first_line.chars().take(60).collect();
    if first_line.chars().count() > 60 {
        preview.push('…');
    }
    preview
}
