//! Profile lifecycle commands

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use copywriter::StateStore;

use crate::context::AppContext;

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// List all profiles
    List,
    /// Show a profile (the current one by default)
    Show { name: Option<String> },
    /// Create a new empty profile and make it current
    New { name: String },
    /// Switch the current profile
    Use { name: String },
    /// Rename a profile, keeping its data
    Rename { old: String, new: String },
    /// Delete a profile after confirmation
    Delete { name: String },
    /// Set fields on the current profile
    Set {
        /// Brand description
        #[arg(long)]
        brand: Option<String>,

        /// Comma-separated forbidden terms
        #[arg(long)]
        blacklist: Option<String>,

        /// Product information
        #[arg(long)]
        product: Option<String>,
    },
}

pub async fn run(ctx: &AppContext, command: ProfileCommand) -> Result<()> {
    let mut doc = ctx.store.load().await?;

    match command {
        ProfileCommand::List => {
            if doc.profiles.is_empty() {
                println!("No profiles yet. Create one with `copysmith profile new <name>`.");
            }
            for name in doc.profiles.keys() {
                if *name == doc.current_profile {
                    println!("* {}", name.bold());
                } else {
                    println!("  {name}");
                }
            }
        }
        ProfileCommand::Show { name } => {
            let name = name.unwrap_or_else(|| doc.current_profile.clone());
            let profile = doc.profiles.get(&name).cloned().unwrap_or_default();

            ctx.print_header(&name);
            println!("Brand profile: {}", or_none(&profile.brand_profile));
            println!("Blacklist:     {}", or_none(&profile.blacklist));
            println!("Product info:  {}", or_none(&profile.product_info));
        }
        ProfileCommand::New { name } => {
            doc.create_profile(&name)?;
            doc.page = "profil".to_string();
            ctx.store.save(&doc).await?;
            ctx.print_success(&format!("Created profile '{name}' and made it current"));
        }
        ProfileCommand::Use { name } => {
            doc.use_profile(&name)?;
            doc.page = "profil".to_string();
            ctx.store.save(&doc).await?;
            ctx.print_success(&format!("Current profile is now '{name}'"));
        }
        ProfileCommand::Rename { old, new } => {
            doc.rename_profile(&old, &new)?;
            doc.page = "profil".to_string();
            ctx.store.save(&doc).await?;
            ctx.print_success(&format!("Renamed profile '{old}' to '{new}'"));
        }
        ProfileCommand::Delete { name } => {
            doc.mark_for_delete(&name)?;
            ctx.store.save(&doc).await?;

            if ctx.confirm(&format!("Delete profile '{name}'?"), false)? {
                let removed = doc.confirm_delete()?;
                ctx.store.save(&doc).await?;
                ctx.print_success(&format!("Deleted profile '{removed}'"));
            } else {
                doc.cancel_delete();
                ctx.store.save(&doc).await?;
                println!("Delete cancelled");
            }
        }
        ProfileCommand::Set {
            brand,
            blacklist,
            product,
        } => {
            let name = doc.current_profile.clone();
            let mut profile = doc.current();
            if let Some(brand) = brand {
                profile.brand_profile = brand;
            }
            if let Some(blacklist) = blacklist {
                profile.blacklist = blacklist;
            }
            if let Some(product) = product {
                profile.product_info = product;
            }
            doc.save_profile(&name, profile);
            doc.page = "profil".to_string();
            ctx.store.save(&doc).await?;
            ctx.print_success(&format!("Updated profile '{name}'"));
        }
    }

    Ok(())
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "(ingen)"
    } else {
        value
    }
}
