//! Website scraping commands

use anyhow::{ensure, Result};
use clap::{Subcommand, ValueEnum};

use copywriter::{PageFetcher, StateStore};

use crate::context::AppContext;

#[derive(Subcommand)]
pub enum ScrapeCommand {
    /// Fetch a page and print or store its text
    Page {
        url: String,

        /// Store the text on the current profile
        #[arg(long, value_enum)]
        save: Option<SaveField>,
    },
    /// Collect product page texts from a collection page
    Products {
        url: String,

        /// Path prefix product links must match
        #[arg(long, default_value = "/products/")]
        prefix: String,

        /// Maximum number of product pages to fetch
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Store the flattened text as the current profile's product info
        #[arg(long)]
        save: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SaveField {
    Brand,
    Product,
}

pub async fn run(ctx: &AppContext, command: ScrapeCommand) -> Result<()> {
    let mut doc = ctx.store.load().await?;
    let fetcher = PageFetcher::new();

    match command {
        ScrapeCommand::Page { url, save } => {
            let text = fetcher.page_text(&url).await?;

            match save {
                None => println!("{text}"),
                Some(field) => {
                    let name = doc.current_profile.clone();
                    let mut profile = doc.current();
                    match field {
                        SaveField::Brand => profile.brand_profile = text,
                        SaveField::Product => profile.product_info = text,
                    }
                    doc.save_profile(&name, profile);
                    ctx.store.save(&doc).await?;
                    ctx.print_success(&format!("Stored page text on profile '{name}'"));
                }
            }
        }
        ScrapeCommand::Products {
            url,
            prefix,
            limit,
            save,
        } => {
            let mut links = fetcher.collection_links(&url, &prefix).await?;
            ensure!(
                !links.is_empty(),
                "no links under '{prefix}' found on {url}"
            );
            links.truncate(limit);
            ctx.print_info(&format!("Fetching {} product page(s)", links.len()));

            let texts = fetcher.fetch_texts(&links).await;
            let flattened = texts.join("\n\n---\n\n");

            if save {
                let name = doc.current_profile.clone();
                let mut profile = doc.current();
                profile.product_info = flattened;
                doc.save_profile(&name, profile);
                ctx.store.save(&doc).await?;
                ctx.print_success(&format!(
                    "Stored {} product page(s) on profile '{name}'",
                    texts.len()
                ));
            } else {
                println!("{flattened}");
            }
        }
    }

    Ok(())
}
