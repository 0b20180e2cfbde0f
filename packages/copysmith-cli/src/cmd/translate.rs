//! Shopify CSV translation command

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use copywriter::{translate_csv, StateStore, SUPPORTED_LOCALES};

use crate::config::Config;
use crate::context::AppContext;

#[derive(Args)]
pub struct TranslateArgs {
    /// Input CSV (Shopify product export)
    #[arg(long)]
    pub input: PathBuf,

    /// Output CSV
    #[arg(long)]
    pub output: PathBuf,

    /// Locale to translate; repeat for several (defaults to all supported)
    #[arg(long = "locale")]
    pub locales: Vec<String>,
}

pub async fn run(ctx: &AppContext, args: TranslateArgs) -> Result<()> {
    let doc = ctx.store.load().await?;
    let config = Config::resolve(doc.api_key.as_deref())?;
    let generator = config.generator();

    let input = std::fs::File::open(&args.input)
        .with_context(|| format!("cannot open {}", args.input.display()))?;
    let output = std::fs::File::create(&args.output)
        .with_context(|| format!("cannot create {}", args.output.display()))?;

    let selected = if args.locales.is_empty() {
        None
    } else {
        Some(args.locales.as_slice())
    };

    ctx.print_header(&format!(
        "Translating {} ({} supported locales)",
        args.input.display(),
        SUPPORTED_LOCALES.len()
    ));

    let report = translate_csv(&generator, input, output, selected).await?;

    ctx.print_success(&format!(
        "Translated {} row(s), skipped {}, wrote {}",
        report.translated,
        report.skipped,
        args.output.display()
    ));
    if report.failed > 0 {
        ctx.print_warning(&format!(
            "{} row(s) failed; their cells are marked with FEJL:",
            report.failed
        ));
    }

    Ok(())
}
