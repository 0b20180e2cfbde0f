//! SEO text generation command

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;

use copywriter::{generate_seo_texts, word_count, HeadingStyle, OutputFormat, SeoBrief, StateStore};

use crate::config::Config;
use crate::context::AppContext;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Plain,
    Markdown,
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadingArg {
    Keep,
    Strip,
    Bold,
}

impl From<HeadingArg> for HeadingStyle {
    fn from(value: HeadingArg) -> Self {
        match value {
            HeadingArg::Keep => HeadingStyle::Keep,
            HeadingArg::Strip => HeadingStyle::Strip,
            HeadingArg::Bold => HeadingStyle::Bold,
        }
    }
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Main keyword / topic
    #[arg(long)]
    pub keyword: String,

    /// Audience segment
    #[arg(long, default_value = "B2C (forbrugere)")]
    pub audience: String,

    /// Purpose of the text
    #[arg(long, default_value = "Salg/landingsside")]
    pub purpose: String,

    /// Tone of voice
    #[arg(long, default_value = "Neutral")]
    pub tone: String,

    /// Minimum word count
    #[arg(long, default_value_t = 700)]
    pub min_words: usize,

    /// Related keywords, comma-separated
    #[arg(long, default_value = "")]
    pub related: String,

    /// Include a FAQ section
    #[arg(long)]
    pub faq: bool,

    /// Include meta title and description
    #[arg(long)]
    pub meta: bool,

    /// Include internal links
    #[arg(long)]
    pub links: bool,

    /// End with a call to action
    #[arg(long)]
    pub cta: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Html)]
    pub format: FormatArg,

    /// Heading post-processing
    #[arg(long, value_enum, default_value_t = HeadingArg::Keep)]
    pub headings: HeadingArg,

    /// Number of texts to generate
    #[arg(long, default_value_t = 1)]
    pub count: usize,
}

pub async fn run(ctx: &AppContext, args: GenerateArgs) -> Result<()> {
    let mut doc = ctx.store.load().await?;
    let config = Config::resolve(doc.api_key.as_deref())?;
    let generator = config.generator();

    let brief = SeoBrief::new(&args.keyword)
        .with_audience(&args.audience)
        .with_purpose(&args.purpose)
        .with_tone(&args.tone)
        .with_min_words(args.min_words)
        .with_related_keywords(&args.related)
        .with_faq(args.faq)
        .with_meta(args.meta)
        .with_internal_links(args.links)
        .with_cta(args.cta)
        .with_format(args.format.into())
        .with_heading_style(args.headings.into());

    let profile = doc.current();
    ctx.print_header(&format!(
        "Generating {} text(s) about '{}' with profile '{}'",
        args.count, args.keyword, doc.current_profile
    ));

    let texts = generate_seo_texts(&generator, &brief, &profile, args.count)
        .await
        .context("generation failed")?;

    let first_index = doc.generated_texts.len();
    for (offset, text) in texts.iter().enumerate() {
        println!();
        println!(
            "{}",
            format!(
                "--- SEO text {} ({} words) ---",
                first_index + offset + 1,
                word_count(text)
            )
            .bold()
        );
        println!("{text}");
    }

    for text in texts {
        doc.push_text(text);
    }
    doc.page = "seo".to_string();
    ctx.store.save(&doc).await?;
    ctx.print_success(&format!("Saved {} new text(s)", doc.generated_texts.len() - first_index));

    Ok(())
}
