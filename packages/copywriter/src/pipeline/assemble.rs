//! Prompt assembly: brief + profile -> one instruction string.
//!
//! Deterministic string composition. Toggle clauses follow the declaration
//! order on [`SeoBrief`]: FAQ, meta, internal links, CTA. No validation of
//! the resulting prompt length is performed here.

use crate::pipeline::prompts;
use crate::types::brief::{OutputFormat, SeoBrief};
use crate::types::profile::Profile;

/// Build the base generation prompt for one run.
pub fn render_prompt(brief: &SeoBrief, profile: &Profile) -> String {
    let mut prompt = format!(
        "Skriv en SEO-optimeret tekst på dansk om '{}'.\n",
        brief.keyword
    );
    prompt.push_str(&format!(
        "Formål: {}, Målgruppe: {}, Tone-of-voice: {}.\n",
        brief.purpose, brief.audience, brief.tone
    ));
    prompt.push_str(&format!(
        "Brug brandprofil: {} og produktinfo: {}.\n",
        profile.brand_profile, profile.product_info
    ));
    prompt.push_str(&format!("Min. {} ord.\n", brief.min_words));
    prompt.push_str(prompts::AVOID_CLAUSE);
    prompt.push_str(&format!("Relaterede søgeord: {}.\n", brief.related_keywords));

    prompt.push_str(match brief.format {
        OutputFormat::Plain => prompts::PLAIN_FORMAT_CLAUSE,
        OutputFormat::Markdown => prompts::MARKDOWN_FORMAT_CLAUSE,
        OutputFormat::Html => prompts::HTML_FORMAT_CLAUSE,
    });

    if brief.include_faq {
        prompt.push_str(prompts::FAQ_CLAUSE);
    }
    if brief.include_meta {
        prompt.push_str(prompts::META_CLAUSE);
    }
    if brief.include_internal_links {
        prompt.push_str(prompts::INTERNAL_LINKS_CLAUSE);
    }
    if brief.include_cta {
        prompt.push_str(prompts::CTA_CLAUSE);
    }

    prompt
}
