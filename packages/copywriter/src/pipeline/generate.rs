//! Generation runs: assemble, extend, rewrite, post-process.

use tracing::info;

use crate::error::Result;
use crate::pipeline::assemble::render_prompt;
use crate::pipeline::blacklist::rewrite_blacklisted;
use crate::pipeline::expand::extend_to_word_count;
use crate::traits::generator::TextGenerator;
use crate::types::brief::{HeadingStyle, SeoBrief};
use crate::types::profile::Profile;

/// Attempt budget for the length-extension loop.
pub const EXTENSION_TRIES: usize = 3;

/// Attempt budget for the blacklist-rewrite loop.
pub const REWRITE_TRIES: usize = 2;

/// Generate `count` finished SEO texts, sequentially.
///
/// Each iteration runs the full chain: prompt assembly, length extension,
/// blacklist rewrite, heading post-processing. One blocking call at a time;
/// a failure aborts the whole run.
pub async fn generate_seo_texts(
    generator: &dyn TextGenerator,
    brief: &SeoBrief,
    profile: &Profile,
    count: usize,
) -> Result<Vec<String>> {
    let base_prompt = render_prompt(brief, profile);
    let mut texts = Vec::with_capacity(count);

    for run in 1..=count {
        info!(run, count, keyword = %brief.keyword, "generating SEO text");

        let draft =
            extend_to_word_count(generator, &base_prompt, brief.min_words, EXTENSION_TRIES)
                .await?;
        let cleaned =
            rewrite_blacklisted(generator, draft, &profile.blacklist, REWRITE_TRIES).await?;

        texts.push(apply_heading_style(&cleaned, brief.heading_style));
    }

    Ok(texts)
}

/// Apply the chosen `###` heading treatment.
pub fn apply_heading_style(text: &str, style: HeadingStyle) -> String {
    match style {
        HeadingStyle::Keep => text.to_string(),
        HeadingStyle::Strip => text.replace("### ", ""),
        HeadingStyle::Bold => text
            .lines()
            .map(|line| match line.trim_start().strip_prefix("### ") {
                Some(heading) => format!("**{}**", heading),
                None => line.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGenerator;

    fn profile_with_blacklist(blacklist: &str) -> Profile {
        Profile {
            brand_profile: "Keramikværksted".to_string(),
            blacklist: blacklist.to_string(),
            product_info: "Krus".to_string(),
        }
    }

    #[tokio::test]
    async fn test_sequential_run_produces_count_texts() {
        let generator =
            MockGenerator::new().with_default_response("en fin lang tekst om keramik");

        let texts = generate_seo_texts(
            &generator,
            &SeoBrief::new("krus").with_min_words(3),
            &profile_with_blacklist(""),
            3,
        )
        .await
        .unwrap();

        assert_eq!(texts.len(), 3);
        // empty blacklist: exactly one call per text
        assert_eq!(generator.call_count(), 3);
    }

    #[tokio::test]
    async fn test_run_chains_extension_and_rewrite() {
        let generator = MockGenerator::new()
            .with_response("billig") // draft below target
            .with_response("billige krus er gode krus") // extension reaches target
            .with_response("prisvenlige krus er gode krus"); // rewrite clears the term

        let texts = generate_seo_texts(
            &generator,
            &SeoBrief::new("krus").with_min_words(4),
            &profile_with_blacklist("billig"),
            1,
        )
        .await
        .unwrap();

        assert_eq!(texts, vec!["prisvenlige krus er gode krus"]);
        assert_eq!(generator.call_count(), 3);
    }

    #[tokio::test]
    async fn test_failure_aborts_run() {
        let generator = MockGenerator::new().failing();

        let result = generate_seo_texts(
            &generator,
            &SeoBrief::new("krus"),
            &profile_with_blacklist(""),
            2,
        )
        .await;
        assert!(result.is_err());
        assert_eq!(generator.call_count(), 1);
    }

    #[test]
    fn test_heading_styles() {
        let text = "### Overskrift\nBrødtekst uden markering.";

        assert_eq!(apply_heading_style(text, HeadingStyle::Keep), text);
        assert_eq!(
            apply_heading_style(text, HeadingStyle::Strip),
            "Overskrift\nBrødtekst uden markering."
        );
        assert_eq!(
            apply_heading_style(text, HeadingStyle::Bold),
            "**Overskrift**\nBrødtekst uden markering."
        );
    }
}
