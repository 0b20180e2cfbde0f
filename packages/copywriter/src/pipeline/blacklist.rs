//! Blacklist detection and best-effort rewrite.
//!
//! Terms come from the profile as one comma-separated string. Matching is
//! case-insensitive substring matching; the rewrite loop is bounded and may
//! leave violations behind after exhausting its attempts.

use tracing::warn;

use crate::error::Result;
use crate::pipeline::prompts;
use crate::traits::generator::{GenerationRequest, TextGenerator};

/// Parse a comma-separated blacklist into lowercase trimmed terms.
pub fn blacklist_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Return the terms present in `text`, case-insensitively.
pub fn find_blacklisted<'a>(text: &str, terms: &'a [String]) -> Vec<&'a str> {
    let haystack = text.to_lowercase();
    terms
        .iter()
        .filter(|term| haystack.contains(term.as_str()))
        .map(|term| term.as_str())
        .collect()
}

/// Rewrite `text` until no blacklisted terms remain or `max_tries` rewrite
/// calls have been made.
///
/// An empty blacklist returns the input unchanged with zero calls. The final
/// text is returned as-is after exhaustion, violations or not.
pub async fn rewrite_blacklisted(
    generator: &dyn TextGenerator,
    text: String,
    blacklist: &str,
    max_tries: usize,
) -> Result<String> {
    let terms = blacklist_terms(blacklist);
    if terms.is_empty() {
        return Ok(text);
    }

    let mut current = text;
    for attempt in 0..max_tries {
        let found = find_blacklisted(&current, &terms);
        if found.is_empty() {
            return Ok(current);
        }

        warn!(attempt, terms = ?found, "blacklisted terms present, requesting rewrite");
        let prompt = prompts::format_rewrite_prompt(&current, &found);
        current = generator.generate(GenerationRequest::new(prompt)).await?;
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGenerator;

    #[test]
    fn test_blacklist_terms_parsing() {
        assert_eq!(
            blacklist_terms("Billig, DISCOUNT , tilbud"),
            vec!["billig", "discount", "tilbud"]
        );
        assert_eq!(blacklist_terms(""), Vec::<String>::new());
        assert_eq!(blacklist_terms(" , ,, "), Vec::<String>::new());
    }

    #[test]
    fn test_find_blacklisted_is_case_insensitive() {
        let terms = blacklist_terms("billig, discount");
        let found = find_blacklisted("Vores BILLIGE krus er gode", &terms);
        assert_eq!(found, vec!["billig"]);

        assert!(find_blacklisted("Kvalitetskrus i stentøj", &terms).is_empty());
    }

    #[tokio::test]
    async fn test_empty_blacklist_returns_input_with_zero_calls() {
        let generator = MockGenerator::new();

        let text = rewrite_blacklisted(&generator, "En tekst".to_string(), "", 2)
            .await
            .unwrap();
        assert_eq!(text, "En tekst");
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_no_matches_issues_zero_calls() {
        let generator = MockGenerator::new();

        let text = rewrite_blacklisted(
            &generator,
            "Kvalitetskrus i stentøj".to_string(),
            "billig, discount",
            2,
        )
        .await
        .unwrap();
        assert_eq!(text, "Kvalitetskrus i stentøj");
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_rewrite_stops_when_matches_clear() {
        let generator = MockGenerator::new().with_response("Prisvenlige krus i stentøj");

        let text = rewrite_blacklisted(
            &generator,
            "Billige krus i stentøj".to_string(),
            "billig",
            2,
        )
        .await
        .unwrap();
        assert_eq!(text, "Prisvenlige krus i stentøj");
        assert_eq!(generator.call_count(), 1);

        // the rewrite prompt named the offending term
        assert!(generator.calls()[0].prompt.contains("billig"));
    }

    #[tokio::test]
    async fn test_rewrite_exhausts_attempts_when_matches_persist() {
        let generator = MockGenerator::new().with_default_response("Stadig billige krus");

        let text = rewrite_blacklisted(
            &generator,
            "Billige krus".to_string(),
            "billig",
            2,
        )
        .await
        .unwrap();

        // best effort: violations may remain after max_tries calls
        assert_eq!(text, "Stadig billige krus");
        assert_eq!(generator.call_count(), 2);
    }
}
