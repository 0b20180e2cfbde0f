//! Bounded iterative length-extension.
//!
//! One generation call, then up to `max_tries - 1` follow-up calls asking
//! the model to extend the draft. The loop always returns some text; it does
//! not guarantee the target is met. Transport failures propagate immediately
//! and are never retried here.

use tracing::debug;

use crate::error::Result;
use crate::pipeline::prompts;
use crate::traits::generator::{GenerationRequest, TextGenerator};

/// Count words by whitespace splitting.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Generate text from `base_prompt`, retrying with extension prompts until
/// `min_words` is reached or `max_tries` calls have been made.
///
/// The draft is replaced with each response unconditionally, even when the
/// new response still falls short.
pub async fn extend_to_word_count(
    generator: &dyn TextGenerator,
    base_prompt: &str,
    min_words: usize,
    max_tries: usize,
) -> Result<String> {
    let mut draft = generator
        .generate(GenerationRequest::new(base_prompt))
        .await?;

    if word_count(&draft) >= min_words {
        return Ok(draft);
    }

    for attempt in 1..max_tries {
        let have = word_count(&draft);
        let deficit = min_words.saturating_sub(have);
        debug!(attempt, have, min_words, "draft below target, requesting extension");

        let prompt = prompts::format_extension_prompt(&draft, min_words, deficit);
        draft = generator.generate(GenerationRequest::new(prompt)).await?;

        if word_count(&draft) >= min_words {
            return Ok(draft);
        }
    }

    debug!(have = word_count(&draft), min_words, "extension attempts exhausted");
    Ok(draft)
}
