//! The text refinement pipeline.
//!
//! Stages, in run order:
//! - [`assemble`] - brief + profile -> base prompt
//! - [`expand`] - bounded iterative length extension
//! - [`blacklist`] - bounded best-effort rewrite of forbidden terms
//! - [`generate`] - the sequential per-run orchestration

pub mod assemble;
pub mod blacklist;
pub mod expand;
pub mod generate;
pub mod prompts;

pub use assemble::render_prompt;
pub use blacklist::{blacklist_terms, find_blacklisted, rewrite_blacklisted};
pub use expand::{extend_to_word_count, word_count};
pub use generate::{apply_heading_style, generate_seo_texts, EXTENSION_TRIES, REWRITE_TRIES};
