//! Profile-Driven Danish SEO Copywriting Library
//!
//! Generates Danish SEO copy from a brand profile and a generation brief,
//! with two bounded post-processing passes: iterative length extension and
//! best-effort blacklist rewriting.
//!
//! # Design Philosophy
//!
//! - Explicit state: one document struct, passed in and out, no globals
//! - Pure-ish pipeline: refinement loops take the generator as a parameter
//!   so tests can script it
//! - Last write wins: the persisted document is overwritten wholesale, by
//!   policy
//!
//! # Usage
//!
//! ```rust,ignore
//! use copywriter::{generate_seo_texts, JsonFileStore, SeoBrief, StateStore};
//! use copywriter::ai::OpenAIGenerator;
//! use openai_client::OpenAIClient;
//!
//! let store = JsonFileStore::new("copysmith.json");
//! let mut doc = store.load().await?;
//!
//! let gen = OpenAIGenerator::new(OpenAIClient::from_env()?, "gpt-4-turbo");
//! let brief = SeoBrief::new("håndlavede keramikkrus").with_faq(true);
//!
//! for text in generate_seo_texts(&gen, &brief, &doc.current(), 2).await? {
//!     doc.push_text(text);
//! }
//! store.save(&doc).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The generator seam
//! - [`types`] - Profile, persisted document, generation brief
//! - [`pipeline`] - Prompt assembly and the two refinement loops
//! - [`store`] - JSON file and in-memory persistence
//! - [`fetch`] - Page text and product-link acquisition
//! - [`translate`] - Shopify CSV batch translation
//! - [`testing`] - Scripted mock generator

pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod store;
pub mod testing;
pub mod traits;
pub mod translate;
pub mod types;

#[cfg(feature = "openai")]
pub mod ai;

// Re-export core types at crate root
pub use error::{CopyError, FetchError, ProfileError, StoreError, TranslateError};
pub use traits::generator::{GenerationRequest, TextGenerator, DEFAULT_MAX_TOKENS};
pub use types::{
    brief::{HeadingStyle, OutputFormat, SeoBrief, AUDIENCES, PURPOSES, TONES},
    document::{AppDocument, DEFAULT_PROFILE},
    profile::Profile,
};

// Re-export pipeline components
pub use pipeline::{
    apply_heading_style, blacklist_terms, extend_to_word_count, find_blacklisted,
    generate_seo_texts, render_prompt, rewrite_blacklisted, word_count, EXTENSION_TRIES,
    REWRITE_TRIES,
};

// Re-export stores
pub use store::{JsonFileStore, MemoryStore, StateStore};

// Re-export fetch and translation
pub use fetch::PageFetcher;
pub use translate::{translate_csv, TranslateReport, SUPPORTED_LOCALES};

// Re-export testing utilities
pub use testing::MockGenerator;
