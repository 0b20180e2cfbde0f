//! Generator implementations.
//!
//! This module provides the reference implementation of [`TextGenerator`]
//! backed by the OpenAI chat API. Users can use it directly or implement
//! their own.
//!
//! [`TextGenerator`]: crate::traits::generator::TextGenerator

#[cfg(feature = "openai")]
mod openai;

#[cfg(feature = "openai")]
pub use openai::OpenAIGenerator;
