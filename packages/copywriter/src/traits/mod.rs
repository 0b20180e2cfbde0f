//! Core trait abstractions.

pub mod generator;

pub use generator::{GenerationRequest, TextGenerator, DEFAULT_MAX_TOKENS};
