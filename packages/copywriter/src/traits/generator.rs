//! Generator trait abstracting the LLM collaborator.
//!
//! The refinement loops take a generator as a parameter so tests can
//! substitute a scripted fake (see [`crate::testing::MockGenerator`]).

use async_trait::async_trait;

use crate::error::Result;

/// Default output token budget for a generation call.
pub const DEFAULT_MAX_TOKENS: u32 = 3000;

/// A single chat-style generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Optional system instruction
    pub system: Option<String>,

    /// User prompt
    pub prompt: String,

    /// Output token budget
    pub max_tokens: u32,
}

impl GenerationRequest {
    /// Create a request with the default token budget.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Set a system instruction.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the output token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Text generator trait.
///
/// Implementations wrap specific LLM providers and handle the specifics of
/// transport and response cleanup. One call, one completion; transport
/// failures surface as errors and are never retried here.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a single text completion for the request.
    async fn generate(&self, request: GenerationRequest) -> Result<String>;
}
