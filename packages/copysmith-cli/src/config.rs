//! Generation configuration loaded from the environment.

use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use copywriter::ai::OpenAIGenerator;
use openai_client::OpenAIClient;

/// Configuration for actions that call the LLM.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub model: String,
}

impl Config {
    /// Resolve configuration from the environment, falling back to the key
    /// stored in the state file. Without a key, generation actions halt.
    pub fn resolve(stored_key: Option<&str>) -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| stored_key.map(str::to_string))
            .context("OPENAI_API_KEY must be set (environment, .env, or `copysmith key set`)")?;

        let model = env::var("COPYSMITH_MODEL").unwrap_or_else(|_| "gpt-4-turbo".to_string());

        Ok(Self {
            openai_api_key,
            model,
        })
    }

    /// Build the OpenAI-backed generator.
    pub fn generator(&self) -> OpenAIGenerator {
        OpenAIGenerator::new(OpenAIClient::new(&self.openai_api_key), &self.model)
    }
}
