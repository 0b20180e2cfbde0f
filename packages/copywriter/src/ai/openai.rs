//! OpenAI implementation of the generator trait.

use async_trait::async_trait;
use openai_client::{strip_code_blocks, ChatRequest, Message, OpenAIClient};

use crate::error::{CopyError, Result};
use crate::traits::generator::{GenerationRequest, TextGenerator};

/// OpenAI-backed text generator.
///
/// # Example
///
/// ```rust,ignore
/// use copywriter::ai::OpenAIGenerator;
/// use openai_client::OpenAIClient;
///
/// let client = OpenAIClient::from_env()?;
/// let gen = OpenAIGenerator::new(client, "gpt-4-turbo");
/// ```
#[derive(Clone)]
pub struct OpenAIGenerator {
    client: OpenAIClient,
    model: String,
    temperature: Option<f32>,
}

impl OpenAIGenerator {
    /// Create a generator for the given client and chat model.
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            temperature: None,
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[async_trait]
impl TextGenerator for OpenAIGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String> {
        let mut chat = ChatRequest::new(&self.model).max_tokens(request.max_tokens);
        if let Some(temperature) = self.temperature {
            chat = chat.temperature(temperature);
        }
        if let Some(system) = &request.system {
            chat = chat.message(Message::system(system));
        }
        chat = chat.message(Message::user(&request.prompt));

        let response = self
            .client
            .chat_completion(chat)
            .await
            .map_err(|e| CopyError::Generation(Box::new(e)))?;

        // Models like to wrap requested HTML in code fences
        Ok(strip_code_blocks(&response.content).to_string())
    }
}
