//! Testing utilities including a scripted mock generator.
//!
//! Useful for testing applications built on the library without making real
//! LLM calls.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::error::{CopyError, Result};
use crate::traits::generator::{GenerationRequest, TextGenerator};

/// A mock text generator.
///
/// Responses are served from a script queue, falling back to a fixed default
/// once the queue is empty. Every request is recorded for assertions.
#[derive(Clone)]
pub struct MockGenerator {
    responses: Arc<RwLock<VecDeque<String>>>,
    default_response: String,
    fail: bool,
    calls: Arc<RwLock<Vec<GenerationRequest>>>,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerator {
    /// Create a mock with an empty script.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(VecDeque::new())),
            default_response: "genereret tekst".to_string(),
            fail: false,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Queue one scripted response.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.responses.write().unwrap().push_back(text.into());
        self
    }

    /// Queue several scripted responses.
    pub fn with_responses(self, texts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        {
            let mut responses = self.responses.write().unwrap();
            for text in texts {
                responses.push_back(text.into());
            }
        }
        self
    }

    /// Set the response served once the script queue is empty.
    pub fn with_default_response(mut self, text: impl Into<String>) -> Self {
        self.default_response = text.into();
        self
    }

    /// Make every call fail with a generation error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// All requests received so far.
    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.read().unwrap().clone()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String> {
        self.calls.write().unwrap().push(request);

        if self.fail {
            return Err(CopyError::Generation(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "mock generator failure",
            ))));
        }

        Ok(self
            .responses
            .write()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default_response.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_responses_then_default() {
        let generator = MockGenerator::new()
            .with_response("første")
            .with_default_response("standard");

        assert_eq!(
            generator.generate(GenerationRequest::new("a")).await.unwrap(),
            "første"
        );
        assert_eq!(
            generator.generate(GenerationRequest::new("b")).await.unwrap(),
            "standard"
        );
        assert_eq!(generator.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failing_mock_returns_error() {
        let generator = MockGenerator::new().failing();
        assert!(generator.generate(GenerationRequest::new("a")).await.is_err());
    }

    #[tokio::test]
    async fn test_calls_record_requests() {
        let generator = MockGenerator::new();
        let request = GenerationRequest::new("prompten").with_system("systemet");
        generator.generate(request).await.unwrap();

        let calls = generator.calls();
        assert_eq!(calls[0].prompt, "prompten");
        assert_eq!(calls[0].system.as_deref(), Some("systemet"));
    }
}
