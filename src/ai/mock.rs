//! Mock text generators for testing and offline use.

use async_trait::async_trait;

use super::{GenerateError, TextGenerator};

/// Returns a canned response for every prompt
#[derive(Debug, Clone)]
pub struct MockGenerator {
    response: String,
}

impl MockGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        Ok(self.response.clone())
    }
}

/// Fails every request with a network error
#[derive(Debug, Default)]
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        Err(GenerateError::Network("connection refused".to_string()))
    }
}
