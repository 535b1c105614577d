//! AI-backed citation formatting.
//!
//! The engine never talks to a generative backend itself; it defines the
//! [`TextGenerator`] capability and builds the prompts. Callers plug in a
//! real client (or [`mock::MockGenerator`]) and own timeout/retry policy.
//! The AI path is non-deterministic; the manual path in
//! [`crate::format`] is the only one with a determinism guarantee.

pub mod mock;
pub mod prompt;

use async_trait::async_trait;

use crate::format::format_manual_citation;
use crate::models::{Citation, CitationStyle, SourceType};

/// Errors surfaced by a text-generation backend
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Network or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with an error
    #[error("API error: {0}")]
    Api(String),

    /// The backend answered with empty or whitespace-only text
    #[error("Empty response from text generator")]
    EmptyResponse,
}

/// A text-generation capability: one prompt in, one completion out.
///
/// Single-shot and not idempotent; invoking it twice for the same prompt may
/// return different text. Failures must surface as [`GenerateError`], never
/// as degraded citation text.
#[async_trait]
pub trait TextGenerator: Send + Sync + std::fmt::Debug {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Citation formatting strategy: the deterministic template matrix or a
/// text-generation backend, behind one call signature.
#[derive(Debug)]
pub enum Formatter<'a> {
    /// Local template rules; pure and infallible
    Manual,
    /// Delegate to an external text generator
    Ai(&'a dyn TextGenerator),
}

impl Formatter<'_> {
    /// Render a citation in the given style.
    ///
    /// The manual arm cannot fail. The AI arm sends the structured facts to
    /// the backend and trusts its output after trimming; errors are passed
    /// through untouched, never retried.
    pub async fn format(
        &self,
        citation: &Citation,
        source_type: SourceType,
        style: CitationStyle,
    ) -> Result<String, GenerateError> {
        match self {
            Formatter::Manual => Ok(format_manual_citation(citation, source_type, style)),
            Formatter::Ai(generator) => {
                let prompt = prompt::citation_prompt(citation, source_type, style);
                let text = generator.generate(&prompt).await?;
                let text = text.trim();
                if text.is_empty() {
                    return Err(GenerateError::EmptyResponse);
                }
                Ok(text.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{FailingGenerator, MockGenerator};
    use super::*;
    use crate::models::CitationBuilder;

    fn book() -> Citation {
        CitationBuilder::new(SourceType::Book)
            .authors("Smith, John")
            .title("Deep Work")
            .year("2016")
            .publisher("Grand Central")
            .build()
    }

    #[tokio::test]
    async fn test_manual_strategy_matches_matrix() {
        let citation = book();
        let rendered = Formatter::Manual
            .format(&citation, SourceType::Book, CitationStyle::Apa)
            .await
            .unwrap();
        assert_eq!(rendered, "Smith & John (2016). *Deep Work*. Grand Central.");
    }

    #[tokio::test]
    async fn test_ai_strategy_trims_backend_output() {
        let backend = MockGenerator::new("  Smith, J. (2016). Deep Work.  \n");
        let rendered = Formatter::Ai(&backend)
            .format(&book(), SourceType::Book, CitationStyle::Apa)
            .await
            .unwrap();
        assert_eq!(rendered, "Smith, J. (2016). Deep Work.");
    }

    #[tokio::test]
    async fn test_ai_strategy_surfaces_failure() {
        let backend = FailingGenerator;
        let err = Formatter::Ai(&backend)
            .format(&book(), SourceType::Book, CitationStyle::Apa)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::Network(_)));
    }

    #[tokio::test]
    async fn test_ai_strategy_rejects_blank_output() {
        let backend = MockGenerator::new("   \n ");
        let err = Formatter::Ai(&backend)
            .format(&book(), SourceType::Book, CitationStyle::Apa)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::EmptyResponse));
    }
}
