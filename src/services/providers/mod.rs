/// Completion provider abstraction
///
/// The analysis translator only knows how to describe a request; turning that
/// into a call against a concrete generative-AI service lives behind this
/// trait so the service can be swapped or stubbed.
use serde_json::Value;

use crate::error::AppResult;

pub mod gemini;

pub use gemini::GeminiProvider;

/// MIME type requested for every analysis response
pub const JSON_MIME_TYPE: &str = "application/json";

/// Everything a provider needs to produce one structured completion
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Standing instruction describing the assistant's role and rules
    pub instruction: String,
    /// Per-request prompt with the user's query and preferences
    pub prompt: String,
    /// Schema the response must conform to
    pub response_schema: Value,
    pub response_mime_type: &'static str,
}

/// Trait for generative completion providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends the request and returns the raw response text.
    ///
    /// The text is expected, but not guaranteed, to be JSON matching
    /// `request.response_schema`; validation is the caller's job.
    async fn generate(&self, request: &CompletionRequest) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
