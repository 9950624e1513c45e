use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One-shot exchange with a hosted text-generation model.
///
/// Implementations send exactly one request per call: no retries, no
/// backoff, no streaming. Callers own any sequencing across calls.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a single prompt and return the model's trimmed completion text.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// List the generation models available to the configured credential.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, CompletionError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("completion request failed: {0}")]
    Request(String),

    #[error("completion API error: {0}")]
    Api(String),

    #[error("model returned no text")]
    EmptyResponse,
}
