// Google Gemini client implementation
// API Reference: https://ai.google.dev/api/generate-content
//
// Requests go to the v1beta REST surface:
//   POST {base}/models/{model}:generateContent?key={api_key}
//   GET  {base}/models?key={api_key}
// The key travels as a query parameter, not an Authorization header.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::llm::provider::{CompletionClient, CompletionError, ModelInfo};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

// Request types for the generateContent endpoint
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

// Response types
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorBody,
}

#[derive(Deserialize)]
struct GeminiErrorBody {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_base_url(api_key, model, GEMINI_API_BASE)
    }

    /// Point the client at a different API host. Used by tests and by
    /// deployments that front the API with a proxy.
    pub fn with_base_url(api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// A missing key fails here, before any request is built or sent.
    fn require_key(&self) -> Result<&str, CompletionError> {
        if self.api_key.is_empty() {
            Err(CompletionError::MissingApiKey)
        } else {
            Ok(&self.api_key)
        }
    }

    async fn read_error(response: reqwest::Response) -> CompletionError {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();

        // Try to parse as a structured Gemini error response
        if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&error_text) {
            return CompletionError::Api(format!(
                "Gemini API error ({}): {} (status: {:?})",
                status, error_response.error.message, error_response.error.status
            ));
        }

        CompletionError::Api(format!("Gemini API error ({}): {}", status, error_text))
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let key = self.require_key()?;
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt.to_string() }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Request(format!("Gemini request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Api(format!("failed to parse Gemini response: {e}")))?;

        let candidate = body
            .candidates
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyResponse)?;

        // Only a response with no candidates, no content, or no parts is an
        // error; text that trims to the empty string passes through as-is.
        let content = candidate.content.ok_or(CompletionError::EmptyResponse)?;
        if content.parts.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }

        let text: String = content.parts.into_iter().map(|p| p.text).collect();
        Ok(text.trim().to_string())
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, CompletionError> {
        let key = self.require_key()?;
        let url = format!("{}/models?key={}", self.base_url, key);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CompletionError::Request(format!("Gemini request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let body: ListModelsResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Api(format!("failed to parse Gemini response: {e}")))?;

        Ok(body.models)
    }
}
