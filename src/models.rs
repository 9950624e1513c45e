use std::sync::Arc;

use crate::config::Config;
use crate::extract::Extractor;
use crate::llm::{CompletionClient, ModelInfo};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub completion: Arc<dyn CompletionClient>,
    pub extractor: Arc<Extractor>,
}

// Request/response bodies, mirroring the JSON shapes the front-end consumes

#[derive(Debug, serde::Deserialize)]
pub struct TextInput {
    pub input: String,
}

#[derive(Debug, serde::Serialize)]
pub struct UploadResponse {
    pub text: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ThemeResponse {
    pub theme: String,
}

#[derive(Debug, serde::Serialize)]
pub struct NarrationResponse {
    pub summary: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct QueryRequest {
    pub question: String,
    pub documents: Vec<DocumentInput>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DocumentInput {
    pub id: String,
    pub text: String,
}

#[derive(Debug, serde::Serialize)]
pub struct DocumentAnswer {
    #[serde(rename = "docId")]
    pub doc_id: String,
    pub answer: String,
    pub citation: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
