// LLM abstraction layer

pub mod gemini;
pub mod provider;

pub use gemini::GeminiClient;
pub use provider::{CompletionClient, CompletionError, ModelInfo};
