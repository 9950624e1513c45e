// NarrAIve - document upload, text extraction, and AI-assisted analysis backend

pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod middleware;
pub mod models;
pub mod prompts;
pub mod routes;
pub mod uploads;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
