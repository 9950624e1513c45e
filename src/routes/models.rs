use axum::{extract::State, routing::get, Json, Router};

use crate::error::AppResult;
use crate::models::{AppState, ModelsResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/models", get(list_models))
        .with_state(state)
}

/// List the generation models available to the configured API key.
async fn list_models(State(state): State<AppState>) -> AppResult<Json<ModelsResponse>> {
    let models = state.completion.list_models().await?;
    Ok(Json(ModelsResponse { models }))
}
