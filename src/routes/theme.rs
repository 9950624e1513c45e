use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::error::AppResult;
use crate::models::{AppState, TextInput, ThemeResponse};
use crate::prompts;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/theme", post(detect_theme))
        .with_state(state)
}

/// Ask the model for the main theme of the supplied text.
async fn detect_theme(
    State(state): State<AppState>,
    Json(payload): Json<TextInput>,
) -> AppResult<Json<ThemeResponse>> {
    info!(chars = payload.input.len(), "Theme request received");

    let prompt = prompts::theme(&payload.input);
    let theme = state.completion.complete(&prompt).await?;

    Ok(Json(ThemeResponse { theme }))
}
