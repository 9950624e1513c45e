use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::error::AppResult;
use crate::models::{AppState, NarrationResponse, TextInput};
use crate::prompts;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/narrate", post(narrate))
        .with_state(state)
}

/// Ask the model for a storytelling-style summary of the supplied text.
async fn narrate(
    State(state): State<AppState>,
    Json(payload): Json<TextInput>,
) -> AppResult<Json<NarrationResponse>> {
    info!(chars = payload.input.len(), "Narration request received");

    let prompt = prompts::narration(&payload.input);
    let summary = state.completion.complete(&prompt).await?;

    Ok(Json(NarrationResponse { summary }))
}
