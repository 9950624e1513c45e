use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::error::AppResult;
use crate::models::{AppState, DocumentAnswer, QueryRequest};
use crate::prompts;

/// The model is asked to include its own citation in the answer text; this
/// placeholder fills the structured field the front-end renders.
const CITATION_PLACEHOLDER: &str = "(see above text)";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/query", post(query_documents))
        .with_state(state)
}

/// Answer one question against each supplied document.
///
/// Documents are processed strictly in input order with one completion call
/// each, and the response preserves that order. The first failing call
/// aborts the whole request; there is no per-document isolation.
async fn query_documents(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> AppResult<Json<Vec<DocumentAnswer>>> {
    info!(
        documents = request.documents.len(),
        "Query request received"
    );

    let mut answers = Vec::with_capacity(request.documents.len());
    for document in &request.documents {
        let prompt = prompts::document_query(&document.id, &document.text, &request.question);
        let answer = state.completion.complete(&prompt).await?;

        answers.push(DocumentAnswer {
            doc_id: document.id.clone(),
            answer,
            citation: CITATION_PLACEHOLDER.to_string(),
        });
    }

    Ok(Json(answers))
}
