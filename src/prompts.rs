//! Prompt templates for the completion endpoints.
//!
//! These are pure string builders: the same input always produces the same
//! prompt, with no escaping or truncation. The front-end relies on the exact
//! wording, so changes here change model behavior across the API.

/// Prompt asking the model for the main theme of a text.
pub fn theme(text: &str) -> String {
    format!("Identify the main theme of the following text:\n\n{text}\n\nTheme:")
}

/// Prompt asking the model for a storytelling-style summary.
pub fn narration(text: &str) -> String {
    format!(
        "Write a concise storytelling-style summary of the following text:\n\n{text}\n\nNarration:"
    )
}

/// Prompt asking the model to answer a question against one document,
/// with a citation. Built once per document in a query request.
pub fn document_query(id: &str, text: &str, question: &str) -> String {
    format!(
        "Use the following document to answer the question and provide a citation (e.g., sentence number or paragraph).\nDocument ID: {id}\nDocument Text:\n{text}\n\nQuestion: {question}\nAnswer and citation:"
    )
}
