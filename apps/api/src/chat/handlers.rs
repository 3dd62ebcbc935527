use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::prompts::FALLBACK_GREETING;
use crate::chat::responder::answer_question;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// POST /chat
///
/// Answers a visitor question about Zhizhen Yang. An empty or missing
/// question gets the fixed greeting without touching the résumé, the
/// website, or the completion service.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let question = request.question.trim();
    if question.is_empty() {
        return Ok(Json(ChatResponse {
            answer: FALLBACK_GREETING.to_string(),
        }));
    }

    let answer = answer_question(&state, question).await?;
    Ok(Json(ChatResponse { answer }))
}
