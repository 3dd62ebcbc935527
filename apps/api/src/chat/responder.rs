//! Answer pipeline — gathers résumé text and harvested site content, composes
//! the instruction prompt, and asks the completion service for an answer.
//!
//! Flow: resume_text → harvest → compose_context → build_answer_prompt →
//!       complete → trimmed answer.
//!
//! Content-gathering failures never surface here: both collaborators degrade
//! to placeholder text, so only a completion-service failure can fail the
//! request.

use tracing::debug;

use crate::chat::prompts::{ANSWER_PROMPT_TEMPLATE, PERSONA_SYSTEM};
use crate::errors::AppError;
use crate::harvest::HarvestedPage;
use crate::state::AppState;

/// Concatenates résumé text and all page texts (in harvest order) into the
/// context blob embedded in the prompt.
pub fn compose_context(resume_text: &str, pages: &[HarvestedPage]) -> String {
    let website_content = pages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    format!("Resume Information: {resume_text} Website Information: {website_content}")
}

/// Substitutes the question and composed context into the instruction template.
pub fn build_answer_prompt(question: &str, context: &str) -> String {
    ANSWER_PROMPT_TEMPLATE
        .replace("{question}", question)
        .replace("{context}", context)
}

/// Runs the full pipeline for one question and returns the model's answer.
pub async fn answer_question(state: &AppState, question: &str) -> Result<String, AppError> {
    let resume_text = state.resume.resume_text();
    let pages = state.harvester.harvest().await;

    let context = compose_context(&resume_text, &pages);
    let prompt = build_answer_prompt(question, &context);
    debug!(prompt_len = prompt.len(), "sending composed prompt");

    state
        .llm
        .complete(PERSONA_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))
}
