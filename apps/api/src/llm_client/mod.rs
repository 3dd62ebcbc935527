/// LLM Client — the single point of entry for all completion API calls.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: gpt-3.5-turbo (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-3.5-turbo";
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed completion response: {0}")]
    Malformed(&'static str),
}

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<OpenAiMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletion {
    /// Extracts the text content of the first completion choice.
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// Seam for the completion service. The production implementation is
/// `LlmClient`; tests substitute recording stubs.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Sends one chat-style completion request and returns the trimmed
    /// text of the first choice.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

/// The single LLM client used by the answer pipeline.
/// Wraps the OpenAI chat-completions API with typed envelopes.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_url: OPENAI_API_URL.to_string(),
            api_key,
        }
    }

    /// Points the client at a mock server (for integration tests).
    #[cfg(test)]
    fn with_api_url(api_key: String, api_url: String) -> Self {
        let mut client = Self::new(api_key);
        client.api_url = api_url;
        client
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let request_body = OpenAiRequest {
            model: MODEL,
            temperature: TEMPERATURE,
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: system,
                },
                OpenAiMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the service's error envelope
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletion = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        let text = completion
            .first_text()
            .ok_or(LlmError::Malformed("first choice has no text content"))?;

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_completion_envelope_deserializes() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "He studied finance."}}],
            "usage": {"prompt_tokens": 120, "completion_tokens": 9, "total_tokens": 129}
        }"#;
        let completion: ChatCompletion = serde_json::from_str(json).unwrap();
        assert_eq!(completion.first_text(), Some("He studied finance."));
        assert_eq!(completion.usage.unwrap().completion_tokens, 9);
    }

    #[test]
    fn test_first_text_none_when_choices_empty() {
        let completion: ChatCompletion = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(completion.first_text().is_none());
    }

    #[test]
    fn test_first_text_none_when_content_null() {
        let json = r#"{"choices": [{"message": {"content": null}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(json).unwrap();
        assert!(completion.first_text().is_none());
    }

    #[tokio::test]
    async fn test_complete_returns_trimmed_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"choices": [{"message": {"content": "  A well-written paragraph.  "}}]}"#,
            ))
            .mount(&server)
            .await;

        let client = LlmClient::with_api_url(
            "test-key".to_string(),
            format!("{}/v1/chat/completions", server.uri()),
        );
        let answer = client.complete("system persona", "the question").await.unwrap();
        assert_eq!(answer, "A well-written paragraph.");
    }

    #[tokio::test]
    async fn test_complete_surfaces_api_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string(
                r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#,
            ))
            .mount(&server)
            .await;

        let client = LlmClient::with_api_url("bad-key".to_string(), server.uri());
        let err = client.complete("system", "prompt").await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_rejects_envelope_without_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"choices": []}"#),
            )
            .mount(&server)
            .await;

        let client = LlmClient::with_api_url("test-key".to_string(), server.uri());
        let err = client.complete("system", "prompt").await.unwrap_err();
        assert!(matches!(err, LlmError::Malformed(_)));
    }
}
