//! Chat-completion client.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CompletionSettings;

/// Why one content stream produced nothing.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Completion API error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("No content received from completion API")]
    MissingContent,

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Connection error: {0}")]
    Http(String),

    #[error("Failed to parse AI response: {0}")]
    Parse(String),

    #[error("AI response does not match the expected structure: {0}")]
    Schema(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl CompletionResponse {
    fn into_content(self) -> Result<String, StreamError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(StreamError::MissingContent)
    }
}

/// Sends a conversation to a language model and returns the reply text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, StreamError>;
}

/// [`CompletionClient`] for OpenAI-style chat-completion endpoints.
pub struct HttpCompletionClient {
    client: Client,
    settings: CompletionSettings,
}

impl HttpCompletionClient {
    pub fn new(settings: CompletionSettings) -> Result<Self, StreamError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| StreamError::Http(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, StreamError> {
        let body = CompletionRequest {
            model: &self.settings.model,
            messages: &messages,
            temperature: self.settings.temperature,
        };

        let response = self
            .client
            .post(&self.settings.api_url)
            .header("Authorization", format!("Bearer {}", self.settings.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", &self.settings.referer)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StreamError::Timeout(self.settings.timeout.as_secs())
                } else {
                    StreamError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: CompletionResponse = response
            .json()
            .await
            .map_err(|e| StreamError::Parse(format!("invalid completion response: {}", e)))?;
        reply.into_content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let messages = [ChatMessage::system("s"), ChatMessage::user("u")];
        let body = CompletionRequest {
            model: "anthropic/claude-3.5-sonnet",
            messages: &messages,
            temperature: 0.5,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "anthropic/claude-3.5-sonnet");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "u");
        assert_eq!(json["temperature"], 0.5);
    }

    #[test]
    fn test_first_choice_content() {
        let reply: CompletionResponse = serde_json::from_str(
            r#"{"id": "x", "choices": [{"message": {"role": "assistant", "content": "{}"}}]}"#,
        )
        .unwrap();
        assert_eq!(reply.into_content().unwrap(), "{}");
    }

    #[test]
    fn test_missing_or_blank_content() {
        for json in [
            r#"{"choices": []}"#,
            r#"{}"#,
            r#"{"choices": [{"message": {"content": null}}]}"#,
            r#"{"choices": [{"message": {"content": "  "}}]}"#,
        ] {
            let reply: CompletionResponse = serde_json::from_str(json).unwrap();
            assert!(matches!(reply.into_content(), Err(StreamError::MissingContent)));
        }
    }

    #[test]
    fn test_client_keeps_settings() {
        let mut settings = CompletionSettings::new("sk-test");
        settings.model = "openai/gpt-4o".into();
        let client = HttpCompletionClient::new(settings.clone()).unwrap();
        assert_eq!(client.settings(), &settings);
        assert_eq!(client.settings().referer, "http://localhost:3000");
    }

    #[test]
    fn test_status_error_message() {
        let err = StreamError::Status {
            status: 429,
            body: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "Completion API error: 429 - rate limited");
    }
}
