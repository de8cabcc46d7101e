//! Chat-completions wire types and the single JSON-mode request path.

use serde::{Deserialize, Serialize};

use crate::error::{LlmError, LlmResult};
use crate::LlmClient;

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: &'static str,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f64,
    response_format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl LlmClient {
    /// One chat-completion attempt in JSON mode; returns the raw content of
    /// the first choice. Non-2xx and empty-choice responses are typed
    /// errors, never panics.
    pub(crate) async fn complete_json(&self, messages: &[Message]) -> LlmResult<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages,
            temperature: 0.3,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "chat completion rejected");
            return Err(LlmError::Api(format!("status {status}: {body}")));
        }

        let raw: ChatResponseRaw = response.json().await?;
        raw.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LlmError::EmptyCompletion)
    }
}
