/// LLM Client — the single point of entry for all completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: claude-sonnet-4-5 (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::interview::transcript::Turn;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";

/// The Messages API requires the first message to be user-authored. Interview
/// transcripts start with the interviewer, so requests that would otherwise
/// open with an assistant turn (or no turns at all) are prefixed with this.
const KICKOFF_MESSAGE: &str = "Please begin the interview.";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Text-generation seam used by the interview core.
///
/// Input is one leading system instruction plus the ordered turns so far;
/// output is the next assistant utterance. Tests substitute scripted
/// implementations; production uses `LlmClient`.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        turns: &[Turn],
        max_tokens: u32,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// The single LLM client used by the whole application.
/// Wraps the Anthropic Messages API. Calls are single-shot: failures
/// propagate to the caller, which decides whether to retry the step.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    async fn call(
        &self,
        system: &str,
        turns: &[Turn],
        max_tokens: u32,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens,
            system,
            messages: wire_messages(turns),
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    async fn complete(
        &self,
        system: &str,
        turns: &[Turn],
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let response = self.call(system, turns, max_tokens).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(text.trim().to_string())
    }
}

/// Maps transcript turns to wire messages, prepending the kickoff user line
/// when the list is empty or opens with an assistant turn.
fn wire_messages(turns: &[Turn]) -> Vec<AnthropicMessage<'_>> {
    let mut messages = Vec::with_capacity(turns.len() + 1);

    if turns.first().map(|t| t.role.as_str()) != Some("user") {
        messages.push(AnthropicMessage {
            role: "user",
            content: KICKOFF_MESSAGE,
        });
    }

    messages.extend(turns.iter().map(|t| AnthropicMessage {
        role: t.role.as_str(),
        content: &t.content,
    }));

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_messages_prepends_kickoff_when_empty() {
        let messages = wire_messages(&[]);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");
        assert_eq!(messages[0].content, KICKOFF_MESSAGE);
    }

    #[test]
    fn test_wire_messages_prepends_kickoff_before_assistant_opening() {
        let turns = vec![Turn::assistant("Welcome, Ada!"), Turn::user("Hello")];
        let messages = wire_messages(&turns);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, KICKOFF_MESSAGE);
        assert_eq!(messages[1].role, "assistant");
        assert_eq!(messages[2].role, "user");
    }

    #[test]
    fn test_wire_messages_leaves_user_opening_untouched() {
        let turns = vec![Turn::user("Candidate responses: ...")];
        let messages = wire_messages(&turns);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "Candidate responses: ...");
    }

    #[test]
    fn test_response_text_picks_first_text_block() {
        let response = LlmResponse {
            content: vec![
                ContentBlock {
                    block_type: "thinking".to_string(),
                    text: None,
                },
                ContentBlock {
                    block_type: "text".to_string(),
                    text: Some("Hello".to_string()),
                },
            ],
            usage: Usage {
                input_tokens: 10,
                output_tokens: 2,
            },
        };
        assert_eq!(response.text(), Some("Hello"));
    }
}
