//! Anthropic Messages API adapter for the `TextCompletion` port.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use skillforge_core::application::{ApplicationError, ports::TextCompletion};
use skillforge_core::error::SkillforgeResult;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

/// Text-completion client over the Anthropic Messages API.
///
/// The credential is checked before any request is built; a missing key
/// never reaches the network.
pub struct AnthropicClient {
    api_key: Option<String>,
    model: String,
    messages_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    content: Vec<ResponseContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Unsupported,
}

impl AnthropicClient {
    pub fn new(api_key: Option<&str>, model: &str) -> Self {
        Self::with_base_url(api_key, model, None)
    }

    pub fn with_base_url(api_key: Option<&str>, model: &str, base_url: Option<&str>) -> Self {
        let base = base_url
            .map_or(DEFAULT_BASE_URL, |u| u.trim_end_matches('/'))
            .to_string();
        Self {
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(ToString::to_string),
            model: model.to_string(),
            messages_url: format!("{base}/v1/messages"),
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// First text-typed block wins; trailing commentary blocks are ignored
    /// so a JSON reply stays parseable.
    fn extract_text(response: ChatResponse) -> Option<String> {
        response
            .content
            .into_iter()
            .find_map(|block| match block {
                ResponseContentBlock::Text { text } => Some(text),
                ResponseContentBlock::Unsupported => None,
            })
            .filter(|text| !text.is_empty())
    }
}

#[async_trait]
impl TextCompletion for AnthropicClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> SkillforgeResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ApplicationError::MissingCredential)?;

        let request = ChatRequest {
            model: self.model.clone(),
            max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        debug!(model = %self.model, max_tokens, "sending completion request");
        let response = self
            .client
            .post(&self.messages_url)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .header("x-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApplicationError::CompletionFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApplicationError::CompletionFailed {
                reason: format!("HTTP {status}: {body}"),
            }
            .into());
        }

        let chat: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| ApplicationError::CompletionFailed {
                    reason: e.to_string(),
                })?;

        Self::extract_text(chat)
            .ok_or_else(|| ApplicationError::NoTextResponse { stage: "completion" }.into())
    }
}
