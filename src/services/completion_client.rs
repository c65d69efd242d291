//! Client for the hosted chat-completion service.
//!
//! Every call is stateless: a fixed system instruction plus the user's
//! text as a single user turn. No history, no retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::AppConfig;

pub const SYSTEM_PROMPT: &str = "You are a friendly, knowledgeable guide to traditional Chinese festivals \
(Spring Festival, Dragon Boat Festival, Mid-Autumn Festival). Answer questions about their culture, \
traditions, greetings, foods, zodiac and customs. Reply in Chinese if the user's message is in Chinese; \
otherwise reply in English. Keep answers concise and helpful.";

const ERROR_BODY_LOG_LIMIT: usize = 200;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Upstream(String),
}

/// Seam between the relay and whatever produces completions.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Whether credentials are present. Checked before any call is attempted.
    fn is_configured(&self) -> bool;

    async fn complete(&self, user_text: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WireMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
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

pub fn build_prompt(user_text: &str) -> Vec<WireMessage> {
    vec![
        WireMessage {
            role: Role::System,
            content: SYSTEM_PROMPT.to_string(),
        },
        WireMessage {
            role: Role::User,
            content: user_text.to_string(),
        },
    ]
}

pub struct CompletionClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl CompletionClient {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionService for CompletionClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, user_text: &str) -> Result<String, CompletionError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CompletionError::Configuration("Missing DASHSCOPE_API_KEY in environment".to_string())
        })?;

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: build_prompt(user_text),
        };

        let url = self.endpoint();
        debug!(model = %self.model, "Forwarding chat message to completion service");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Upstream("Completion service timed out".to_string())
                } else {
                    CompletionError::Upstream(format!(
                        "Failed to reach completion service: {}",
                        e.without_url()
                    ))
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(ERROR_BODY_LOG_LIMIT).collect();
            warn!(status = %status, body = %snippet, "Completion service rejected request");
            return Err(CompletionError::Upstream(format!(
                "Completion service returned {}",
                status
            )));
        }

        let parsed: CompletionResponse = resp.json().await.map_err(|e| {
            CompletionError::Upstream(format!(
                "Failed to decode completion response: {}",
                e.without_url()
            ))
        })?;

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default())
    }
}
