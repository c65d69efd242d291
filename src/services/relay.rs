// src/services/relay.rs
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::{
        completion_client::{CompletionError, CompletionService},
        keyword_table,
    },
};

pub const FALLBACK_MARKER: &str = "⚠️ Using fallback: ";

const INVALID_MESSAGE: &str = "Message is required and must be a string";

/// What to do when the completion service call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamFailure {
    /// Answer from the keyword table with a 200.
    Fallback,
    /// Surface the failure as a 500.
    Propagate,
}

impl UpstreamFailure {
    pub fn from_flag(fallback_enabled: bool) -> Self {
        if fallback_enabled {
            UpstreamFailure::Fallback
        } else {
            UpstreamFailure::Propagate
        }
    }
}

/// Validates a chat turn, forwards it once, and shapes the reply.
pub struct ChatRelay {
    completion: Arc<dyn CompletionService>,
    on_failure: UpstreamFailure,
}

impl ChatRelay {
    pub fn new(completion: Arc<dyn CompletionService>, on_failure: UpstreamFailure) -> Self {
        Self {
            completion,
            on_failure,
        }
    }

    pub async fn handle(
        &self,
        content_type: Option<&str>,
        body: &[u8],
    ) -> Result<ChatResponse, AppError> {
        let request = parse_request(content_type, body)?;
        self.relay(&request.message).await
    }

    /// Steps after validation: config check, one upstream call, normalization.
    pub async fn relay(&self, message: &str) -> Result<ChatResponse, AppError> {
        if !self.completion.is_configured() {
            error!("Completion service credentials are not configured");
            return Err(AppError::Configuration(
                "Missing DASHSCOPE_API_KEY in environment".to_string(),
            ));
        }

        match self.completion.complete(message).await {
            Ok(text) => Ok(ChatResponse::new(text)),
            Err(CompletionError::Configuration(msg)) => {
                error!(error = %msg, "Completion service misconfigured");
                Err(AppError::Configuration(msg))
            }
            Err(CompletionError::Upstream(msg)) => match self.on_failure {
                UpstreamFailure::Fallback => {
                    warn!(error = %msg, "Completion service failed, answering from keyword table");
                    let rule = keyword_table::match_rule(message);
                    let topic = rule.map_or("default", |r| r.topic);
                    let reply = rule.map_or(keyword_table::DEFAULT_REPLY, |r| r.reply);
                    debug!(topic, "Fallback reply selected");
                    Ok(ChatResponse::new(format!("{}{}", FALLBACK_MARKER, reply)))
                }
                UpstreamFailure::Propagate => {
                    error!(error = %msg, "Completion service failed");
                    Err(AppError::Upstream(msg))
                }
            },
        }
    }
}

/// Transport, syntax and shape checks, in that order.
pub fn parse_request(content_type: Option<&str>, body: &[u8]) -> Result<ChatRequest, AppError> {
    let is_json = content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);
    if !is_json {
        return Err(AppError::UnsupportedMediaType);
    }

    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|_| AppError::MalformedRequest("Invalid JSON body".to_string()))?;

    let request: ChatRequest = serde_json::from_value(value)
        .map_err(|_| AppError::InvalidArgument(INVALID_MESSAGE.to_string()))?;

    if request.message.is_empty() {
        return Err(AppError::InvalidArgument(INVALID_MESSAGE.to_string()));
    }

    Ok(request)
}
