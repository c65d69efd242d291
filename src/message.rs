// src/message.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`. Only `message` is read; other keys are ignored.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    /// Same text as `response`, for older widget builds.
    pub result: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatResponse {
    /// Stamps the reply with the current time.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            result: text.clone(),
            response: text,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointInfo {
    pub message: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoints {
    #[serde(rename = "POST")]
    pub post: String,
}

impl EndpointInfo {
    pub fn chat() -> Self {
        Self {
            message: "Festival chat relay is running!".to_string(),
            endpoints: Endpoints {
                post: "/chat - Send a message to get a response".to_string(),
            },
        }
    }
}
