// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::completion_client::{CompletionClient, CompletionService};
use crate::services::relay::{ChatRelay, UpstreamFailure};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub relay: ChatRelay,
}

impl AppState {
    /// Wires the real completion client from start-up config.
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = CompletionClient::new(config)?;
        Ok(Self::with_completion(
            Arc::new(client),
            UpstreamFailure::from_flag(config.fallback_enabled),
        ))
    }

    pub fn with_completion(
        completion: Arc<dyn CompletionService>,
        on_failure: UpstreamFailure,
    ) -> Self {
        Self {
            relay: ChatRelay::new(completion, on_failure),
        }
    }
}
