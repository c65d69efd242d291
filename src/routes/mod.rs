// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{Router, extract::DefaultBodyLimit, routing::get};
use chat::{chat_handler, chat_info_handler};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/chat", get(chat_info_handler).post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        // Message length is left to the completion service.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}
