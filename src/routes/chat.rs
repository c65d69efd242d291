use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header},
};

use crate::{
    error::AppError,
    message::{ChatResponse, EndpointInfo},
    state::SharedState,
};

// Takes the raw body so that content-type, syntax and shape failures map to
// 415/400/400 instead of axum's own Json rejections.
pub async fn chat_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let reply = state.relay.handle(content_type, &body).await?;
    Ok(Json(reply))
}

pub async fn chat_info_handler() -> Json<EndpointInfo> {
    Json(EndpointInfo::chat())
}
