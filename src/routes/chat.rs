use axum::{Json, body::Bytes, extract::State};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, MessageInput},
    services::{chatbot::Reply, metrics_manager::MetricsData},
    state::SharedState,
};

use super::AdminAuth;

/// The body is parsed as JSON whatever the `content-type` header says.
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let payload: ChatRequest = serde_json::from_slice(&body)
        .map_err(|e| anyhow::Error::new(e).context("unreadable chat request"))?;

    let request_id = Uuid::new_v4();
    let span = info_span!("chat", %request_id);

    let reply = match payload.input() {
        MessageInput::Missing => {
            return Err(AppError::BadRequest("Message is required".to_string()));
        }
        MessageInput::Text(message) => state.responder.reply(message).instrument(span.clone()).await,
        MessageInput::NotText => {
            span.in_scope(|| warn!("chat message is not a string"));
            Reply::unreadable()
        }
    };
    state.metrics.record_outcome(reply.outcome).await;
    span.in_scope(|| info!(outcome = %reply.outcome, "chat reply sent"));

    Ok(Json(ChatResponse { response: reply.text }))
}

pub async fn get_metrics_handler(_auth: AdminAuth, State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}
