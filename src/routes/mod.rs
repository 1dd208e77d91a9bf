// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    routing::{get, post},
};
use chat::{chat_handler, get_metrics_handler};
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// API routes, with anything else served from `static_dir`.
pub fn create_router(static_dir: impl AsRef<Path>) -> Router<SharedState> {
    let admin_routes = Router::new().route("/metrics", get(get_metrics_handler));

    Router::new()
        .route("/api/chat", post(chat_handler))
        .nest("/admin", admin_routes)
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}

/// Requires `x-admin-key` to match the configured admin key. Admin routes
/// answer 404 when no key is configured.
pub struct AdminAuth;

impl FromRequestParts<SharedState> for AdminAuth {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &SharedState) -> Result<Self, Self::Rejection> {
        let expected = state.admin_key.as_deref().ok_or(StatusCode::NOT_FOUND)?;

        match parts.headers.get(ADMIN_KEY_HEADER) {
            Some(val) if val.as_bytes() == expected.as_bytes() => Ok(AdminAuth),
            _ => Err(StatusCode::UNAUTHORIZED),
        }
    }
}
