// src/state.rs
use std::sync::Arc;

use crate::services::chatbot::ChatResponder;
use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub responder: ChatResponder,
    pub metrics: MetricsManager,
    pub admin_key: Option<String>,
}

impl AppState {
    pub fn new(responder: ChatResponder, admin_key: Option<String>) -> Self {
        Self {
            responder,
            metrics: MetricsManager::new(),
            admin_key,
        }
    }
}
