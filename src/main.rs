use std::sync::Arc;

use anyhow::Context;
use species_chat::{
    config::Config,
    routes,
    services::{chatbot::ChatResponder, openai::OpenAiProvider},
    state::AppState,
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; species questions will get the fallback reply");
    }

    let provider = OpenAiProvider::new(config.openai_base_url.clone(), config.openai_api_key.clone());
    let responder = ChatResponder::new(Arc::new(provider), config.openai_model.clone());
    let state = Arc::new(AppState::new(responder, config.admin_key.clone()));

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, model = %config.openai_model, "species chat running");
    axum::serve(listener, app).await?;
    Ok(())
}
