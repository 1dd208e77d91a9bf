// src/services/provider.rs
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("no API key configured")]
    MissingApiKey,
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One system turn plus one user turn, with output bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// A text-completion service. `Ok(None)` means the call succeeded but produced
/// no text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, ProviderError>;
}
