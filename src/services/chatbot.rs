// src/services/chatbot.rs
use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, warn};

use super::provider::{CompletionProvider, CompletionRequest};
use super::relevance::matched_keyword;

pub const REDIRECT_REPLY: &str = "I can only answer questions about species and animals. Please ask me about wildlife, conservation, habitats, diets, or any other animal-related topics!";
pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't generate a response. Please try again.";
pub const ERROR_REPLY: &str = "I'm having trouble connecting to my knowledge base. Please try again later.";

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that only answers questions about animals, species, habitats, diets, and conservation. Provide accurate, informative, and engaging responses about wildlife. If asked about non-animal topics, politely redirect to animal-related questions.";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const MAX_TOKENS: u32 = 500;
pub const TEMPERATURE: f32 = 0.7;

/// How a single call to the responder ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Redirect,
    Success,
    EmptyFallback,
    ErrorFallback,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Redirect => "redirect",
            Outcome::Success => "success",
            Outcome::EmptyFallback => "empty_fallback",
            Outcome::ErrorFallback => "error_fallback",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub outcome: Outcome,
    pub text: String,
}

impl Reply {
    /// Reply for a message the responder cannot read as text.
    pub fn unreadable() -> Self {
        Self::canned(Outcome::ErrorFallback, ERROR_REPLY)
    }

    fn canned(outcome: Outcome, text: &str) -> Self {
        Self { outcome, text: text.to_string() }
    }
}

/// Gates each message on species relevance before asking the provider.
/// Holds no per-call state; clones share the same provider.
#[derive(Clone)]
pub struct ChatResponder {
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl fmt::Debug for ChatResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatResponder")
            .field("model", &self.model)
            .finish()
    }
}

impl ChatResponder {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self { provider, model: model.into() }
    }

    /// Final user-facing text for `message`. Never fails.
    pub async fn respond(&self, message: &str) -> String {
        self.reply(message).await.text
    }

    pub async fn reply(&self, message: &str) -> Reply {
        let Some(keyword) = matched_keyword(message) else {
            debug!("message not species related, redirecting");
            return Reply::canned(Outcome::Redirect, REDIRECT_REPLY);
        };
        debug!(keyword, "message species related");

        let request = CompletionRequest {
            model: self.model.clone(),
            system: SYSTEM_PROMPT.to_string(),
            user: message.to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        match self.provider.complete(&request).await {
            Ok(Some(text)) if !text.is_empty() => Reply { outcome: Outcome::Success, text },
            Ok(_) => {
                warn!(model = %self.model, "provider returned no text");
                Reply::canned(Outcome::EmptyFallback, EMPTY_REPLY)
            }
            Err(e) => {
                error!(model = %self.model, error = %e, "provider call failed");
                Reply::canned(Outcome::ErrorFallback, ERROR_REPLY)
            }
        }
    }
}
