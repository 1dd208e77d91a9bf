pub mod chatbot;
pub mod conversation;
pub mod metrics_manager;
pub mod openai;
pub mod provider;
pub mod relevance;
