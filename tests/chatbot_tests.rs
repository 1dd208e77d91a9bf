use species_chat::services::chatbot::{
    ChatResponder, EMPTY_REPLY, ERROR_REPLY, MAX_TOKENS, Outcome, REDIRECT_REPLY, SYSTEM_PROMPT,
};
use species_chat::services::provider::{CompletionProvider, CompletionRequest, ProviderError};
use species_chat::services::relevance::{SPECIES_KEYWORDS, is_relevant};

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

enum Canned {
    Text(&'static str),
    Empty,
    Missing,
    Fail,
}

struct StubProvider {
    canned: Canned,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl StubProvider {
    fn new(canned: Canned) -> Arc<Self> {
        Arc::new(Self { canned, seen: Mutex::new(Vec::new()) })
    }

    fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, ProviderError> {
        self.seen.lock().unwrap().push(request.clone());
        match self.canned {
            Canned::Text(t) => Ok(Some(t.to_string())),
            Canned::Empty => Ok(Some(String::new())),
            Canned::Missing => Ok(None),
            Canned::Fail => Err(ProviderError::Status { status: 429, body: "rate limited".into() }),
        }
    }
}

fn responder(provider: &Arc<StubProvider>) -> ChatResponder {
    ChatResponder::new(provider.clone(), "gpt-3.5-turbo")
}

#[test]
fn every_keyword_is_relevant_in_any_case() {
    for keyword in SPECIES_KEYWORDS {
        assert!(is_relevant(keyword), "{keyword}");
        assert!(is_relevant(&format!("Tell me about the {}.", keyword.to_uppercase())));
    }
}

#[test]
fn unrelated_text_is_not_relevant() {
    assert!(!is_relevant(""));
    assert!(!is_relevant("What's the capital of France?"));
    assert!(!is_relevant("How do I compile Rust code?"));
}

#[test]
fn relevance_is_stable_across_calls() {
    let inputs = ["What do lions eat?", "What's the capital of France?", ""];
    for input in inputs {
        let first = is_relevant(input);
        for _ in 0..10 {
            assert_eq!(is_relevant(input), first);
        }
    }
}

#[tokio::test]
async fn species_question_returns_provider_text() {
    let provider = StubProvider::new(Canned::Text("Lions are carnivores."));
    let reply = responder(&provider).respond("What do lions eat?").await;

    assert_eq!(reply, "Lions are carnivores.");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn provider_gets_fixed_prompt_and_limits() {
    let provider = StubProvider::new(Canned::Text("ok"));
    responder(&provider).respond("What do lions eat?").await;

    let seen = provider.seen.lock().unwrap();
    let request = &seen[0];
    assert_eq!(request.model, "gpt-3.5-turbo");
    assert_eq!(request.system, SYSTEM_PROMPT);
    assert_eq!(request.user, "What do lions eat?");
    assert_eq!(request.max_tokens, MAX_TOKENS);
    assert_eq!(request.max_tokens, 500);
    assert!((request.temperature - 0.7).abs() < f32::EPSILON);
}

#[tokio::test]
async fn off_topic_question_is_redirected_without_provider_call() {
    let provider = StubProvider::new(Canned::Text("Paris"));
    let reply = responder(&provider).reply("What's the capital of France?").await;

    assert_eq!(reply.outcome, Outcome::Redirect);
    assert_eq!(reply.text, REDIRECT_REPLY);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn provider_failure_becomes_connection_apology() {
    let provider = StubProvider::new(Canned::Fail);
    let reply = responder(&provider).reply("Tell me about whales").await;

    assert_eq!(reply.outcome, Outcome::ErrorFallback);
    assert_eq!(reply.text, ERROR_REPLY);
}

#[tokio::test]
async fn empty_or_missing_output_becomes_retry_message() {
    for canned in [Canned::Empty, Canned::Missing] {
        let provider = StubProvider::new(canned);
        let reply = responder(&provider).reply("Tell me about whales").await;

        assert_eq!(reply.outcome, Outcome::EmptyFallback);
        assert_eq!(reply.text, EMPTY_REPLY);
    }
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let provider = StubProvider::new(Canned::Text("Whales are mammals."));
    let responder = responder(&provider);

    let (a, b, c) = tokio::join!(
        responder.respond("Tell me about whales"),
        responder.respond("What's the capital of France?"),
        responder.respond("Are sharks fish?"),
    );

    assert_eq!(a, "Whales are mammals.");
    assert_eq!(b, REDIRECT_REPLY);
    assert_eq!(c, "Whales are mammals.");
    assert_eq!(provider.calls(), 2);
}
