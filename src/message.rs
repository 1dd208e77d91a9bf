// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

/// What the `message` field holds once JSON falsiness is applied.
#[derive(Debug, PartialEq)]
pub enum MessageInput<'a> {
    /// Missing, `null`, `false`, `0` or `""`.
    Missing,
    Text(&'a str),
    /// Truthy but not a string, e.g. `true`, `5`, an object or an array.
    NotText,
}

impl ChatRequest {
    pub fn input(&self) -> MessageInput<'_> {
        match &self.message {
            None | Some(Value::Null) | Some(Value::Bool(false)) => MessageInput::Missing,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => MessageInput::Missing,
            Some(Value::String(s)) if s.is_empty() => MessageInput::Missing,
            Some(Value::String(s)) => MessageInput::Text(s),
            Some(_) => MessageInput::NotText,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_input(body: &str, expected: MessageInput<'_>) {
        let req: ChatRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.input(), expected, "{body}");
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for body in [
            r#"{}"#,
            r#"{"message": null}"#,
            r#"{"message": false}"#,
            r#"{"message": 0}"#,
            r#"{"message": 0.0}"#,
            r#"{"message": ""}"#,
        ] {
            assert_input(body, MessageInput::Missing);
        }
    }

    #[test]
    fn truthy_non_strings_are_not_text() {
        for body in [
            r#"{"message": true}"#,
            r#"{"message": 5}"#,
            r#"{"message": []}"#,
            r#"{"message": {"text": "lions"}}"#,
        ] {
            assert_input(body, MessageInput::NotText);
        }
    }

    #[test]
    fn whitespace_is_still_text() {
        assert_input(r#"{"message": "  "}"#, MessageInput::Text("  "));
    }
}
