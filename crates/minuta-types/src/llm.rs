//! LLM request/response types for Minuta.
//!
//! Provider-agnostic shapes for a single completion call: a system
//! instruction, an ordered message list, and sampling parameters. The
//! Gemini wire structures live in minuta-infra; these are the shapes the
//! core logic speaks.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Model,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Model => write!(f, "model"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "model" => Ok(MessageRole::Model),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Model,
            text: text.into(),
        }
    }
}

/// Request to an LLM provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    /// System directive placed outside the message turns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
    /// Conversation turns, oldest first. A single-shot draft request
    /// carries exactly one user message.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature; drafting uses a low value (0.4) to favor
    /// consistent legal phrasing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Optional reasoning-effort budget forwarded to the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_budget: Option<u32>,
}

/// Response from an LLM provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The generated text, already flattened from the provider's
    /// content-part structure. Guaranteed non-empty by the provider.
    pub text: String,
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Model] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_role_serde() {
        let json = serde_json::to_string(&MessageRole::Model).unwrap();
        assert_eq!(json, "\"model\"");
    }

    #[test]
    fn test_chat_message_constructors() {
        let msg = ChatMessage::user("Altere o foro");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.text, "Altere o foro");
        assert_eq!(ChatMessage::model("ok").role, MessageRole::Model);
    }

    #[test]
    fn test_completion_request_skips_absent_fields() {
        let req = CompletionRequest {
            model: "gemini-3-pro-preview".to_string(),
            system_instruction: None,
            messages: vec![ChatMessage::user("hi")],
            temperature: None,
            thinking_budget: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("system_instruction").is_none());
        assert!(json.get("temperature").is_none());
        assert!(json.get("thinking_budget").is_none());
    }
}
