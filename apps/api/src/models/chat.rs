//! Coach chat data model.
//!
//! `ChatTurn` is what callers send back as history; `ChatMessage` is the
//! richer session-scoped record the API returns (append-only on the caller's
//! side, never persisted here).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::llm_client::Content;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One prior turn of the conversation, as replayed by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    /// Converts to the provider wire shape, preserving role and text.
    pub fn to_content(&self) -> Content {
        match self.role {
            ChatRole::User => Content::user(&self.text),
            ChatRole::Model => Content::model(&self.text),
        }
    }
}

/// A full chat message as returned to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ChatMessage {
    /// A fresh model-authored reply stamped now.
    pub fn from_model(text: String) -> Self {
        ChatMessage {
            id: Uuid::new_v4(),
            role: ChatRole::Model,
            text,
            timestamp: Utc::now(),
            is_error: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_turn_preserves_role_on_the_wire() {
        let turn = ChatTurn {
            role: ChatRole::Model,
            text: "Start with SQL.".to_string(),
        };
        let content = turn.to_content();
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["role"], "model");
        assert_eq!(json["parts"][0]["text"], "Start with SQL.");
    }

    #[test]
    fn test_chat_message_from_model_is_not_an_error() {
        let message = ChatMessage::from_model("Great question!".to_string());
        assert_eq!(message.role, ChatRole::Model);
        assert!(!message.is_error);
    }

    #[test]
    fn test_is_error_is_omitted_when_false() {
        let message = ChatMessage::from_model("hi".to_string());
        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("isError").is_none());
    }

    #[test]
    fn test_chat_turn_deserializes_from_client_json() {
        let turn: ChatTurn =
            serde_json::from_str(r#"{"role": "user", "text": "hello"}"#).unwrap();
        assert_eq!(turn.role, ChatRole::User);
    }
}
