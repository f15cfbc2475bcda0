//! Chat message entity and port.
//!
//! Maps to `chat/messages/`. The endpoint returns every message the caller
//! sent or received, newest first.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,

    #[serde(default)]
    pub sender: Option<i64>,

    #[serde(default)]
    pub sender_username: String,

    pub receiver: i64,

    #[serde(default)]
    pub receiver_username: String,

    /// Listing the conversation is about
    #[serde(default)]
    pub item: Option<i64>,

    pub text: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ChatMessage {
    /// Whether `user_id` is the sender or the receiver.
    pub fn involves(&self, user_id: i64) -> bool {
        self.sender == Some(user_id) || self.receiver == user_id
    }
}

/// Body of `POST chat/messages/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingMessage {
    pub receiver: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<i64>,
}

/// Port for chat endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn messages(&self) -> Result<Vec<ChatMessage>, AppError>;

    async fn send_message(&self, message: &OutgoingMessage) -> Result<ChatMessage, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_payload() {
        let msg: ChatMessage = serde_json::from_str(
            r#"{"id": 1, "sender": 2, "sender_username": "mei", "receiver": 3,
                "receiver_username": "somchai", "item": null, "text": "Still available?",
                "created_at": "2025-03-03T12:00:00Z"}"#,
        )
        .unwrap();

        assert!(msg.involves(2));
        assert!(msg.involves(3));
        assert!(!msg.involves(4));
    }

    #[test]
    fn test_outgoing_omits_missing_item() {
        let body = OutgoingMessage {
            receiver: 3,
            text: "hi".into(),
            item: None,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"receiver": 3, "text": "hi"})
        );
    }
}
