use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat message. The single sender union used everywhere:
/// wire payloads, stored records, and prompt rendering all agree on
/// `user` / `freelancer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    User,
    Freelancer,
}

impl MessageSender {
    /// Lowercase label used in stored records and prompt history lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageSender::User => "user",
            MessageSender::Freelancer => "freelancer",
        }
    }
}

impl std::fmt::Display for MessageSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One chat message. Append-only: messages are never mutated or deleted.
///
/// `createdAt` serializes as epoch milliseconds so the store's order-by
/// compares numerically rather than lexicographically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: MessageSender,
    pub text: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: MessageSender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Identifies one conversation between a user and a freelancer.
///
/// Both ids arrive explicitly with every request — there is no ambient
/// "current user" anywhere in the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationId {
    pub user_id: String,
    pub freelancer_id: String,
}

impl ConversationId {
    pub fn new(user_id: impl Into<String>, freelancer_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            freelancer_id: freelancer_id.into(),
        }
    }

    /// Key of the conversation's message sub-collection in the store.
    pub fn storage_key(&self) -> String {
        format!("{}_{}", self.user_id, self.freelancer_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sender_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MessageSender::User).unwrap(),
            r#""user""#
        );
        assert_eq!(
            serde_json::to_string(&MessageSender::Freelancer).unwrap(),
            r#""freelancer""#
        );
    }

    #[test]
    fn test_sender_rejects_legacy_variants() {
        // 'me' / 'them' appeared in an older client; the store only ever
        // holds the canonical union.
        assert!(serde_json::from_str::<MessageSender>(r#""me""#).is_err());
        assert!(serde_json::from_str::<MessageSender>(r#""them""#).is_err());
    }

    #[test]
    fn test_created_at_serializes_as_epoch_millis() {
        let message = ChatMessage {
            id: Uuid::new_v4(),
            sender: MessageSender::User,
            text: "hello".to_string(),
            created_at: Utc.timestamp_millis_opt(1_700_000_000_123).unwrap(),
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["createdAt"], serde_json::json!(1_700_000_000_123_i64));
        assert_eq!(value["sender"], serde_json::json!("user"));

        let recovered: ChatMessage = serde_json::from_value(value).unwrap();
        assert_eq!(recovered.created_at, message.created_at);
    }

    #[test]
    fn test_conversation_storage_key() {
        let conversation = ConversationId::new("user1", "f2");
        assert_eq!(conversation.storage_key(), "user1_f2");
    }
}
