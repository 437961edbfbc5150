//! Conversation message log — an append-only sub-collection per
//! conversation, read back in `createdAt` order.

use crate::models::chat::{ChatMessage, ConversationId, MessageSender};
use crate::store::{DocumentStore, StoreError};

/// Field the history read orders by.
const ORDER_FIELD: &str = "createdAt";

fn messages_collection(conversation: &ConversationId) -> String {
    format!("chats/{}/messages", conversation.storage_key())
}

/// Appends one message to the conversation log. Messages are never
/// mutated or deleted afterwards.
pub async fn append_message(
    store: &dyn DocumentStore,
    conversation: &ConversationId,
    sender: MessageSender,
    text: &str,
) -> Result<ChatMessage, StoreError> {
    let message = ChatMessage::new(sender, text);
    store
        .set(
            &messages_collection(conversation),
            &message.id.to_string(),
            serde_json::to_value(&message)?,
        )
        .await?;
    Ok(message)
}

/// Loads the full conversation history, oldest first.
pub async fn load_history(
    store: &dyn DocumentStore,
    conversation: &ConversationId,
) -> Result<Vec<ChatMessage>, StoreError> {
    let records = store
        .query(&messages_collection(conversation), ORDER_FIELD)
        .await?;

    records
        .into_iter()
        .map(|record| serde_json::from_value(record).map_err(StoreError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryDocumentStore;
    use serde_json::json;
    use uuid::Uuid;

    fn conversation() -> ConversationId {
        ConversationId::new("user1", "2")
    }

    #[tokio::test]
    async fn test_history_is_ordered_by_created_at() {
        let store = MemoryDocumentStore::new();
        let conversation = conversation();
        let collection = messages_collection(&conversation);

        // Written deliberately out of order.
        for (millis, text) in [(3_000, "third"), (1_000, "first"), (2_000, "second")] {
            let id = Uuid::new_v4().to_string();
            store
                .set(
                    &collection,
                    &id,
                    json!({
                        "id": id,
                        "sender": "user",
                        "text": text,
                        "createdAt": millis,
                    }),
                )
                .await
                .unwrap();
        }

        let history = load_history(&store, &conversation).await.unwrap();
        let texts: Vec<&str> = history.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);

        // Non-decreasing createdAt throughout
        assert!(history.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[tokio::test]
    async fn test_append_then_load_round_trips() {
        let store = MemoryDocumentStore::new();
        let conversation = conversation();

        append_message(&store, &conversation, MessageSender::User, "hello")
            .await
            .unwrap();
        append_message(&store, &conversation, MessageSender::Freelancer, "hi there")
            .await
            .unwrap();

        let history = load_history(&store, &conversation).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender, MessageSender::User);
        assert_eq!(history[1].sender, MessageSender::Freelancer);
    }

    #[tokio::test]
    async fn test_conversations_are_isolated() {
        let store = MemoryDocumentStore::new();
        let first = ConversationId::new("user1", "2");
        let second = ConversationId::new("user1", "3");

        append_message(&store, &first, MessageSender::User, "for freelancer 2")
            .await
            .unwrap();

        let history = load_history(&store, &second).await.unwrap();
        assert!(history.is_empty());
    }
}
