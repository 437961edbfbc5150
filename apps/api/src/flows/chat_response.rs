//! Generate Chat Response — one reply written in the voice of a freelancer
//! persona, given the full conversation so far.
//!
//! The entire history supplied by the caller is forwarded, oldest first;
//! the caller owns history size.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{CHAT_RESPONSE_PROMPT_TEMPLATE, CHAT_RESPONSE_SYSTEM_TEMPLATE};
use crate::flows::Capability;
use crate::genai::GenAiClient;
use crate::models::chat::ChatMessage;
use crate::models::freelancer::FreelancerProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Generates the freelancer's next message in the conversation.
pub async fn generate_chat_response(
    genai: &GenAiClient,
    freelancer: &FreelancerProfile,
    history: &[ChatMessage],
) -> Result<ChatReply, AppError> {
    if history.is_empty() {
        return Err(AppError::Validation(
            "chatHistory cannot be empty".to_string(),
        ));
    }

    let system = CHAT_RESPONSE_SYSTEM_TEMPLATE
        .replace("{name}", &freelancer.name)
        .replace("{title}", &freelancer.title)
        .replace("{skills}", &freelancer.skills.join(", "));

    let prompt = CHAT_RESPONSE_PROMPT_TEMPLATE.replace("{history_block}", &render_history(history));

    genai
        .generate_json::<ChatReply>(&prompt, &system)
        .await
        .map_err(|e| AppError::generation(Capability::ChatResponse, e))
}

/// Renders the history as `**sender:** text` lines, oldest first.
fn render_history(history: &[ChatMessage]) -> String {
    history
        .iter()
        .map(|message| format!("**{}:** {}", message.sender, message.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::MessageSender;

    fn freelancer() -> FreelancerProfile {
        FreelancerProfile {
            id: "2".to_string(),
            name: "Marcus Chen".to_string(),
            title: "Mobile App Developer".to_string(),
            avatar_url: String::new(),
            skills: vec!["Flutter".to_string(), "Dart".to_string()],
            bio: String::new(),
            work_history: String::new(),
            job_preferences: String::new(),
            rate: 75.0,
            video_resume_url: None,
        }
    }

    #[test]
    fn test_history_renders_oldest_first_with_sender_labels() {
        let history = vec![
            ChatMessage::new(MessageSender::Freelancer, "Hi there!"),
            ChatMessage::new(MessageSender::User, "Hello, are you available?"),
        ];

        let block = render_history(&history);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "**freelancer:** Hi there!");
        assert_eq!(lines[1], "**user:** Hello, are you available?");
    }

    #[test]
    fn test_history_is_not_truncated() {
        let history: Vec<ChatMessage> = (0..200)
            .map(|i| ChatMessage::new(MessageSender::User, format!("message {i}")))
            .collect();

        let block = render_history(&history);
        assert_eq!(block.lines().count(), 200);
        assert!(block.contains("message 199"));
    }

    #[tokio::test]
    async fn test_empty_history_is_rejected_before_any_call() {
        let genai = GenAiClient::new("test-key".to_string());
        let result = generate_chat_response(&genai, &freelancer(), &[]).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_reply_parses_from_model_json() {
        let reply: ChatReply =
            serde_json::from_str(r#"{ "response": "Happy to help with your project!" }"#).unwrap();
        assert!(!reply.response.is_empty());
    }
}
