// src/services/chat.rs
// Sardinian travel-assistant chat

use std::sync::Arc;

use tracing::{debug, error};

use super::error::{GenerationError, GenerationResult};
use crate::llm::{LlmProvider, Message};
use crate::prompt::internal::{CHAT_EXAMPLE_QUESTIONS, CHAT_GREETING, CHAT_SYSTEM_PROMPT};

/// Most recent turns forwarded with each message
const MAX_HISTORY: usize = 20;

pub struct ChatService {
    provider: Arc<dyn LlmProvider>,
}

impl ChatService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    pub fn greeting(&self) -> &'static str {
        CHAT_GREETING
    }

    /// Placeholder questions for the chat input
    pub fn example_questions(&self) -> &'static [&'static str] {
        &CHAT_EXAMPLE_QUESTIONS
    }

    pub async fn reply(&self, history: Vec<Message>, message: &str) -> GenerationResult<String> {
        let message = message.trim();
        if message.is_empty() {
            return Err(GenerationError::InvalidInput(
                "Message cannot be empty".to_string(),
            ));
        }

        let mut messages: Vec<Message> = history
            .into_iter()
            .filter(|m| matches!(m.role.as_str(), "user" | "assistant"))
            .filter(|m| !m.content.trim().is_empty())
            .collect();
        if messages.len() > MAX_HISTORY {
            messages.drain(..messages.len() - MAX_HISTORY);
        }
        messages.push(Message::user(message));
        debug!("Chat request with {} messages", messages.len());

        let response = self
            .provider
            .chat(messages, CHAT_SYSTEM_PROMPT.to_string())
            .await
            .map_err(|e| {
                error!("Chat request failed: {:#}", e);
                GenerationError::provider(e)
            })?;

        Ok(response.content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{Response, TokenUsage};
    use anyhow::Result;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Message>>);

    #[async_trait]
    impl LlmProvider for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        async fn chat(&self, messages: Vec<Message>, _system: String) -> Result<Response> {
            *self.0.lock() = messages;
            Ok(Response {
                content: "Try Cala Luna.".to_string(),
                model: "recorder".to_string(),
                tokens: TokenUsage::default(),
                latency_ms: 0,
            })
        }
    }

    #[tokio::test]
    async fn rejects_empty_message() {
        let chat = ChatService::new(Arc::new(Recorder::default()));
        assert!(matches!(
            chat.reply(Vec::new(), "   ").await,
            Err(GenerationError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn forwards_history_and_new_message() {
        let recorder = Arc::new(Recorder::default());
        let chat = ChatService::new(recorder.clone());
        let history = vec![
            Message::assistant(CHAT_GREETING),
            Message::system("ignored"),
            Message::user("Hidden beaches?"),
        ];

        let reply = chat.reply(history, " And near Dorgali? ").await.unwrap();
        assert_eq!(reply, "Try Cala Luna.");

        let sent = recorder.0.lock().clone();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[2], Message::user("And near Dorgali?"));
    }

    #[tokio::test]
    async fn long_history_is_truncated() {
        let recorder = Arc::new(Recorder::default());
        let chat = ChatService::new(recorder.clone());
        let history = (0..30).map(|i| Message::user(format!("q{i}"))).collect();

        chat.reply(history, "last").await.unwrap();
        let sent = recorder.0.lock().clone();
        assert_eq!(sent.len(), MAX_HISTORY + 1);
        assert_eq!(sent[0].content, "q10");
    }
}
