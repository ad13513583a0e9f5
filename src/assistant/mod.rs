pub mod responder;
pub mod transcript;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::storage::StoreError;

pub use responder::{KeywordResponder, PLACEHOLDER_REPLY, Rule, default_rules};
pub use transcript::{ChatMessage, ChatRole, TRANSCRIPT_LIMIT, Transcript};

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

#[async_trait]
pub trait Assistant: Send + Sync {
    async fn reply(&self, question: &str) -> String;
}

/// Answers from canned keyword rules after an artificial pause.
pub struct MockAssistant {
    responder: KeywordResponder,
    delay: Duration,
}

impl Default for MockAssistant {
    fn default() -> Self {
        Self::new(KeywordResponder::default(), DEFAULT_REPLY_DELAY)
    }
}

impl MockAssistant {
    pub fn new(responder: KeywordResponder, delay: Duration) -> Self {
        Self { responder, delay }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self::new(KeywordResponder::default(), delay)
    }
}

#[async_trait]
impl Assistant for MockAssistant {
    async fn reply(&self, question: &str) -> String {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.responder.respond(question)
    }
}

pub struct ChatSession {
    assistant: Arc<dyn Assistant>,
    transcript: Transcript,
}

impl ChatSession {
    pub fn new(assistant: Arc<dyn Assistant>, transcript: Transcript) -> Self {
        Self { assistant, transcript }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.transcript.messages()
    }

    /// Records the question and the assistant's answer. Blank input is
    /// ignored and yields `None`.
    pub async fn send(&mut self, input: &str) -> Result<Option<ChatMessage>, StoreError> {
        if input.trim().is_empty() {
            return Ok(None);
        }

        self.transcript
            .push(ChatMessage::new(ChatRole::User, input, Utc::now()))?;

        let answer = self.assistant.reply(input).await;
        let reply = ChatMessage::new(ChatRole::Assistant, answer, Utc::now());
        self.transcript.push(reply.clone())?;
        tracing::debug!("Assistant replied to {:?}", input);

        Ok(Some(reply))
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.transcript.clear()
    }
}
