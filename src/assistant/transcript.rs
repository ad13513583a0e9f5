use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{Record, RecordStore, Repository, StoreError, new_record_id};

pub const TRANSCRIPT_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl Record for ChatMessage {
    const STORAGE_KEY: &'static str = "assistantTranscript";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: new_record_id(),
            role,
            content: content.into(),
            sent_at,
        }
    }
}

/// The visible conversation, persisted with only the most recent `limit`
/// messages kept.
pub struct Transcript {
    store: RecordStore<ChatMessage>,
    limit: usize,
}

impl Transcript {
    pub fn open<R>(repo: R, limit: usize) -> Result<Self, StoreError>
    where
        R: Repository<ChatMessage> + 'static,
    {
        let store = RecordStore::open(repo, Vec::new)?;
        Ok(Self { store, limit })
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.store.records()
    }

    pub fn push(&mut self, message: ChatMessage) -> Result<(), StoreError> {
        let mut messages = self.store.records().to_vec();
        messages.push(message);
        let overflow = messages.len().saturating_sub(self.limit);
        if overflow > 0 {
            tracing::debug!("Dropping {} oldest chat messages", overflow);
            messages.drain(..overflow);
        }
        self.store.replace_all(messages)
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.replace_all(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::utc_day;
    use crate::storage::{KeyValueStore, MemoryStore, StoredRepository};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn open_transcript(store: &Arc<MemoryStore>, limit: usize) -> Transcript {
        let kv: Arc<dyn KeyValueStore> = store.clone();
        Transcript::open(StoredRepository::new(kv), limit).unwrap()
    }

    fn user_says(text: &str) -> ChatMessage {
        ChatMessage::new(ChatRole::User, text, utc_day(2024, 2, 1))
    }

    #[test]
    fn starts_empty() {
        let transcript = open_transcript(&Arc::new(MemoryStore::new()), TRANSCRIPT_LIMIT);
        assert!(transcript.messages().is_empty());
    }

    #[test]
    fn keeps_only_most_recent_messages() {
        let memory = Arc::new(MemoryStore::new());
        let mut transcript = open_transcript(&memory, 3);

        for i in 0..5 {
            transcript.push(user_says(&format!("message {}", i))).unwrap();
        }

        let contents: Vec<&str> = transcript.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["message 2", "message 3", "message 4"]);
        assert_eq!(open_transcript(&memory, 3).messages().len(), 3);
    }

    #[test]
    fn clear_persists_empty_transcript() {
        let memory = Arc::new(MemoryStore::new());
        let mut transcript = open_transcript(&memory, TRANSCRIPT_LIMIT);
        transcript.push(user_says("hello")).unwrap();

        transcript.clear().unwrap();

        assert!(open_transcript(&memory, TRANSCRIPT_LIMIT).messages().is_empty());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_value(user_says("hi")).unwrap();

        assert_eq!(json["role"], "user");
        assert_eq!(json["sentAt"], "2024-02-01T00:00:00Z");
    }
}
