use std::sync::Arc;
use std::time::Duration;

use crate::assistant::{Assistant, ChatSession, MockAssistant, Transcript};
use crate::board::BoardRoster;
use crate::calendar::EventCalendar;
use crate::donors::DonorDirectory;
use crate::finance::Ledger;
use crate::storage::config::Config;
use crate::storage::{KeyValueStore, StoreError, StoredRepository, open_store};

/// Every collection the CRM works with, opened against one key-value store.
pub struct Crm {
    pub board: BoardRoster,
    pub calendar: EventCalendar,
    pub ledger: Ledger,
    pub donors: DonorDirectory,
    store: Arc<dyn KeyValueStore>,
}

impl Crm {
    pub fn open(config: &Config) -> Result<Self, StoreError> {
        let store = open_store(&config.storage)?;
        Self::with_store(store)
    }

    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Result<Self, StoreError> {
        let crm = Self {
            board: BoardRoster::open(StoredRepository::new(store.clone()))?,
            calendar: EventCalendar::open(StoredRepository::new(store.clone()))?,
            ledger: Ledger::open(StoredRepository::new(store.clone()), StoredRepository::new(store.clone()))?,
            donors: DonorDirectory::open(StoredRepository::new(store.clone()))?,
            store,
        };
        tracing::info!(
            "Opened CRM: {} board members, {} events, {} transactions, {} donors",
            crm.board.members().len(),
            crm.calendar.events().len(),
            crm.ledger.transactions().len(),
            crm.donors.get().len()
        );
        Ok(crm)
    }

    /// A chat session over the persisted transcript, answered by `assistant`.
    pub fn chat_session(&self, assistant: Arc<dyn Assistant>, limit: usize) -> Result<ChatSession, StoreError> {
        let transcript = Transcript::open(StoredRepository::new(self.store.clone()), limit)?;
        Ok(ChatSession::new(assistant, transcript))
    }

    /// The mock assistant configured with the reply delay and transcript limit
    /// from `config`.
    pub fn mock_chat(&self, config: &Config) -> Result<ChatSession, StoreError> {
        let assistant = MockAssistant::with_delay(Duration::from_millis(config.assistant.reply_delay_ms));
        self.chat_session(Arc::new(assistant), config.assistant.transcript_limit)
    }
}
