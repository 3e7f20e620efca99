use sodachat_types::Conversation;
use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};

/// Key holding the JSON array of conversations
pub const STORAGE_KEY: &str = "chat_conversations";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to serialize conversations: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("stored conversations are corrupt: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Saves and loads the whole conversation list under a single key.
///
/// Timestamps are written as RFC 3339 text in UTC; loading accepts any RFC 3339
/// offset, including the millisecond `...Z` form browsers produce.
#[derive(Debug)]
pub struct ConversationPersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ConversationPersistence<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&mut self, conversations: &[Conversation]) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(conversations).map_err(PersistenceError::Serialize)?;
        self.store.set_item(&self.key, &json)?;
        Ok(())
    }

    /// An absent entry is an empty list, not an error
    pub fn load(&self) -> Result<Vec<Conversation>, PersistenceError> {
        match self.store.get_item(&self.key)? {
            Some(json) if !json.trim().is_empty() => {
                serde_json::from_str(&json).map_err(PersistenceError::Deserialize)
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Save, logging instead of returning the failure. Returns whether the write happened.
    pub fn save_or_log(&mut self, conversations: &[Conversation]) -> bool {
        match self.save(conversations) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error saving conversations: {}", e);
                false
            }
        }
    }

    /// Load, treating any failure as "no prior conversations"
    pub fn load_or_default(&self) -> Vec<Conversation> {
        self.load().unwrap_or_else(|e| {
            log::error!("Error loading conversations: {}", e);
            Vec::new()
        })
    }
}
