//! Conversation management for sodachat
//!
//! The controller owns the conversation store, the persistence adapter and the API
//! client. Front-ends (browser and terminal) only render its state and forward
//! user intents to it.

pub mod controller;
pub mod format;
pub mod persistence;
pub mod storage;
pub mod store;

pub use controller::{prepare_input, ChatController, PendingReply};
pub use persistence::{ConversationPersistence, PersistenceError, STORAGE_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::ConversationStore;
