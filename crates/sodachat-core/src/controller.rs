use sodachat_api::{ApiError, AskClient};
use sodachat_types::{ConversationId, Message, ASSISTANT_APOLOGY};

use crate::persistence::ConversationPersistence;
use crate::storage::KeyValueStore;
use crate::store::ConversationStore;

/// Trim raw input; `None` when nothing is left to send
pub fn prepare_input(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// A user message has been recorded and an assistant reply is owed to this conversation
#[derive(Debug)]
#[must_use = "a pending reply must be passed to `complete_send`"]
pub struct PendingReply {
    conversation_id: ConversationId,
}

impl PendingReply {
    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }
}

/// Owns the conversation store and folds user actions and API results into it.
///
/// Every mutation is followed by a save; save failures are logged and the
/// in-memory state carries on.
pub struct ChatController<C, S> {
    store: ConversationStore,
    persistence: ConversationPersistence<S>,
    client: C,
    loading: bool,
}

impl<C: AskClient, S: KeyValueStore> ChatController<C, S> {
    /// Load saved conversations (or start fresh) and select the most recent one
    pub fn start(client: C, persistence: ConversationPersistence<S>) -> Self {
        let saved = persistence.load_or_default();
        let created_fresh = saved.is_empty();
        let store = ConversationStore::from_saved(saved);

        log::info!(
            "Loaded {} conversation(s), current: {:?}",
            store.len(),
            store.current_id()
        );

        let mut controller = Self {
            store,
            persistence,
            client,
            loading: false,
        };

        if created_fresh {
            controller.persist();
        }

        controller
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn persistence(&self) -> &ConversationPersistence<S> {
        &self.persistence
    }

    /// True while an assistant reply is pending; the send control is disabled meanwhile
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn create_new_conversation(&mut self) -> ConversationId {
        let id = self.store.create_new_conversation();
        self.persist();
        id
    }

    pub fn select_conversation(&mut self, id: impl Into<ConversationId>) {
        self.store.select_conversation(id);
    }

    /// Record the user's message and enter the sending state.
    ///
    /// Returns `None` without touching anything when no conversation is current or a
    /// reply is already pending.
    pub fn begin_send(&mut self, content: &str) -> Option<PendingReply> {
        if self.loading {
            log::warn!("Ignoring send while a reply is pending");
            return None;
        }

        let (conversation_id, is_first_message) = {
            let current = self.store.current_conversation()?;
            (current.id.clone(), current.is_empty())
        };

        self.store
            .add_message_to_conversation(&conversation_id, Message::from_user(content));

        if is_first_message {
            self.store.update_conversation_title(&conversation_id, content);
        }

        self.persist();
        self.loading = true;

        Some(PendingReply { conversation_id })
    }

    /// Append the assistant's reply (or the apology on failure) and leave the sending state
    pub fn complete_send(&mut self, pending: PendingReply, reply: Result<String, ApiError>) {
        let content = match reply {
            Ok(text) => text,
            Err(e) => {
                log::error!("Failed to send message: {}", e);
                ASSISTANT_APOLOGY.to_string()
            }
        };

        self.store
            .add_message_to_conversation(&pending.conversation_id, Message::from_assistant(content));
        self.persist();
        self.loading = false;
    }

    /// Full send round trip. Returns false when the send was not started.
    pub async fn send_message(&mut self, content: &str) -> bool {
        let Some(pending) = self.begin_send(content) else {
            return false;
        };

        let reply = self.client.send_message(content).await;
        self.complete_send(pending, reply);
        true
    }

    fn persist(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.persistence.save_or_log(self.store.conversations());
    }
}
