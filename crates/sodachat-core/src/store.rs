use sodachat_types::{title_from_first_message, Conversation, ConversationId, Message};

/// The conversation list plus the id of the conversation on screen.
///
/// Newest-created conversations sit at the front. Nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    current_id: Option<ConversationId>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the store from previously saved conversations.
    ///
    /// The most recently updated conversation becomes current (the earliest in list
    /// order wins a tie). When nothing was saved a fresh conversation is created.
    pub fn from_saved(saved: Vec<Conversation>) -> Self {
        let mut store = Self {
            conversations: saved,
            current_id: None,
        };

        let most_recent = store
            .conversations
            .iter()
            .fold(None::<&Conversation>, |latest, conv| match latest {
                Some(latest) if conv.updated_at <= latest.updated_at => Some(latest),
                _ => Some(conv),
            })
            .map(|conv| conv.id.clone());

        match most_recent {
            Some(id) => store.current_id = Some(id),
            None => {
                store.create_new_conversation();
            }
        }

        store
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|conv| conv.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|conv| conv.id == id)
    }

    /// Prepend an empty conversation and make it current
    pub fn create_new_conversation(&mut self) -> ConversationId {
        let conversation = Conversation::new();
        let id = conversation.id.clone();

        self.conversations.insert(0, conversation);
        self.current_id = Some(id.clone());
        id
    }

    /// `None` when no id is selected or the selected id is unknown
    pub fn current_conversation(&self) -> Option<&Conversation> {
        self.current_id.as_deref().and_then(|id| self.get(id))
    }

    /// Retitle from a first message. Returns false (and changes nothing) for an unknown id.
    pub fn update_conversation_title(&mut self, id: &str, first_message: &str) -> bool {
        match self.get_mut(id) {
            Some(conv) => {
                conv.title = title_from_first_message(first_message);
                conv.touch();
                true
            }
            None => false,
        }
    }

    /// Append a message. Returns false (and changes nothing) for an unknown id.
    pub fn add_message_to_conversation(&mut self, id: &str, message: Message) -> bool {
        match self.get_mut(id) {
            Some(conv) => {
                conv.messages.push(message);
                conv.touch();
                true
            }
            None => false,
        }
    }

    /// Selection is unconditional; an unknown id simply leaves nothing current
    pub fn select_conversation(&mut self, id: impl Into<ConversationId>) {
        self.current_id = Some(id.into());
    }
}
