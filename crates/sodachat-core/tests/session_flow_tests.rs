use async_trait::async_trait;
use pretty_assertions::assert_eq;
use sodachat_api::{ApiError, AskClient};
use sodachat_core::{ChatController, ConversationPersistence, FileStore, KeyValueStore, STORAGE_KEY};
use sodachat_types::{ASSISTANT_APOLOGY, PLACEHOLDER_TITLE};
use tempfile::TempDir;

/// Echoes the question back, or fails every request when `down` is set
struct EchoBackend {
    down: bool,
}

#[async_trait(?Send)]
impl AskClient for EchoBackend {
    async fn send_message(&self, content: &str) -> Result<String, ApiError> {
        if self.down {
            Err(ApiError::Status {
                status: 502,
                body: "Bad Gateway".to_string(),
            })
        } else {
            Ok(format!("You said: {}", content))
        }
    }
}

fn open(dir: &TempDir, down: bool) -> ChatController<EchoBackend, FileStore> {
    let store = FileStore::new(dir.path()).unwrap();
    ChatController::start(EchoBackend { down }, ConversationPersistence::new(store))
}

#[tokio::test]
async fn test_conversations_survive_restart() {
    let dir = TempDir::new().unwrap();

    let first_id = {
        let mut controller = open(&dir, false);
        controller.send_message("What do you have in stock?").await;
        controller.store().current_id().unwrap().to_string()
    };

    let controller = open(&dir, false);
    let conv = controller.store().current_conversation().unwrap();

    assert_eq!(controller.store().len(), 1);
    assert_eq!(conv.id, first_id);
    assert_eq!(conv.title, "What do you have in stock?");
    assert_eq!(conv.messages.len(), 2);
    assert_eq!(conv.messages[1].content, "You said: What do you have in stock?");
}

#[tokio::test]
async fn test_restart_resumes_most_recently_updated_conversation() {
    let dir = TempDir::new().unwrap();

    let older_id = {
        let mut controller = open(&dir, false);
        let older_id = controller.store().current_id().unwrap().to_string();
        controller.create_new_conversation();
        controller.send_message("I want to buy a coke").await;

        // Go back to the first conversation and make it the most recently updated
        controller.select_conversation(older_id.clone());
        controller.send_message("Any sugar free drinks?").await;
        older_id
    };

    let controller = open(&dir, false);
    assert_eq!(controller.store().len(), 2);
    assert_eq!(controller.store().current_id(), Some(older_id.as_str()));
}

#[tokio::test]
async fn test_backend_outage_is_recorded_as_apology() {
    let dir = TempDir::new().unwrap();
    let mut controller = open(&dir, true);

    controller.send_message("hi").await;

    let conv = controller.store().current_conversation().unwrap();
    assert_eq!(conv.messages[1].content, ASSISTANT_APOLOGY);
    assert!(!controller.is_loading());

    let reloaded = open(&dir, false);
    let conv = reloaded.store().current_conversation().unwrap();
    assert_eq!(conv.messages[1].content, ASSISTANT_APOLOGY);
}

#[test]
fn test_corrupt_file_starts_fresh_and_is_overwritten() {
    let dir = TempDir::new().unwrap();
    FileStore::new(dir.path())
        .unwrap()
        .set_item(STORAGE_KEY, "this is not json")
        .unwrap();

    let controller = open(&dir, false);
    let conv = controller.store().current_conversation().unwrap();
    assert_eq!(conv.title, PLACEHOLDER_TITLE);

    let raw = std::fs::read_to_string(dir.path().join("chat_conversations.json")).unwrap();
    assert!(raw.starts_with('['));
}
