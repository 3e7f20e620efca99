//! Browser-only checks: `wasm-pack test --headless --firefox crates/sodachat-wasm`

#![cfg(target_arch = "wasm32")]

use sodachat_core::{ConversationPersistence, KeyValueStore};
use sodachat_types::Message;
use sodachat_wasm::BrowserStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trips_raw_values() {
    let mut storage = BrowserStorage::open();
    storage.set_item("sodachat_test_raw", "[]").unwrap();
    assert_eq!(storage.get_item("sodachat_test_raw").unwrap().as_deref(), Some("[]"));
}

#[wasm_bindgen_test]
fn conversations_survive_a_reload() {
    let mut persistence = ConversationPersistence::with_key(BrowserStorage::open(), "sodachat_test_reload");
    let mut conv = sodachat_types::Conversation::new();
    conv.messages.push(Message::from_user("I want to buy a coke"));
    persistence.save(std::slice::from_ref(&conv)).unwrap();

    let reloaded = ConversationPersistence::with_key(BrowserStorage::open(), "sodachat_test_reload")
        .load()
        .unwrap();
    assert_eq!(reloaded, vec![conv]);
}
