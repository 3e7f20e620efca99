use sodachat_core::format::format_message_time;
use sodachat_types::Message;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::app::SharedController;
use crate::dom;
use crate::utils;

const EXAMPLE_PROMPTS: [&str; 2] = ["What do you have in stock?", "I want to buy a coke"];

/// Redraw the message list, the loading indicator and the input controls
pub fn render(document: &Document, controller: &SharedController) -> Result<(), JsValue> {
    let container = dom::get_element_by_id(document, "messagesContainer")?;
    dom::clear_element(&container);

    let ctrl = controller.borrow();
    let loading = ctrl.is_loading();
    let messages = ctrl
        .store()
        .current_conversation()
        .map(|conv| conv.messages.as_slice())
        .unwrap_or_default();

    if messages.is_empty() {
        container.append_child(&create_empty_state(document)?)?;
    }

    for message in messages {
        container.append_child(&create_message_element(document, message)?)?;
    }

    if loading {
        let indicator = dom::create_text_element(document, "div", "loading-indicator", "AI is thinking...")?;
        container.append_child(&indicator)?;
    }

    dom::scroll_to_bottom(&container);
    sync_input_controls(document, loading)
}

/// Input is locked while a reply is pending; send also needs non-blank text
pub fn sync_input_controls(document: &Document, loading: bool) -> Result<(), JsValue> {
    let input = dom::get_input_by_id(document, "messageInput")?;
    let button = dom::get_button_by_id(document, "sendButton")?;

    input.set_disabled(loading);
    button.set_disabled(loading || input.value().trim().is_empty());
    Ok(())
}

fn create_empty_state(document: &Document) -> Result<Element, JsValue> {
    let empty = dom::create_element_with_class(document, "div", "empty-state")?;

    let examples = EXAMPLE_PROMPTS
        .iter()
        .map(|prompt| format!("<li>{}</li>", utils::escape_html(prompt)))
        .collect::<String>();

    empty.set_inner_html(&format!(
        r#"<h2>💬 Start a new conversation</h2>
        <p>I'm an AI soda machine!</p>
        <p>You can ask me anything or order, for example:</p>
        <ul class="examples">{}</ul>"#,
        examples
    ));

    Ok(empty)
}

fn create_message_element(document: &Document, message: &Message) -> Result<Element, JsValue> {
    let div = dom::create_element_with_class(document, "div", utils::message_class(message.is_user))?;

    div.set_inner_html(&format!(
        r#"<div class="message-content">{}</div><div class="message-time">{}</div>"#,
        utils::escape_html(&message.content),
        format_message_time(message.timestamp)
    ));

    Ok(div)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use sodachat_api::{ApiConfig, HttpAskClient};
    use sodachat_core::{ChatController, ConversationPersistence};
    use wasm_bindgen_test::*;

    use crate::browser_storage::BrowserStorage;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_chat_elements(document: &Document) {
        let body = document.body().unwrap();
        for (tag, id) in [("div", "messagesContainer"), ("input", "messageInput"), ("button", "sendButton")] {
            if document.get_element_by_id(id).is_none() {
                let element = document.create_element(tag).unwrap();
                element.set_id(id);
                body.append_child(&element).unwrap();
            }
        }
    }

    #[wasm_bindgen_test]
    fn empty_conversation_shows_empty_state_and_loading_row_mid_send() {
        let document = crate::document().unwrap();
        mount_chat_elements(&document);

        let persistence = ConversationPersistence::with_key(BrowserStorage::open(), "sodachat_test_chat_screen");
        let mut controller = ChatController::start(HttpAskClient::new(&ApiConfig::default()), persistence);
        let _pending = controller.begin_send("What do you have in stock?").unwrap();
        controller.create_new_conversation();
        let controller: SharedController = Rc::new(RefCell::new(controller));

        render(&document, &controller).unwrap();

        let container = dom::get_element_by_id(&document, "messagesContainer").unwrap();
        assert!(container.query_selector(".empty-state").unwrap().is_some());
        assert!(container.query_selector(".loading-indicator").unwrap().is_some());
        assert!(dom::get_input_by_id(&document, "messageInput").unwrap().disabled());
        assert!(dom::get_button_by_id(&document, "sendButton").unwrap().disabled());
    }
}
