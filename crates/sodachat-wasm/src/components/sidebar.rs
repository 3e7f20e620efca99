use chrono::Utc;
use sodachat_core::format::format_conversation_date;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use sodachat_types::Conversation;

use crate::app::SharedController;
use crate::dom;
use crate::utils;

/// Redraw the conversation list, newest first, with the current one highlighted.
///
/// Items carry only a `data-id`; clicks are handled by a single listener on the
/// list container that resolves them with `conversation_id_at`.
pub fn render(document: &Document, controller: &SharedController) -> Result<(), JsValue> {
    let container = dom::get_element_by_id(document, "conversationList")?;
    dom::clear_element(&container);

    let ctrl = controller.borrow();
    let store = ctrl.store();

    if store.is_empty() {
        let empty = dom::create_text_element(document, "div", "empty-state", "No conversations yet")?;
        container.append_child(&empty)?;
        return Ok(());
    }

    let now = Utc::now();
    for conv in store.conversations() {
        let is_current = store.current_id() == Some(conv.id.as_str());
        let item = create_conversation_item(document, conv, is_current, &now)?;
        container.append_child(&item)?;
    }

    Ok(())
}

fn create_conversation_item(
    document: &Document,
    conv: &Conversation,
    is_current: bool,
    now: &chrono::DateTime<Utc>,
) -> Result<Element, JsValue> {
    let item = dom::create_element_with_class(document, "div", utils::conversation_item_class(is_current))?;
    item.set_attribute("data-id", &conv.id)?;

    let title = dom::create_text_element(document, "div", "conversation-title", &conv.title)?;
    let date = dom::create_text_element(
        document,
        "div",
        "conversation-date",
        &format_conversation_date(conv.updated_at, *now),
    )?;
    item.append_child(&title)?;
    item.append_child(&date)?;

    Ok(item)
}

/// Id of the sidebar item containing `target`, if any
pub fn conversation_id_at(target: &Element) -> Option<String> {
    target
        .closest(".conversation-item")
        .ok()
        .flatten()?
        .get_attribute("data-id")
}
