use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom;

pub const APP_TITLE: &str = "🥤 Soda Machine AI Chat";
pub const APP_SUBTITLE: &str = "Powered by AI";

pub fn render(document: &Document) -> Result<(), JsValue> {
    dom::get_element_by_id(document, "appTitle")?.set_text_content(Some(APP_TITLE));
    dom::get_element_by_id(document, "appSubtitle")?.set_text_content(Some(APP_SUBTITLE));
    document.set_title("Soda Machine AI Chat");
    Ok(())
}
