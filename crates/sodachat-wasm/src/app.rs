use std::cell::RefCell;
use std::rc::Rc;

use sodachat_api::{AskClient, HttpAskClient};
use sodachat_core::{prepare_input, ChatController, ConversationPersistence};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::browser_storage::BrowserStorage;
use crate::components::{chat_screen, header, sidebar};
use crate::config;
use crate::dom;

pub(crate) type SharedController = Rc<RefCell<ChatController<HttpAskClient, BrowserStorage>>>;

pub struct ChatApp {
    document: Document,
    controller: SharedController,
}

impl ChatApp {
    pub fn new() -> Result<Self, JsValue> {
        let document = crate::document()?;

        let api = config::api_config();
        log::info!("Backend endpoint: {}", api.ask_url());

        let client = HttpAskClient::new(&api);
        let persistence = ConversationPersistence::new(BrowserStorage::open());
        let controller = ChatController::start(client, persistence);

        Ok(Self {
            document,
            controller: Rc::new(RefCell::new(controller)),
        })
    }

    pub fn start(self) -> Result<(), JsValue> {
        header::render(&self.document)?;

        self.setup_new_conversation_button()?;
        self.setup_conversation_list()?;
        self.setup_message_input()?;
        self.setup_input_form()?;

        render_all(&self.document, &self.controller)
    }

    fn setup_new_conversation_button(&self) -> Result<(), JsValue> {
        let button = dom::get_element_by_id(&self.document, "newConversationButton")?;
        let document = self.document.clone();
        let controller = self.controller.clone();

        dom::add_click_listener(&button, move || {
            let id = controller.borrow_mut().create_new_conversation();
            log::debug!("Created conversation {}", id);
            if let Err(e) = render_all(&document, &controller) {
                log::error!("Failed to render new conversation: {:?}", e);
            }
        })
    }

    fn setup_conversation_list(&self) -> Result<(), JsValue> {
        let list = dom::get_element_by_id(&self.document, "conversationList")?;
        let document = self.document.clone();
        let controller = self.controller.clone();

        dom::add_event_listener(&list, "click", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(id) = sidebar::conversation_id_at(&target) else {
                return;
            };

            controller.borrow_mut().select_conversation(id);
            if let Err(e) = render_all(&document, &controller) {
                log::error!("Failed to render after selecting conversation: {:?}", e);
            }
        })
    }

    fn setup_message_input(&self) -> Result<(), JsValue> {
        let input = dom::get_element_by_id(&self.document, "messageInput")?;
        let document = self.document.clone();
        let controller = self.controller.clone();

        dom::add_event_listener(&input, "input", move |_event| {
            let loading = controller.borrow().is_loading();
            if let Err(e) = chat_screen::sync_input_controls(&document, loading) {
                log::error!("Failed to update send button: {:?}", e);
            }
        })
    }

    fn setup_input_form(&self) -> Result<(), JsValue> {
        let form = dom::get_element_by_id(&self.document, "inputForm")?;
        let document = self.document.clone();
        let controller = self.controller.clone();

        dom::add_event_listener(&form, "submit", move |event| {
            event.prevent_default();
            if let Err(e) = send_handler(&document, &controller) {
                log::error!("Failed to send message: {:?}", e);
            }
        })
    }
}

/// Redraw every region from the controller state
pub(crate) fn render_all(document: &Document, controller: &SharedController) -> Result<(), JsValue> {
    sidebar::render(document, controller)?;
    chat_screen::render(document, controller)
}

fn send_handler(document: &Document, controller: &SharedController) -> Result<(), JsValue> {
    let input = dom::get_input_by_id(document, "messageInput")?;
    let raw = input.value();
    let Some(content) = prepare_input(&raw).map(str::to_string) else {
        return Ok(());
    };

    let pending = controller.borrow_mut().begin_send(&content);
    let Some(pending) = pending else {
        return Ok(());
    };

    input.set_value("");
    // The reply must still be completed if this render fails
    if let Err(e) = render_all(document, controller) {
        log::error!("Failed to render pending message: {:?}", e);
    }

    let client = controller.borrow().client().clone();
    let document = document.clone();
    let controller = controller.clone();

    wasm_bindgen_futures::spawn_local(async move {
        let reply = client.send_message(&content).await;
        controller.borrow_mut().complete_send(pending, reply);
        if let Err(e) = render_all(&document, &controller) {
            log::error!("Failed to render reply: {:?}", e);
        }
    });

    Ok(())
}
