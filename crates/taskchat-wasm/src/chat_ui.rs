use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, KeyboardEvent};

use taskchat_core::{markdown, submit_with, ChatPanel, Message};

use crate::dom;
use crate::input::InputControl;
use crate::transport::FetchTransport;
use crate::utils::{self, BrowserClock, PageConfig};

const ROOT_ID: &str = "chatRoot";
const INPUT_ID: &str = "messageInput";
const BUTTON_ID: &str = "sendButton";
const MESSAGES_ID: &str = "messagesContainer";
const TYPING_ID: &str = "typingIndicator";
const STATUS_TEXT_ID: &str = "statusText";
const ERROR_ID: &str = "errorBanner";

/// The chat page: input control, status header and message list.
///
/// All handles are reference counted so event closures can share them.
#[derive(Clone)]
pub struct ChatApp {
    document: Document,
    panel: Rc<RefCell<ChatPanel>>,
    transport: Rc<FetchTransport>,
    input: InputControl,
    view: Rc<RefCell<ViewState>>,
}

/// What has already been pushed to the DOM
#[derive(Default)]
struct ViewState {
    rendered: usize,
    revision: u64,
}

impl ChatApp {
    pub fn new() -> Result<Self, JsValue> {
        let document = crate::document()?;
        let root = dom::get_element_by_id(&document, ROOT_ID)?;
        let config = PageConfig::from_element(&root);
        log::info!("Chat endpoint: {}", config.endpoint);

        let input = InputControl::bind(&document, INPUT_ID, BUTTON_ID)?;

        Ok(Self {
            document,
            panel: Rc::new(RefCell::new(ChatPanel::new())),
            transport: Rc::new(FetchTransport::new(config.endpoint, config.timeout)),
            input,
            view: Rc::new(RefCell::new(ViewState::default())),
        })
    }

    pub fn start(self) -> Result<(), JsValue> {
        self.setup_input()?;
        self.render()?;
        self.input.focus();
        Ok(())
    }

    fn setup_input(&self) -> Result<(), JsValue> {
        let app = self.clone();
        self.input.on_change(move |value| {
            app.panel.borrow_mut().set_draft(value);
            app.input.sync(&app.panel.borrow().input_props());
        })?;

        let app = self.clone();
        self.input.on_submit(move || app.clone().spawn_send())?;

        let app = self.clone();
        self.input.on_key_press(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                app.clone().spawn_send();
            }
        })?;

        Ok(())
    }

    fn spawn_send(self) {
        wasm_bindgen_futures::spawn_local(async move {
            self.send_message().await;
        });
    }

    /// Submit the draft, rendering once when it is accepted and once when
    /// the reply settles. A failed render is logged and never interrupts
    /// the exchange.
    async fn send_message(&self) {
        let sent = submit_with(&self.panel, self.transport.as_ref(), &BrowserClock, |panel| {
            if let Err(e) = self.render_panel(panel) {
                log::error!("Failed to update chat view: {:?}", e);
            }
        })
        .await;

        if !sent {
            log::debug!("Nothing to send");
        }
    }

    fn render(&self) -> Result<(), JsValue> {
        self.render_panel(&self.panel.borrow())
    }

    fn render_panel(&self, panel: &ChatPanel) -> Result<(), JsValue> {
        let mut view = self.view.borrow_mut();

        let container = dom::get_element_by_id(&self.document, MESSAGES_ID)?;
        let typing = dom::get_element_by_id(&self.document, TYPING_ID)?;
        for message in &panel.messages()[view.rendered..] {
            let bubble = self.render_message(message)?;
            container.insert_before(&bubble, Some(typing.as_ref()))?;
        }
        view.rendered = panel.messages().len();

        self.render_status(panel.is_busy(), panel.last_error())?;
        self.input.sync(&panel.input_props());

        if view.revision != panel.revision() {
            view.revision = panel.revision();
            dom::scroll_to_bottom(&container);
        }

        Ok(())
    }

    fn render_message(&self, msg: &Message) -> Result<Element, JsValue> {
        let row = dom::create_element_with_class(&self.document, "div", "message-row")?;
        let bubble = dom::create_element_with_class(&self.document, "div", utils::message_class(msg.sender))?;
        bubble.set_attribute("data-id", &msg.id.to_string())?;

        let content = dom::create_element_with_class(&self.document, "div", "message-content")?;
        content.set_inner_html(&markdown::render_message_html(&msg.text));

        bubble.append_child(&content)?;
        row.append_child(&bubble)?;
        Ok(row)
    }

    fn render_status(&self, busy: bool, last_error: Option<&str>) -> Result<(), JsValue> {
        let typing = dom::get_html_element_by_id(&self.document, TYPING_ID)?;
        dom::set_visible(&typing, busy);

        let status = dom::get_element_by_id(&self.document, STATUS_TEXT_ID)?;
        status.set_text_content(Some(if busy { "Thinking..." } else { "Ask me anything" }));

        let banner = dom::get_html_element_by_id(&self.document, ERROR_ID)?;
        match last_error {
            Some(error) => {
                banner.set_inner_html(&format!(
                    "Could not reach the assistant: {}",
                    utils::escape_html(error)
                ));
                dom::set_visible(&banner, true);
            }
            None => {
                banner.set_inner_html("");
                dom::set_visible(&banner, false);
            }
        }

        Ok(())
    }
}

