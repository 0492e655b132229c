use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlButtonElement, HtmlInputElement, KeyboardEvent};

use taskchat_core::InputProps;

use crate::dom;

/// DOM side of the input control: a text field and its submit button.
///
/// Holds no chat state. The owner feeds `InputProps` in through `sync`
/// and gets user actions back through the registered callbacks.
#[derive(Clone)]
pub struct InputControl {
    input: HtmlInputElement,
    button: HtmlButtonElement,
}

impl InputControl {
    pub fn bind(document: &Document, input_id: &str, button_id: &str) -> Result<Self, JsValue> {
        Ok(Self {
            input: dom::get_input_by_id(document, input_id)?,
            button: dom::get_button_by_id(document, button_id)?,
        })
    }

    /// Called with the field's new value on every edit
    pub fn on_change<F>(&self, mut callback: F) -> Result<(), JsValue>
    where
        F: FnMut(String) + 'static,
    {
        let input = self.input.clone();
        dom::add_listener(&self.input, "input", move |_event: web_sys::Event| {
            callback(input.value())
        })
    }

    /// Called when the button is clicked
    pub fn on_submit<F>(&self, mut callback: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        dom::add_listener(&self.button, "click", move |_event: web_sys::Event| callback())
    }

    /// Optional key handler; the control itself does nothing on Enter
    pub fn on_key_press<F>(&self, callback: F) -> Result<(), JsValue>
    where
        F: FnMut(KeyboardEvent) + 'static,
    {
        dom::add_listener(&self.input, "keydown", callback)
    }

    /// Push props into the DOM
    pub fn sync(&self, props: &InputProps) {
        if self.input.value() != props.value {
            self.input.set_value(&props.value);
        }
        self.input.set_placeholder(&props.placeholder);
        self.input.set_disabled(props.disabled);
        self.button.set_disabled(!props.submit_enabled());
    }

    pub fn focus(&self) {
        let _ = self.input.focus();
    }
}
