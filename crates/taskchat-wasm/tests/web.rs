//! Browser tests, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlButtonElement, HtmlInputElement};

use taskchat_core::InputProps;
use taskchat_wasm::InputControl;

wasm_bindgen_test_configure!(run_in_browser);

fn mount() -> (web_sys::Document, InputControl) {
    let document = web_sys::window().unwrap().document().unwrap();
    document
        .body()
        .unwrap()
        .set_inner_html(r#"<input id="field" type="text"><button id="go"></button>"#);
    let control = InputControl::bind(&document, "field", "go").unwrap();
    (document, control)
}

fn button(document: &web_sys::Document) -> HtmlButtonElement {
    document.get_element_by_id("go").unwrap().dyn_into().unwrap()
}

fn field(document: &web_sys::Document) -> HtmlInputElement {
    document.get_element_by_id("field").unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn blank_value_disables_button() {
    let (document, control) = mount();
    control.sync(&InputProps::new("   "));
    assert!(button(&document).disabled());
    assert!(!field(&document).disabled());
}

#[wasm_bindgen_test]
fn busy_disables_field_and_button() {
    let (document, control) = mount();
    control.sync(&InputProps::new("hello").disabled(true));
    assert!(button(&document).disabled());
    assert!(field(&document).disabled());
    assert_eq!(field(&document).value(), "hello");
}

#[wasm_bindgen_test]
fn text_enables_button() {
    let (document, control) = mount();
    control.sync(&InputProps::new("hello"));
    assert!(!button(&document).disabled());
    assert_eq!(field(&document).placeholder(), "Type something...");
}
