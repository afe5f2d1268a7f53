#![allow(dead_code)]

pub mod listing_source_mock;

use wasm_bindgen::JsCast;
use web_sys::{Event, EventInit, EventTarget, HtmlElement, HtmlInputElement, MouseEvent, MouseEventInit};

/// Fresh container appended to the test page's body.
pub fn test_container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(&format!("test-{}", uuid::Uuid::new_v4()));
    document.body().unwrap().append_child(&container).unwrap();
    container.dyn_into::<HtmlElement>().unwrap()
}

pub fn remove_container(container: &HtmlElement) {
    container.remove();
}

/// Points the browser at `path` before a router is mounted.
pub fn set_path(path: &str) {
    web_sys::window()
        .unwrap()
        .history()
        .unwrap()
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
        .unwrap();
}

pub fn count(container: &HtmlElement, selector: &str) -> u32 {
    container.query_selector_all(selector).unwrap().length()
}

pub fn element(container: &HtmlElement, selector: &str) -> HtmlElement {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
}

pub fn click(container: &HtmlElement, selector: &str) {
    element(container, selector).click();
}

fn dispatch(target: &EventTarget, name: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(name, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Sets the input's value and fires `input` the way typing would.
pub fn type_into(container: &HtmlElement, selector: &str, text: &str) {
    let input = input_element(container, selector);
    input.set_value(text);
    dispatch(&input, "input");
}

pub fn input_element(container: &HtmlElement, selector: &str) -> HtmlInputElement {
    element(container, selector).dyn_into::<HtmlInputElement>().unwrap()
}

pub fn submit(container: &HtmlElement, selector: &str) {
    dispatch(&element(container, selector), "submit");
}

/// A bubbling `mousedown`, as fired when the user presses on `target`.
pub fn mouse_down(target: &EventTarget) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

pub fn body() -> HtmlElement {
    web_sys::window().unwrap().document().unwrap().body().unwrap()
}

/// Path and query string the browser is currently showing.
pub fn current_url() -> String {
    let location = web_sys::window().unwrap().location();
    format!("{}{}", location.pathname().unwrap(), location.search().unwrap())
}
