use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlDocument, HtmlInputElement, Node, Selection, Storage, Window};

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

fn get_html_document() -> Option<HtmlDocument> {
    get_document().and_then(|d|d.dyn_into::<HtmlDocument>().ok())
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

pub fn get_local_storage() -> Option<Storage> {
    get_window().and_then(|w| w.local_storage().ok()).and_then(|s|s)
}

pub fn get_element_from_node(el: Option<Node>) -> Option<Element> {
    el.map(|el| el.dyn_into::<Element>().ok()).and_then(|el| el)
}

pub fn get_input_from_target(target: Option<EventTarget>) -> Option<HtmlInputElement> {
    target
        .map(|target| JsValue::from(target).dyn_ref::<HtmlInputElement>().cloned())
        .and_then(|t| t)
}

pub fn exec_command_full(command_id: &str, show_ui: bool, value: &str) -> bool {
    get_html_document().and_then(|d|d.exec_command_with_show_ui_and_value(command_id, show_ui, value).ok()).unwrap_or_default()
}

pub fn exec_command(command_id: &str) -> bool {
    get_html_document().and_then(|d|d.exec_command(command_id).ok()).unwrap_or_default()
}

pub fn query_command_state(command_id: &str) -> bool {
    get_html_document().and_then(|d|d.query_command_state(command_id).ok()).unwrap_or_default()
}

pub fn query_command_value(command_id: &str) -> String {
    get_html_document().and_then(|d|d.query_command_value(command_id).ok()).unwrap_or_default()
}

pub fn get_selection() -> Option<Selection> {
    get_window().and_then(|w| w.get_selection().ok()).and_then(|s|s)
}

// text nodes resolve to their parent
pub fn selection_element() -> Option<Element> {
    let selection = get_selection()?;
    if selection.range_count() == 0 {
        return None;
    }
    let node = selection.anchor_node()?;
    if node.node_type() == Node::ELEMENT_NODE {
        get_element_from_node(Some(node))
    } else {
        node.parent_element()
    }
}
