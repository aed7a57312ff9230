use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::utils::{exec_command, exec_command_full, query_command_state, query_command_value, selection_element};

pub trait EditorHandle {
    type Node: EditorNode;

    fn content(&self) -> String;
    fn html(&self) -> String;
    fn query_command_state(&self, command: &str) -> bool;
    // lowercase tag of the block holding the caret
    fn query_format_block(&self) -> String;
    fn exec_command(&self, command: &str, value: Option<&str>) -> bool;
    fn selection_node(&self) -> Option<Self::Node>;
    fn focus(&self);
}

pub trait EditorNode: Sized {
    fn tag_name(&self) -> String;
    fn class_name(&self) -> String;
    fn set_class_name(&self, class: &str);
    fn parent(&self) -> Option<Self>;
    fn descendants(&self) -> Vec<Self>;
    fn clear_font_size(&self);

    fn closest(self, tag: &str) -> Option<Self> {
        let mut node = Some(self);
        while let Some(current) = node {
            if current.tag_name().eq_ignore_ascii_case(tag) {
                return Some(current);
            }
            node = current.parent();
        }
        None
    }
}

// ===

#[derive(Clone)]
pub struct DomEditor {
    root: HtmlElement,
}

impl DomEditor {
    pub fn new(root: HtmlElement) -> Self {
        Self { root }
    }
}

impl EditorHandle for DomEditor {
    type Node = DomNode;

    fn content(&self) -> String {
        let text = self.root.text_content().unwrap_or_default();
        if text.trim().is_empty() {
            "".to_string()
        } else {
            self.html()
        }
    }

    fn html(&self) -> String {
        self.root.inner_html()
    }

    fn query_command_state(&self, command: &str) -> bool {
        query_command_state(command)
    }

    fn query_format_block(&self) -> String {
        query_command_value("formatBlock").to_lowercase()
    }

    fn exec_command(&self, command: &str, value: Option<&str>) -> bool {
        match value {
            Some(value) => exec_command_full(command, false, value),
            None => exec_command(command)
        }
    }

    fn selection_node(&self) -> Option<DomNode> {
        selection_element()
            .filter(|element| self.root.contains(Some(element.as_ref())))
            .map(|element| DomNode { element, root: self.root.clone().into() })
    }

    fn focus(&self) {
        if self.root.focus().is_ok() {}
    }
}

#[derive(Clone)]
pub struct DomNode {
    element: Element,
    root: Element,
}

impl EditorNode for DomNode {
    fn tag_name(&self) -> String {
        self.element.tag_name().to_lowercase()
    }

    fn class_name(&self) -> String {
        self.element.class_name()
    }

    fn set_class_name(&self, class: &str) {
        if class.is_empty() {
            if self.element.remove_attribute("class").is_ok() {}
        } else {
            self.element.set_class_name(class);
        }
    }

    fn parent(&self) -> Option<Self> {
        if self.element == self.root {
            return None;
        }
        self.element.parent_element().map(|element| DomNode { element, root: self.root.clone() })
    }

    fn descendants(&self) -> Vec<Self> {
        let list = self.element.get_elements_by_tag_name("*");
        (0..list.length())
            .filter_map(|ind| list.item(ind))
            .map(|element| DomNode { element, root: self.root.clone() })
            .collect()
    }

    fn clear_font_size(&self) {
        if let Some(element) = self.element.dyn_ref::<HtmlElement>() {
            if element.style().remove_property("font-size").is_ok() {}
        }
    }
}
