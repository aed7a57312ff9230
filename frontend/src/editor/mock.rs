use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use shared::types::{EditedMessage, RecipientField};

use crate::editor::handle::{EditorHandle, EditorNode};
use crate::editor::recipients::AddressInput;
use crate::state::Dispatch;

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    class: String,
    parent: Option<usize>,
    font_size: Option<String>,
}

type Tree = Rc<RefCell<Vec<NodeData>>>;

#[derive(Clone)]
pub struct MockNode {
    tree: Tree,
    id: usize,
}

impl EditorNode for MockNode {
    fn tag_name(&self) -> String {
        self.tree.borrow()[self.id].tag.clone()
    }

    fn class_name(&self) -> String {
        self.tree.borrow()[self.id].class.clone()
    }

    fn set_class_name(&self, class: &str) {
        self.tree.borrow_mut()[self.id].class = class.to_string();
    }

    fn parent(&self) -> Option<Self> {
        let parent = self.tree.borrow()[self.id].parent;
        parent.map(|id| MockNode { tree: self.tree.clone(), id })
    }

    fn descendants(&self) -> Vec<Self> {
        let len = self.tree.borrow().len();
        (0..len)
            .filter(|id| *id != self.id && is_under(&self.tree.borrow(), *id, self.id))
            .map(|id| MockNode { tree: self.tree.clone(), id })
            .collect()
    }

    fn clear_font_size(&self) {
        self.tree.borrow_mut()[self.id].font_size = None;
    }
}

fn render(nodes: &[NodeData], id: usize) -> String {
    let node = &nodes[id];
    let inner = render_children(nodes, id);
    match node.class.is_empty() {
        true => format!("<{}>{inner}</{}>", node.tag, node.tag),
        false => format!("<{} class=\"{}\">{inner}</{}>", node.tag, node.class, node.tag)
    }
}

fn render_children(nodes: &[NodeData], id: usize) -> String {
    (0..nodes.len())
        .filter(|child| nodes[*child].parent == Some(id))
        .map(|child| render(nodes, child))
        .collect()
}

fn is_under(nodes: &[NodeData], id: usize, ancestor: usize) -> bool {
    let mut current = nodes[id].parent;
    while let Some(parent) = current {
        if parent == ancestor {
            return true;
        }
        current = nodes[parent].parent;
    }
    false
}

#[derive(Debug, Clone)]
pub struct Executed {
    pub command: String,
    pub value: Option<String>,
    // descendants of the selection still sized when the command ran
    pub font_sizes_left: usize,
}

// node 0 is the editable root
pub struct MockEditor {
    tree: Tree,
    content: String,
    active: RefCell<HashSet<String>>,
    format_block: RefCell<String>,
    selection: Cell<Option<usize>>,
    executed: RefCell<Vec<Executed>>,
}

impl MockEditor {
    pub fn new(content: &str) -> Self {
        Self {
            tree: Rc::new(RefCell::new(vec![NodeData {
                tag: "div".to_string(),
                class: "".to_string(),
                parent: None,
                font_size: None,
            }])),
            content: content.to_string(),
            active: RefCell::new(HashSet::new()),
            format_block: RefCell::new("p".to_string()),
            selection: Cell::new(None),
            executed: RefCell::new(vec![]),
        }
    }

    pub fn add_node(&self, parent: Option<usize>, tag: &str, class: &str) -> usize {
        let mut nodes = self.tree.borrow_mut();
        nodes.push(NodeData {
            tag: tag.to_string(),
            class: class.to_string(),
            parent,
            font_size: None,
        });
        nodes.len() - 1
    }

    pub fn set_font_size(&self, id: usize, size: &str) {
        self.tree.borrow_mut()[id].font_size = Some(size.to_string());
    }

    pub fn font_size(&self, id: usize) -> Option<String> {
        self.tree.borrow()[id].font_size.clone()
    }

    pub fn select(&self, id: usize) {
        self.selection.set(Some(id));
    }

    pub fn set_active(&self, command: &str) {
        self.active.borrow_mut().insert(command.to_string());
    }

    pub fn set_format_block(&self, tag: &str) {
        *self.format_block.borrow_mut() = tag.to_string();
    }

    pub fn executed(&self) -> Vec<Executed> {
        self.executed.borrow().clone()
    }

    pub fn tag(&self, id: usize) -> String {
        self.tree.borrow()[id].tag.clone()
    }

    pub fn class(&self, id: usize) -> String {
        self.tree.borrow()[id].class.clone()
    }

    fn font_sizes_under(&self, id: usize) -> usize {
        let nodes = self.tree.borrow();
        (0..nodes.len())
            .filter(|child| is_under(&nodes, *child, id) && nodes[*child].font_size.is_some())
            .count()
    }
}

impl EditorHandle for MockEditor {
    type Node = MockNode;

    fn content(&self) -> String {
        self.content.clone()
    }

    fn html(&self) -> String {
        let nodes = self.tree.borrow();
        match nodes.len() {
            1 => self.content.clone(),
            _ => render_children(&nodes, 0)
        }
    }

    fn query_command_state(&self, command: &str) -> bool {
        self.active.borrow().contains(command)
    }

    fn query_format_block(&self) -> String {
        self.format_block.borrow().to_lowercase()
    }

    fn exec_command(&self, command: &str, value: Option<&str>) -> bool {
        let font_sizes_left = self.selection.get().map(|id| self.font_sizes_under(id)).unwrap_or_default();
        self.executed.borrow_mut().push(Executed {
            command: command.to_string(),
            value: value.map(|v| v.to_string()),
            font_sizes_left,
        });
        match (command, value) {
            ("formatBlock", Some(tag)) => {
                if let Some(id) = self.selection.get() {
                    self.tree.borrow_mut()[id].tag = tag.to_string();
                }
                self.set_format_block(tag);
            }
            _ => {
                let mut active = self.active.borrow_mut();
                if !active.remove(command) {
                    active.insert(command.to_string());
                }
            }
        }
        true
    }

    fn selection_node(&self) -> Option<MockNode> {
        self.selection.get().map(|id| MockNode { tree: self.tree.clone(), id })
    }

    fn focus(&self) {}
}

// ===

pub struct MockInput {
    pub field: RecipientField,
    pub value: RefCell<String>,
    pub valid: Cell<bool>,
    pub reports: Cell<usize>,
    pub focused: Cell<bool>,
}

impl MockInput {
    pub fn new(field: RecipientField, value: &str, valid: bool) -> Self {
        Self {
            field,
            value: RefCell::new(value.to_string()),
            valid: Cell::new(valid),
            reports: Cell::new(0),
            focused: Cell::new(false),
        }
    }
}

impl AddressInput for MockInput {
    fn field(&self) -> RecipientField {
        self.field
    }

    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn clear(&self) {
        self.value.borrow_mut().clear();
    }

    fn is_valid(&self) -> bool {
        self.valid.get()
    }

    fn report_validity(&self) {
        self.reports.set(self.reports.get() + 1);
    }

    fn focus(&self) {
        self.focused.set(true);
    }
}

// ===

#[derive(Default)]
pub struct Recorder {
    current: RefCell<Option<EditedMessage>>,
    dispatched: RefCell<Vec<Option<EditedMessage>>>,
}

impl Recorder {
    pub fn open(message: EditedMessage) -> Self {
        Self {
            current: RefCell::new(Some(message)),
            ..Recorder::default()
        }
    }

    pub fn count(&self) -> usize {
        self.dispatched.borrow().len()
    }

    pub fn message(&self) -> EditedMessage {
        self.current.borrow().clone().unwrap_or_default()
    }

    pub fn is_open(&self) -> bool {
        self.current.borrow().is_some()
    }
}

impl Dispatch for Recorder {
    fn edited_message(&self) -> Option<EditedMessage> {
        self.current.borrow().clone()
    }

    fn edit_message(&self, message: Option<EditedMessage>) {
        self.dispatched.borrow_mut().push(message.clone());
        *self.current.borrow_mut() = message;
    }
}
