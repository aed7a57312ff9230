use std::collections::BTreeMap;

use crate::editor::handle::{EditorHandle, EditorNode};

const FORMAT_BLOCK: &str = "formatBlock";
const CLASS_CODE: &str = "code";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Inline { command: &'static str },
    Block { tag: &'static str, class: Option<&'static str> },
}

pub type Probe<E> = fn(&E, &CommandKind) -> bool;
pub type Apply<E> = fn(&E, &CommandKind);

pub struct FormatCommand<E: EditorHandle> {
    pub id: &'static str,
    pub kind: CommandKind,
    probe: Probe<E>,
    apply: Apply<E>,
}

impl<E: EditorHandle> FormatCommand<E> {
    fn inline(id: &'static str, command: &'static str) -> Self {
        Self {
            id,
            kind: CommandKind::Inline { command },
            probe: is_styled,
            apply: toggle_style,
        }
    }

    fn block(id: &'static str, tag: &'static str, class: Option<&'static str>, probe: Probe<E>) -> Self {
        Self {
            id,
            kind: CommandKind::Block { tag, class },
            probe,
            apply: toggle_block_style,
        }
    }

    pub fn is_active(&self, editor: &E) -> bool {
        (self.probe)(editor, &self.kind)
    }

    pub fn apply(&self, editor: &E) {
        (self.apply)(editor, &self.kind)
    }
}

pub fn registry<E: EditorHandle>() -> Vec<FormatCommand<E>> {
    vec![
        FormatCommand::inline("bold", "bold"),
        FormatCommand::inline("italic", "italic"),
        FormatCommand::inline("underline", "underline"),
        FormatCommand::inline("unorderedList", "insertUnorderedList"),
        FormatCommand::inline("orderedList", "insertOrderedList"),
        FormatCommand::block("h1", "h1", None, is_block_styled),
        FormatCommand::block("h2", "h2", None, is_block_styled),
        FormatCommand::block("h3", "h3", None, is_block_styled),
        FormatCommand::block("blockquote", "blockquote", None, is_within_block),
        FormatCommand::block("pre", "pre", None, is_block_styled),
        FormatCommand::block("code", "pre", Some(CLASS_CODE), is_classed_block),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatState(BTreeMap<&'static str, bool>);

impl FormatState {
    pub fn is_active(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or_default()
    }

    pub fn active(&self) -> Vec<&'static str> {
        self.0.iter().filter(|(_, active)| **active).map(|(id, _)| *id).collect()
    }
}

pub fn compute_state<E: EditorHandle>(editor: Option<&E>) -> FormatState {
    let commands = registry::<E>();
    FormatState(commands.iter()
        .map(|command| (command.id, editor.map(|editor| command.is_active(editor)).unwrap_or_default()))
        .collect())
}

// the caller refreshes the state
pub fn toggle<E: EditorHandle>(editor: Option<&E>, id: &str) -> bool {
    let Some(editor) = editor else {
        return false;
    };
    match registry::<E>().into_iter().find(|command| command.id == id) {
        Some(command) => {
            log::debug!("toggle {id}");
            command.apply(editor);
            true
        }
        None => {
            log::error!("unknown format command: {id}");
            false
        }
    }
}

// ===

fn is_styled<E: EditorHandle>(editor: &E, kind: &CommandKind) -> bool {
    match kind {
        CommandKind::Inline { command } => !editor.content().is_empty() && editor.query_command_state(command),
        CommandKind::Block { .. } => false
    }
}

fn is_block_styled<E: EditorHandle>(editor: &E, kind: &CommandKind) -> bool {
    match kind {
        CommandKind::Block { tag, .. } => !editor.content().is_empty() && editor.query_format_block().eq_ignore_ascii_case(tag),
        CommandKind::Inline { .. } => false
    }
}

fn is_within_block<E: EditorHandle>(editor: &E, kind: &CommandKind) -> bool {
    match kind {
        CommandKind::Block { tag, .. } => editor.selection_node().and_then(|node| node.closest(tag)).is_some(),
        CommandKind::Inline { .. } => false
    }
}

fn is_classed_block<E: EditorHandle>(editor: &E, kind: &CommandKind) -> bool {
    match kind {
        CommandKind::Block { tag, class: Some(class) } => editor.selection_node()
            .and_then(|node| node.closest(tag))
            .map(|block| block.class_name() == *class)
            .unwrap_or_default(),
        _ => false
    }
}

fn toggle_style<E: EditorHandle>(editor: &E, kind: &CommandKind) {
    if let CommandKind::Inline { command } = kind {
        editor.exec_command(command, None);
    }
}

fn toggle_block_style<E: EditorHandle>(editor: &E, kind: &CommandKind) {
    let CommandKind::Block { tag, class } = kind else {
        return;
    };
    // inline sizing must not survive a block change
    if let Some(node) = editor.selection_node() {
        for child in node.descendants() {
            child.clear_font_size();
        }
    }
    editor.exec_command(FORMAT_BLOCK, Some(*tag));
    if let Some(block) = editor.selection_node().and_then(|node| node.closest(tag)) {
        block.set_class_name(class.unwrap_or_default());
    }
}
