use futures_signals::signal::Mutable;
use once_cell::sync::Lazy;

use crate::editor::format_state::{compute_state, toggle, FormatState};
use crate::editor::handle::{DomEditor, EditorHandle};
use crate::editor::recipients::edit_content;
use crate::state::{Dispatch, NEW_MESSAGE};

pub static FORMAT_STATE: Lazy<Mutable<FormatState>> = Lazy::new(|| {
    Mutable::new(FormatState::default())
});

thread_local! {
    static SURFACE: Mutable<Option<DomEditor>> = Mutable::new(None);
}

pub fn set_surface(editor: Option<DomEditor>) {
    if editor.is_none() {
        FORMAT_STATE.set(FormatState::default());
    }
    SURFACE.with(|surface| surface.set(editor));
}

// cloned out so DOM events fired by a command never re-enter the lock
fn get_surface() -> Option<DomEditor> {
    SURFACE.with(|surface| surface.get_cloned())
}

pub fn refresh_format_state() {
    let editor = get_surface();
    let state = compute_state(editor.as_ref());
    log::debug!("active formats: {:?}", state.active());
    FORMAT_STATE.set_neq(state);
}

pub fn toggle_format(id: &str) {
    let editor = get_surface();
    if let Some(editor) = &editor {
        editor.focus();
    }
    if apply_format(&*NEW_MESSAGE, editor.as_ref(), id) {
        refresh_format_state();
    }
}

// class markers land after the native input event, so the body is read again
fn apply_format<S: Dispatch, E: EditorHandle>(store: &S, editor: Option<&E>, id: &str) -> bool {
    if !toggle(editor, id) {
        return false;
    }
    if let Some(editor) = editor {
        edit_content(store, editor.html());
    }
    true
}

pub fn focus_surface() {
    if let Some(editor) = get_surface() {
        editor.focus();
    }
}
