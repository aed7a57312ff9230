use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;

use crate::constants::{CLASS_ACTIVE, CLASS_ICON, PROP_TITLE, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::editor::format_state::registry;
use crate::editor::handle::DomEditor;
use crate::editor::state::{FORMAT_STATE, toggle_format};

enum Face {
    Icon(&'static str),
    Label(&'static str),
}

fn face(id: &str) -> (&'static str, Face) {
    match id {
        "bold" => ("bold", Face::Icon("format_bold")),
        "italic" => ("italic", Face::Icon("format_italic")),
        "underline" => ("underline", Face::Icon("format_underline")),
        "unorderedList" => ("bulleted list", Face::Icon("format_list_bulleted")),
        "orderedList" => ("numbered list", Face::Icon("format_list_numbered")),
        "h1" => ("heading 1", Face::Label("H1")),
        "h2" => ("heading 2", Face::Label("H2")),
        "h3" => ("heading 3", Face::Label("H3")),
        "blockquote" => ("quote", Face::Icon("format_quote")),
        "pre" => ("preformatted", Face::Icon("space_bar")),
        "code" => ("code", Face::Icon("code")),
        _ => ("", Face::Label("?"))
    }
}

fn css_class(label: &str) -> String {
    format!("editor-tools__{label}")
}

pub fn editor_tools() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children(registry::<DomEditor>().iter().map(|command| button(command.id)))
    })
}

fn button(id: &'static str) -> Dom {
    let (title, face) = face(id);
    let face = match face {
        Face::Icon(name) => html!(TAG_SPAN, {
            .class(CLASS_ICON)
            .text(name)
        }),
        Face::Label(text) => html!(TAG_SPAN, {
            .class(css_class("label"))
            .text(text)
        }),
    };
    html!(TAG_BUTTON, {
        .class(css_class("button"))
        .class_signal(CLASS_ACTIVE, FORMAT_STATE.signal_ref(move |state| state.is_active(id)).dedupe())
        .attr(PROP_TITLE, title)
        .attr("type", "button")
        .event(move |_: events::Click| toggle_format(id))
        .child(face)
    })
}
