use dominator::{Dom, events, html, with_node};
use futures_signals::signal::{Signal, SignalExt};

use shared::types::{EditedMessage, RecipientField};

use crate::constants::{CLASS_ICON, EMPTY_CONTENT, PROP_DISABLED, PROP_EDITABLE, PROP_HTML, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_INPUT};
use crate::editor::editor_tools::editor_tools;
use crate::editor::handle::DomEditor;
use crate::editor::header_address::header_address;
use crate::editor::recipients::{edit_content, edit_subject};
use crate::editor::state::{focus_surface, refresh_format_state, set_surface};
use crate::loader::{send_draft, send_message};
use crate::state::{CREDENTIALS, Dispatch, NEW_MESSAGE};
use crate::utils::get_input_from_target;

fn css_class(label: &str) -> String {
    format!("app-editor__{label}")
}

pub fn open_composer() {
    if NEW_MESSAGE.get_cloned().is_none() {
        NEW_MESSAGE.edit_message(Some(EditedMessage {
            content: EMPTY_CONTENT.to_string(),
            ..EditedMessage::default()
        }));
    }
}

pub fn close_composer() {
    NEW_MESSAGE.edit_message(None);
}

pub fn app_editor() -> impl Signal<Item=Option<Dom>> {
    NEW_MESSAGE.signal_ref(|message| message.is_some())
        .dedupe()
        .map(|open| match open {
            true => NEW_MESSAGE.get_cloned().map(editor),
            false => None
        })
}

fn editor(message: EditedMessage) -> Dom {
    let content = if message.content.trim().is_empty() {
        EMPTY_CONTENT.to_string()
    } else {
        message.content
    };

    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("header"))
                .children([
                    header_address(RecipientField::To, "To"),
                    header_address(RecipientField::Cc, "Cc"),
                    header_address(RecipientField::Bcc, "Bcc"),
                    html!(TAG_DIV, {
                        .class(css_class("subject"))
                        .child(html!(TAG_INPUT, {
                            .attr(PROP_TYPE, "text")
                            .attr(PROP_PLACEHOLDER, "Subject")
                            .prop(PROP_VALUE, &message.subject)
                            .event(handle_subject)
                        }))
                    }),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("wrapper"))
                .event(|_: events::Click| focus_surface())
                .children([
                    html!(TAG_DIV, {
                        .class(css_class("content"))
                        .attr(PROP_EDITABLE, "true")
                        .prop(PROP_HTML, &content)
                        .after_inserted(|element| set_surface(Some(DomEditor::new(element))))
                        .after_removed(|_| set_surface(None))
                        .with_node!(element => {
                            .event(move |_: events::Input| {
                                edit_content(&*NEW_MESSAGE, element.inner_html());
                                refresh_format_state();
                            })
                        })
                        .event(|_: events::KeyUp| refresh_format_state())
                        .event(|_: events::MouseUp| refresh_format_state())
                        .event(|_: events::Focus| refresh_format_state())
                    }),
                    editor_tools(),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("actions"))
                .children([
                    html!(TAG_BUTTON, {
                        .class(css_class("send"))
                        .attr(PROP_TYPE, "button")
                        .prop_signal(PROP_DISABLED, NEW_MESSAGE.signal_ref(|message| message.as_ref()
                            .map(|message| message.recipient_count() == 0)
                            .unwrap_or(true)))
                        .text("Send")
                        .event(handle_send)
                    }),
                    html!(TAG_BUTTON, {
                        .class(CLASS_ICON)
                        .class(css_class("cancel"))
                        .attr(PROP_TYPE, "button")
                        .attr(PROP_TITLE, "discard")
                        .text("delete")
                        .event(|_: events::Click| close_composer())
                    }),
                ])
            }),
        ])
    })
}

fn handle_subject(e: events::Input) {
    if let Some(input) = get_input_from_target(e.target()) {
        edit_subject(&*NEW_MESSAGE, input.value());
    }
}

fn handle_send(_: events::Click) {
    send_draft(&*NEW_MESSAGE, &CREDENTIALS.get_cloned(), send_message);
}
