use dominator::{Dom, events, html};

use crate::constants::{CLASS_ICON, PROP_DISABLED, PROP_TITLE, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::editor::app_editor::open_composer;
use crate::state::NEW_MESSAGE;

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header(title: &str) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("title"))
                .text(title)
            }),
            html!(TAG_BUTTON, {
                .class(css_class("button"))
                .attr(PROP_TITLE, "new message")
                .prop_signal(PROP_DISABLED, NEW_MESSAGE.signal_ref(|message| message.is_some()))
                .event(|_: events::Click| open_composer())
                .child(html!(TAG_SPAN, {
                    .class(CLASS_ICON)
                    .text("edit")
                }))
            }),
        ])
    })
}
