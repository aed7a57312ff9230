use dominator::{Dom, EventOptions, events, html};
use futures_signals::signal::{Signal, SignalExt};
use gloo_timers::callback::Timeout;

use shared::types::RecipientField;

use crate::constants::{CLASS_ICON, PROP_ID, PROP_PLACEHOLDER, PROP_ROLE, PROP_ROLE_BUTTON, PROP_TITLE, PROP_TYPE, TAG_DIV, TAG_INPUT, TAG_LABEL, TAG_SPAN};
use crate::editor::recipients::{BlurOutcome, DomAddressInput, ReportGuard, on_blur, on_key, remove_address};
use crate::state::NEW_MESSAGE;
use crate::utils::get_input_from_target;

fn css_class(label: &str) -> String {
    format!("header-address__{label}")
}

fn recipients_signal(field: RecipientField) -> impl Signal<Item=Vec<String>> {
    NEW_MESSAGE.signal_ref(move |message| message.as_ref()
        .map(|message| message.recipients(field).to_vec())
        .unwrap_or_default())
        .dedupe_cloned()
}

pub fn header_address(field: RecipientField, label: &str) -> Dom {
    let guard = ReportGuard::default();
    let guard_key = guard.clone();
    let guard_blur = guard.clone();

    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_LABEL, {
                .class(css_class("label"))
                .attr("for", field.id())
                .text(label)
            }),
            html!(TAG_DIV, {
                .class(css_class("chips"))
                .child_signal(recipients_signal(field).map(move |list| Some(chips(field, list))))
            }),
            html!(TAG_INPUT, {
                .class(css_class("input"))
                .attr(PROP_ID, field.id())
                .attr(PROP_TYPE, "email")
                .attr(PROP_TITLE, label)
                .attr(PROP_PLACEHOLDER, label)
                .event_with_options(&EventOptions::preventable(), move |e: events::KeyDown| handle_key(&e, &guard_key))
                .event(move |e: events::Blur| handle_blur(&e, &guard_blur))
                .event(move |_: events::Input| guard.touch())
            }),
        ])
    })
}

fn chips(field: RecipientField, list: Vec<String>) -> Dom {
    html!(TAG_SPAN, {
        .children(list.iter().enumerate().map(|(index, address)| chip(field, index, address)))
    })
}

fn chip(field: RecipientField, index: usize, address: &str) -> Dom {
    html!(TAG_SPAN, {
        .class(css_class("chip"))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("chip-text"))
                .text(address)
            }),
            html!(TAG_SPAN, {
                .class(CLASS_ICON)
                .class(css_class("chip-remove"))
                .attr(PROP_ROLE, PROP_ROLE_BUTTON)
                .attr(PROP_TITLE, "remove")
                .text("cancel")
                .event(move |_: events::Click| remove_address(&*NEW_MESSAGE, field, index))
            }),
        ])
    })
}

fn handle_key(e: &events::KeyDown, guard: &ReportGuard) {
    if let Some(input) = get_input_from_target(e.target()).and_then(DomAddressInput::new) {
        if on_key(&*NEW_MESSAGE, &input, guard, &e.key()).prevent_default() {
            e.prevent_default();
        }
    }
}

fn handle_blur(e: &events::Blur, guard: &ReportGuard) {
    if let Some(input) = get_input_from_target(e.target()).and_then(DomAddressInput::new) {
        if let BlurOutcome::Deferred(pending) = on_blur(&*NEW_MESSAGE, &input, guard) {
            Timeout::new(0, move || {
                pending.run(&input);
            }).forget();
        }
    }
}
