use dominator::{Dom, html};

use shared::constants::STORAGE_CREDENTIALS;

use crate::constants::TAG_DIV;
use crate::editor::app_editor::app_editor;
use crate::elements::app_header::app_header;
use crate::state::CREDENTIALS;
use crate::utils::{get_local_storage, set_title};

const APP_TITLE: &str = "Mail";

fn init_storage() {
    match get_local_storage().and_then(|storage| storage.get_item(STORAGE_CREDENTIALS).ok()).and_then(|value| value) {
        Some(credentials) => CREDENTIALS.set_neq(credentials),
        None => log::info!("no stored credentials")
    }
}

pub fn app_root() -> Dom {
    init_storage();
    set_title(APP_TITLE);
    html!(TAG_DIV, {
        .class("app-root")
        .child(app_header(APP_TITLE))
        .child_signal(app_editor())
    })
}
