use shared::constants::API_SMTP;
use shared::types::EditedMessage;

use crate::connect_fetch::connect_json_send;
use crate::state::Dispatch;

pub fn send_message(credentials: &str, draft: EditedMessage) {
    connect_json_send(API_SMTP, credentials, draft);
}

// fire-and-forget, the composer closes without waiting on the outcome
pub fn send_draft<S, F>(store: &S, credentials: &str, send: F) -> bool
where
    S: Dispatch,
    F: FnOnce(&str, EditedMessage),
{
    let Some(message) = store.edited_message() else {
        return false;
    };
    log::info!("send message to {} recipients", message.recipient_count());
    send(credentials, message);
    store.edit_message(None);
    true
}
