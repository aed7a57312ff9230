use futures_signals::signal::Mutable;
use once_cell::sync::Lazy;

use shared::types::EditedMessage;

pub static NEW_MESSAGE: Lazy<Mutable<Option<EditedMessage>>> = Lazy::new(|| {
    Mutable::new(None)
});

pub static CREDENTIALS: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("".to_string()));

pub trait Dispatch {
    fn edited_message(&self) -> Option<EditedMessage>;
    fn edit_message(&self, message: Option<EditedMessage>);
}

impl Dispatch for Mutable<Option<EditedMessage>> {
    fn edited_message(&self) -> Option<EditedMessage> {
        self.get_cloned()
    }

    fn edit_message(&self, message: Option<EditedMessage>) {
        self.set(message);
    }
}
