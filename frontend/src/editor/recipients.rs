use std::cell::Cell;
use std::rc::Rc;

use web_sys::HtmlInputElement;

use shared::constants::RECIPIENT_SEPARATOR;
use shared::types::RecipientField;
use shared::utils::strip_separators;

use crate::constants::KEY_ENTER;
use crate::state::Dispatch;

pub trait AddressInput {
    fn field(&self) -> RecipientField;
    fn value(&self) -> String;
    fn clear(&self);
    fn is_valid(&self) -> bool;
    fn report_validity(&self);
    fn focus(&self);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Committed,
    Rejected,
    Empty,
}

impl KeyOutcome {
    pub fn prevent_default(&self) -> bool {
        *self != KeyOutcome::Ignored
    }
}

#[derive(Debug)]
pub enum BlurOutcome {
    Ignored,
    Committed,
    Deferred(PendingReport),
}

// keystroke counter of one field, a deferred report is stale once it moves
#[derive(Debug, Clone, Default)]
pub struct ReportGuard(Rc<Cell<u64>>);

impl ReportGuard {
    pub fn touch(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }

    fn pending(&self) -> PendingReport {
        PendingReport {
            guard: self.clone(),
            generation: self.0.get(),
        }
    }
}

#[derive(Debug)]
pub struct PendingReport {
    guard: ReportGuard,
    generation: u64,
}

impl PendingReport {
    pub fn run<I: AddressInput>(self, input: &I) -> bool {
        if self.guard.0.get() != self.generation {
            return false;
        }
        input.report_validity();
        true
    }
}

pub fn commit_address<S: Dispatch, I: AddressInput>(store: &S, input: &I) -> bool {
    let address = strip_separators(&input.value());
    if address.is_empty() {
        return false;
    }
    let Some(message) = store.edited_message() else {
        return false;
    };
    let field = input.field();
    log::info!("add {} recipient", field.id());
    store.edit_message(Some(message.with_address(field, address)));
    input.clear();
    true
}

fn is_commit_key(key: &str) -> bool {
    key == KEY_ENTER || key.chars().eq([RECIPIENT_SEPARATOR])
}

pub fn on_key<S: Dispatch, I: AddressInput>(store: &S, input: &I, guard: &ReportGuard, key: &str) -> KeyOutcome {
    guard.touch();
    if !is_commit_key(key) {
        return KeyOutcome::Ignored;
    }
    if !input.is_valid() {
        input.report_validity();
        return KeyOutcome::Rejected;
    }
    if commit_address(store, input) {
        input.focus();
        KeyOutcome::Committed
    } else {
        KeyOutcome::Empty
    }
}

pub fn on_blur<S: Dispatch, I: AddressInput>(store: &S, input: &I, guard: &ReportGuard) -> BlurOutcome {
    if input.value().is_empty() {
        return BlurOutcome::Ignored;
    }
    if input.is_valid() {
        if commit_address(store, input) {
            BlurOutcome::Committed
        } else {
            BlurOutcome::Ignored
        }
    } else {
        BlurOutcome::Deferred(guard.pending())
    }
}

// panics if `index` is not a position of the rendered list
pub fn remove_address<S: Dispatch>(store: &S, field: RecipientField, index: usize) {
    if let Some(message) = store.edited_message() {
        log::info!("remove {} recipient {index}", field.id());
        store.edit_message(Some(message.without_address(field, index)));
    }
}

pub fn edit_subject<S: Dispatch>(store: &S, subject: String) {
    if let Some(message) = store.edited_message() {
        store.edit_message(Some(message.with_subject(subject)));
    }
}

pub fn edit_content<S: Dispatch>(store: &S, content: String) {
    if let Some(message) = store.edited_message() {
        store.edit_message(Some(message.with_content(content)));
    }
}

// ===

#[derive(Clone)]
pub struct DomAddressInput {
    field: RecipientField,
    element: HtmlInputElement,
}

impl DomAddressInput {
    pub fn new(element: HtmlInputElement) -> Option<Self> {
        RecipientField::from_id(&element.id()).map(|field| Self { field, element })
    }
}

impl AddressInput for DomAddressInput {
    fn field(&self) -> RecipientField {
        self.field
    }

    fn value(&self) -> String {
        self.element.value()
    }

    fn clear(&self) {
        self.element.set_value("");
    }

    fn is_valid(&self) -> bool {
        self.element.validity().valid()
    }

    fn report_validity(&self) {
        self.element.report_validity();
    }

    fn focus(&self) {
        if self.element.focus().is_ok() {}
    }
}
