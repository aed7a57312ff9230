use crate::constants::RECIPIENT_SEPARATOR;

/// Separators are never part of an address.
pub fn strip_separators(raw: &str) -> String {
    raw.replace(RECIPIENT_SEPARATOR, "")
}
