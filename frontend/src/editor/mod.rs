pub mod app_editor;
pub mod editor_tools;
pub mod format_state;
pub mod handle;
pub mod header_address;
pub mod recipients;
pub mod state;

#[cfg(test)]
pub(crate) mod mock;
