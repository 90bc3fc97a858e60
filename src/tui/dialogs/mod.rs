//! Dialog modules for the TUI
//!
//! Contains modal dialogs for adding, editing and deleting cabinets

pub mod confirm;
pub mod help;
pub mod record_form;
