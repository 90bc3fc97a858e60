//! Terminal User Interface module
//!
//! Interactive dashboard built on ratatui: summary cards and charts, the
//! cabinet table and per-cabinet statistics, with dialogs for data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
