//! Storage layer for cabinet-stats
//!
//! The record store is purely in-memory and lives for one session. The only
//! files this layer touches are JSON documents such as the settings file,
//! replaced in one step.

pub mod document;
pub mod records;
pub mod seed;

pub use document::{load_document, save_document};
pub use records::RecordStore;
pub use seed::demo_store;
