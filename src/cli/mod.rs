//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod batch;
pub mod config;

pub use audit::{handle_audit_command, AuditArgs};
pub use batch::{handle_batch_command, BatchArgs};
pub use config::{handle_config_command, ConfigArgs};
