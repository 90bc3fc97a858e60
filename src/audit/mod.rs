//! Audit logging for cabinet-stats
//!
//! Records every create, update and delete of a cabinet record, and every
//! export, in an append-only JSON-lines log.
//!
//! - `AuditEntry`: one log line with timestamp, operation, the record id or
//!   export path, and optional before/after images.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//! - `generate_diff`: field-level summary of an edit.
//!
//! # Example
//!
//! ```rust,ignore
//! use cabinet_stats::audit::{generate_diff, AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(record.id.to_string(), Some(record.to_string()), &record))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
