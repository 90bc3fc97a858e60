//! Cabinet Stats - terminal dashboard for per-cabinet revenue statistics
//!
//! Operators report a cumulative revenue figure, a balance and a deal split
//! around a midnight cutoff for their "cabinet". Each new report is
//! reconciled against the previous snapshot of the same cabinet to derive the
//! revenue earned since then. The list is summarized into dashboard cards and
//! charts and can be exported to a spreadsheet.
//!
//! # Architecture
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: Records, drafts, money and identifiers
//! - `storage`: In-memory record store and demo seed
//! - `services`: Reconciliation, aggregation, batch intake, audited operations
//! - `audit`: JSON-lines audit log
//! - `reports`: Chart series and summary cards
//! - `export`: XLSX, CSV, JSON and YAML writers
//! - `display`: Plain-text tables for the CLI
//! - `cli`: Subcommand handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use cabinet_stats::services::compute_daily_revenue;
//!
//! let daily = compute_daily_revenue("Cabinet A", Money::from_major(150), store.list());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{CabinetError, CabinetResult};
