//! Display formatting for terminal output
//!
//! Plain-text renderings of records and summaries for the batch CLI.

pub mod records;
pub mod summary;

pub use records::{format_date, format_record_table, format_signed};
pub use summary::format_summary;
