//! Core data models for cabinet-stats
//!
//! This module contains the data structures of the statistics domain: cabinet
//! records, their identifiers, and the money type used for every amount.

pub mod cabinet;
pub mod ids;
pub mod money;

pub use cabinet::{CabinetDraft, CabinetEntry, CabinetRecord};
pub use ids::RecordId;
pub use money::{Money, MoneyParseError, MAX_AMOUNT};
