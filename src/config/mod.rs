//! Configuration module for cabinet-stats
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CabinetPaths;
pub use settings::Settings;
