//! Configuration system for tabpane.
//!
//! This crate provides configuration loading, saving, and default values
//! for the split-pane coordinator. It includes:
//!
//! - The tab-level `Config` struct and its per-field defaults
//! - YAML persistence with validation
//! - Shared identifier and log-level types

pub mod config;
pub mod defaults;
pub mod error;
mod types;

pub use config::Config;
pub use error::ConfigError;
pub use types::{LogLevel, ProfileId, TabId};
