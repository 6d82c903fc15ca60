//! Configuration model for coverkit.
//!
//! This module defines the Config struct that represents `coverkit.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::TextStyle;

/// Config filename looked up in the base directory.
pub const CONFIG_FILE_NAME: &str = "coverkit.yaml";
