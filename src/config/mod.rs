//! Configuration model for libchange.
//!
//! This module defines the Config struct that represents `libchange.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use operations::CONFIG_FILE_NAME;
pub use types::OutputFormat;
