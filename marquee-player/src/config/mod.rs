//! Configuration loading
//!
//! The show is described by a small TOML document; every section and key
//! is optional and falls back to the built-in defaults.

pub mod toml;

pub use self::toml::{parse_config, ConfigError};
