//! Configuration management for taglog.
//!
//! This crate handles loading and validating the `taglog.toml` configuration
//! file. Every key has a compiled-in default; a key present in the file
//! replaces the default of the same name as a whole.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config, find_and_load_config_from, load_config};
pub use schema::{ChangelogConfig, Config, ConfigOverrides, ParserConfig};
