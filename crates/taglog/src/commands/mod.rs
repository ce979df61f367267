//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use taglog_config::{Config, ConfigError, find_and_load_config, load_config};
use tracing::debug;

pub mod generate;
pub mod init;
pub mod parse;

/// Loads the configuration from `path`, or from the nearest `taglog.toml`.
///
/// Falls back to the built-in defaults when no file is found and none was
/// asked for.
fn resolve_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()));
    }

    match find_and_load_config() {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(_)) => {
            debug!("no taglog.toml found, using defaults");
            Ok(Config::default())
        }
        Err(err) => Err(err).context("failed to load taglog.toml"),
    }
}
