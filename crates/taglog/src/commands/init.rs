//! Initialize command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use taglog_config::{CONFIG_FILE_NAME, Config};
use tracing::info;

const HEADER: &str = "# taglog configuration.\n\
                      # Any key left out falls back to its built-in default.\n\n";

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Runs the init command.
pub fn run(args: &InitArgs) -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() && !args.force {
        bail!("{CONFIG_FILE_NAME} already exists (use --force to overwrite)");
    }

    let content = Config::default().to_toml()?;
    fs::write(path, format!("{HEADER}{content}"))
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;

    info!(path = %path.display(), "wrote default configuration");
    println!("Created {CONFIG_FILE_NAME}");
    Ok(())
}
