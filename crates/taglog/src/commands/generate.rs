//! Generate command.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use taglog_commit::{CommitType, UnknownCommitType};
use taglog_config::ConfigOverrides;
use taglog_core::{Pipeline, load_commits, load_users};
use taglog_parser::{NoopResolver, UserResolver};
use tracing::info;

/// Arguments for the generate command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Tag of the release being described
    #[arg(short, long, env = "TAGLOG_RELEASE")]
    pub release: String,

    /// JSON file with the commits of the release, oldest first
    #[arg(short, long)]
    pub commits: PathBuf,

    /// Repository URL used to link #N references
    #[arg(long, env = "TAGLOG_BASE_URL")]
    pub base_url: Option<String>,

    /// JSON file mapping pull request numbers to their submitters
    #[arg(short, long)]
    pub users: Option<PathBuf>,

    /// Configuration file (default: nearest taglog.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Comma-separated commit types to leave out, replacing the configured list
    #[arg(long)]
    pub exclude_types: Option<ExcludeTypes>,

    /// Release date for the heading (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Write the changelog to this file instead of stdout
    #[arg(long)]
    pub changelog_out: Option<PathBuf>,

    /// Write the flat change list to this file
    #[arg(long)]
    pub changes_out: Option<PathBuf>,
}

/// The `--exclude-types` list. An empty value leaves the configured list in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeTypes(pub Vec<CommitType>);

impl FromStr for ExcludeTypes {
    type Err = UnknownCommitType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::parse::<CommitType>)
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

/// Runs the generate command.
pub async fn run(args: GenerateArgs) -> Result<()> {
    let config = super::resolve_config(args.config.as_deref())?.with_overrides(ConfigOverrides {
        exclude_types: args
            .exclude_types
            .map(|types| types.0)
            .filter(|types| !types.is_empty()),
        base_url: args.base_url,
    });

    let resolver: Arc<dyn UserResolver> = match &args.users {
        Some(path) => Arc::new(load_users(path)?),
        None => Arc::new(NoopResolver),
    };

    let commits = load_commits(&args.commits)?;
    let pipeline = Pipeline::new(config, resolver)?;
    let changelog = pipeline.run(&args.release, commits, args.date).await?;

    if changelog.is_empty() {
        info!(release = %args.release, "no eligible commits");
    }

    match &args.changelog_out {
        Some(path) => write_output(path, &changelog.changelog)?,
        None => print!("{}", changelog.changelog),
    }

    if let Some(path) = &args.changes_out {
        write_output(path, &changelog.changes)?;
    }

    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote output");
    Ok(())
}
