//! Parse command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use taglog_config::ConfigOverrides;
use taglog_core::load_users;
use taglog_parser::{ConventionalParser, NoopResolver, UserResolver};

/// Arguments for the parse command.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// The commit message to parse
    pub message: String,

    /// Repository URL used to link #N references
    #[arg(long, env = "TAGLOG_BASE_URL")]
    pub base_url: Option<String>,

    /// JSON file mapping pull request numbers to their submitters
    #[arg(short, long)]
    pub users: Option<PathBuf>,

    /// Configuration file (default: nearest taglog.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Runs the parse command.
pub async fn run(args: ParseArgs) -> Result<()> {
    let config = super::resolve_config(args.config.as_deref())?.with_overrides(ConfigOverrides {
        base_url: args.base_url,
        ..ConfigOverrides::default()
    });

    let parser = ConventionalParser::from_config(&config.parser)?;
    let resolver: Box<dyn UserResolver> = match &args.users {
        Some(path) => Box::new(load_users(path)?),
        None => Box::new(NoopResolver),
    };
    let base_url = config.parser.base_url.as_deref().unwrap_or_default();

    let outcome = parser
        .parse(&args.message, base_url, resolver.as_ref())
        .await;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
