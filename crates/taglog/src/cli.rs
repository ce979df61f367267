//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Generate release changelogs from conventional commits.
#[derive(Debug, Parser)]
#[command(name = "taglog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the changelog for a release
    Generate(commands::generate::GenerateArgs),

    /// Parse a single commit message and print the result as JSON
    Parse(commands::parse::ParseArgs),

    /// Write a default taglog.toml
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => commands::generate::run(args).await,
            Commands::Parse(args) => commands::parse::run(args).await,
            Commands::Init(args) => commands::init::run(&args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::generate::ExcludeTypes;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_args() {
        let cli = Cli::try_parse_from([
            "taglog",
            "generate",
            "--release",
            "v1.0.0",
            "--commits",
            "commits.json",
            "--exclude-types",
            "chore,ci",
            "--date",
            "2024-01-31",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.release, "v1.0.0");
        assert_eq!(
            args.exclude_types,
            Some(ExcludeTypes(vec![
                taglog_commit::CommitType::Chore,
                taglog_commit::CommitType::Ci
            ]))
        );
        assert_eq!(
            args.date,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 31)
        );
    }

    #[test]
    fn test_rejects_unknown_exclude_type() {
        let result = Cli::try_parse_from([
            "taglog",
            "generate",
            "--release",
            "v1",
            "--commits",
            "c.json",
            "--exclude-types",
            "nope",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_exclude_types_parses_to_empty_list() {
        let cli = Cli::try_parse_from([
            "taglog",
            "generate",
            "--release",
            "v1",
            "--commits",
            "c.json",
            "--exclude-types",
            "",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.exclude_types, Some(ExcludeTypes(Vec::new())));
    }

    #[test]
    fn test_exclude_types_tolerates_spaces() {
        assert_eq!(
            " chore , ci,".parse::<ExcludeTypes>().unwrap(),
            ExcludeTypes(vec![
                taglog_commit::CommitType::Chore,
                taglog_commit::CommitType::Ci
            ])
        );
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["taglog", "parse", "feat: x", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
