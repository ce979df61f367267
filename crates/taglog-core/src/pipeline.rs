//! Parse-then-generate pipeline.

use std::sync::Arc;

use chrono::NaiveDate;
use taglog_changelog::{Changelog, ChangelogGenerator};
use taglog_commit::{ParseOutcome, ParsedCommit, RawCommit};
use taglog_config::{ChangelogConfig, Config};
use taglog_parser::{ConventionalParser, UserResolver};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::CoreResult;

/// Turns a commit range into a changelog.
///
/// Every commit is parsed on its own task, so a slow submitter lookup only
/// holds up the commit that needs it. Results come back in input order.
pub struct Pipeline {
    parser: Arc<ConventionalParser>,
    resolver: Arc<dyn UserResolver>,
    base_url: Arc<str>,
    changelog: ChangelogConfig,
}

impl Pipeline {
    /// Creates a pipeline from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or a template
    /// is invalid.
    pub fn new(config: Config, resolver: Arc<dyn UserResolver>) -> CoreResult<Self> {
        config.validate()?;
        let parser = ConventionalParser::from_config(&config.parser)?;
        ChangelogGenerator::new(&config.changelog)?;

        let base_url = config.parser.base_url.unwrap_or_default();

        Ok(Self {
            parser: Arc::new(parser),
            resolver,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            changelog: config.changelog,
        })
    }

    /// Parses every commit concurrently, returning one outcome per commit in
    /// input order.
    ///
    /// Included commits carry the hash, link and author of their source.
    ///
    /// # Errors
    ///
    /// Returns an error if a parse task panics.
    pub async fn parse_outcomes(&self, commits: Vec<RawCommit>) -> CoreResult<Vec<ParseOutcome>> {
        let total = commits.len();
        let mut join_set = JoinSet::new();

        for (index, raw) in commits.into_iter().enumerate() {
            let parser = Arc::clone(&self.parser);
            let resolver = Arc::clone(&self.resolver);
            let base_url = Arc::clone(&self.base_url);

            join_set.spawn(async move {
                let outcome = parser
                    .parse(&raw.message, &base_url, resolver.as_ref())
                    .await;
                (index, raw, outcome)
            });
        }

        let mut slots: Vec<Option<ParseOutcome>> = (0..total).map(|_| None).collect();

        while let Some(joined) = join_set.join_next().await {
            let (index, raw, outcome) = joined?;

            let outcome = match outcome {
                ParseOutcome::Included(commit) => ParseOutcome::Included(commit.with_origin(&raw)),
                ParseOutcome::Skipped(reason) => {
                    info!(
                        sha = %raw.short_sha(),
                        subject = %raw.subject(),
                        %reason,
                        "skipping commit"
                    );
                    ParseOutcome::Skipped(reason)
                }
            };

            slots[index] = Some(outcome);
        }

        Ok(slots.into_iter().flatten().collect())
    }

    /// Parses every commit concurrently and keeps the included ones, in
    /// input order.
    ///
    /// # Errors
    ///
    /// Returns an error if a parse task panics.
    pub async fn parse_commits(&self, commits: Vec<RawCommit>) -> CoreResult<Vec<ParsedCommit>> {
        let total = commits.len();
        let parsed: Vec<ParsedCommit> = self
            .parse_outcomes(commits)
            .await?
            .into_iter()
            .filter_map(ParseOutcome::included)
            .collect();

        debug!(total, included = parsed.len(), "parsed commits");
        Ok(parsed)
    }

    /// Renders the changelog for `version`.
    ///
    /// # Errors
    ///
    /// Returns an error if a template is invalid.
    pub fn generate(
        &self,
        version: &str,
        commits: &[ParsedCommit],
        date: Option<NaiveDate>,
    ) -> CoreResult<Changelog> {
        let mut generator = ChangelogGenerator::new(&self.changelog)?;
        if let Some(date) = date {
            generator = generator.with_date(date);
        }
        Ok(generator.generate(version, commits))
    }

    /// Parses `commits` and renders the changelog for `version`.
    ///
    /// # Errors
    ///
    /// Returns an error if a parse task panics or a template is invalid.
    pub async fn run(
        &self,
        version: &str,
        commits: Vec<RawCommit>,
        date: Option<NaiveDate>,
    ) -> CoreResult<Changelog> {
        let parsed = self.parse_commits(commits).await?;
        self.generate(version, &parsed, date)
    }
}
