//! Conventional Commits parser.

use std::sync::LazyLock;

use regex::Regex;
use taglog_commit::{CommitType, ParseOutcome, ParsedCommit, SkipReason};
use taglog_config::{ConfigResult, ParserConfig};
use tracing::{debug, warn};

use crate::{UserResolver, link_references};

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>\w+)(?:\((?P<scope>[^()\r\n]*)\))?(?P<breaking>!)?:\s*(?P<description>\S.*)$",
    )
    .expect("invalid regex")
});

static MERGE_PR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Merge pull request #(?P<pr>[1-9]\d*) from \S+").expect("invalid regex")
});

static MERGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Merge (?:branch|remote-tracking branch|tag|commit|pull request) ")
        .expect("invalid regex")
});

static AUTOSQUASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:fixup|squash|amend)! ").expect("invalid regex"));

static TRAILING_PR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#(?P<pr>[1-9]\d*)\)\s*$").expect("invalid regex"));

static BREAKING_FOOTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^BREAKING[ -]CHANGE:\s*(?P<note>.*)$").expect("invalid regex"));

/// Type tokens that never make it into a changelog.
const ALWAYS_SKIPPED_TYPES: &[&str] = &["wip"];

/// Conventional Commits parser.
///
/// Only the subject line decides type, scope and description; the remaining
/// lines are scanned for a `BREAKING CHANGE:` footer.
#[derive(Debug, Clone, Default)]
pub struct ConventionalParser {
    skip_patterns: Vec<Regex>,
}

impl ConventionalParser {
    /// Creates a new conventional parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips commits whose subject matches any of `patterns`.
    #[must_use]
    pub fn with_skip_patterns(mut self, patterns: Vec<Regex>) -> Self {
        self.skip_patterns = patterns;
        self
    }

    /// Creates a parser from the `[parser]` configuration table.
    ///
    /// # Errors
    ///
    /// Returns an error if a skip pattern does not compile.
    pub fn from_config(config: &ParserConfig) -> ConfigResult<Self> {
        Ok(Self::new().with_skip_patterns(config.compile_skip_patterns()?))
    }

    /// Parses a commit message and resolves its pull request submitter.
    ///
    /// Never fails: lookup errors only drop the attribution.
    pub async fn parse(
        &self,
        message: &str,
        base_url: &str,
        resolver: &dyn UserResolver,
    ) -> ParseOutcome {
        let mut commit = match self.parse_message(message, base_url) {
            ParseOutcome::Included(commit) => commit,
            skipped @ ParseOutcome::Skipped(_) => return skipped,
        };

        if let Some(pr) = commit.pr {
            match resolver.resolve(pr).await {
                Ok(user) => {
                    commit.username = Some(user.username);
                    commit.user_url = Some(user.user_url);
                }
                Err(err) => {
                    warn!(pr, error = %err, "could not resolve pull request submitter");
                }
            }
        }

        ParseOutcome::Included(commit)
    }

    /// Parses a commit message without resolving the pull request submitter.
    pub fn parse_message(&self, message: &str, base_url: &str) -> ParseOutcome {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return ParseOutcome::Skipped(SkipReason::Empty);
        }

        let lines: Vec<&str> = trimmed.lines().collect();
        let first = lines[0].trim();

        let (subject, body, merged_pr) = if let Some(caps) = MERGE_PR_RE.captures(first) {
            // The pull request title sits in the body of a merge commit.
            let mut body = lines[1..].to_vec();
            let Some(idx) = body.iter().position(|l| is_title_line(l)) else {
                return ParseOutcome::Skipped(SkipReason::Merge);
            };
            let subject = std::mem::take(&mut body[idx]).trim();
            let pr = caps["pr"].parse::<u64>().ok();
            (subject, body, pr)
        } else if MERGE_RE.is_match(first) {
            return ParseOutcome::Skipped(SkipReason::Merge);
        } else {
            (first, lines[1..].to_vec(), None)
        };

        if AUTOSQUASH_RE.is_match(subject) {
            return ParseOutcome::Skipped(SkipReason::Autosquash);
        }

        if let Some(pattern) = self
            .skip_patterns
            .iter()
            .find(|p| p.is_match(first) || p.is_match(subject))
        {
            return ParseOutcome::Skipped(SkipReason::ExcludedPattern(pattern.as_str().to_string()));
        }

        let header = match Header::parse(subject) {
            Ok(header) => header,
            Err(token) => {
                debug!(%token, "skipping commit with always-skipped type");
                return ParseOutcome::Skipped(SkipReason::SkippedType(token));
            }
        };

        let pr = merged_pr.or_else(|| {
            TRAILING_PR_RE
                .captures(subject)
                .and_then(|caps| caps["pr"].parse().ok())
        });

        let mut builder = ParsedCommit::builder(header.kind)
            .description(link_references(header.description, base_url))
            .breaking(header.breaking);

        if let Some(scope) = header.scope {
            builder = builder.scope(scope);
        }
        if let Some(note) = breaking_footer(&body) {
            builder = if note.is_empty() {
                builder.breaking(true)
            } else {
                builder.breaking_note(note)
            };
        }
        if let Some(pr) = pr {
            builder = builder.pr(pr);
        }

        ParseOutcome::Included(builder.build())
    }
}

/// The pieces of a subject line.
struct Header<'a> {
    kind: CommitType,
    scope: Option<&'a str>,
    breaking: bool,
    description: &'a str,
}

impl<'a> Header<'a> {
    /// Splits a subject line; `Err` carries an always-skipped type token.
    ///
    /// A subject without a recognized type keeps the whole line as its
    /// description, but a `!` before the colon still marks it breaking.
    fn parse(subject: &'a str) -> Result<Self, String> {
        let uncategorized = |breaking| Self {
            kind: CommitType::Other,
            scope: None,
            breaking,
            description: subject,
        };

        let Some(caps) = HEADER_RE.captures(subject) else {
            return Ok(uncategorized(false));
        };

        let token = caps["type"].to_ascii_lowercase();
        if ALWAYS_SKIPPED_TYPES.contains(&token.as_str()) {
            return Err(token);
        }

        let breaking = caps.name("breaking").is_some();
        let Some(kind) = CommitType::from_token(&token) else {
            return Ok(uncategorized(breaking));
        };

        let scope = caps
            .name("scope")
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty());

        Ok(Self {
            kind,
            scope,
            breaking,
            description: caps.name("description").map_or(subject, |m| m.as_str().trim()),
        })
    }
}

/// Returns true for a line that can serve as a merged pull request's title.
fn is_title_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !BREAKING_FOOTER_RE.is_match(line)
}

/// Finds a `BREAKING CHANGE:` footer and returns its note.
///
/// The note continues over following lines up to the next blank line.
fn breaking_footer(body: &[&str]) -> Option<String> {
    let start = body
        .iter()
        .position(|line| BREAKING_FOOTER_RE.is_match(line.trim()))?;

    let caps = BREAKING_FOOTER_RE.captures(body[start].trim())?;
    let mut note = vec![caps["note"].trim()];
    note.extend(
        body[start + 1..]
            .iter()
            .map(|line| line.trim())
            .take_while(|line| !line.is_empty()),
    );

    Some(note.join(" ").trim().to_string())
}
