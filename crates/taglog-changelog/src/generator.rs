//! Changelog generation.

use std::collections::HashSet;
use std::fmt::Write;

use chrono::NaiveDate;
use taglog_commit::{CommitType, ParsedCommit};
use taglog_config::ChangelogConfig;
use tracing::debug;

use crate::{ChangelogResult, Template};

/// Heading of the trailing section listing breaking change notes.
const BREAKING_NOTES_HEADING: &str = "BREAKING CHANGES";

/// The two renderings of one release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    /// The formatted document: version heading plus one section per type.
    pub changelog: String,

    /// One line per commit, no headings.
    pub changes: String,
}

impl Changelog {
    /// Returns true if there was nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changelog.is_empty() && self.changes.is_empty()
    }
}

/// Commits of one type, in the order they were received.
#[derive(Debug)]
struct Section<'c> {
    kind: CommitType,
    commits: Vec<&'c ParsedCommit>,
}

/// Renders parsed commits into a [`Changelog`].
#[derive(Debug, Clone)]
pub struct ChangelogGenerator<'a> {
    config: &'a ChangelogConfig,
    commit_template: Template,
    changes_template: Template,
    date: Option<NaiveDate>,
}

impl<'a> ChangelogGenerator<'a> {
    /// Creates a generator, compiling the configured templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a template is malformed.
    pub fn new(config: &'a ChangelogConfig) -> ChangelogResult<Self> {
        Ok(Self {
            config,
            commit_template: Template::parse(&config.commit_template)?,
            changes_template: Template::parse(config.changes_template())?,
            date: None,
        })
    }

    /// Sets the release date shown in the version heading.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Generates the changelog for `version` from `commits`.
    ///
    /// Returns an empty [`Changelog`] when no commit survives exclusion.
    #[must_use]
    pub fn generate(&self, version: &str, commits: &[ParsedCommit]) -> Changelog {
        let sections = self.sections(commits);
        if sections.is_empty() {
            debug!(version, "no commits to render");
            return Changelog::default();
        }

        let marker = self.config.breaking_marker.as_str();
        let mut changelog = String::new();
        _ = writeln!(changelog, "{}", self.title(version));

        for section in &sections {
            _ = write!(changelog, "\n### {}\n\n", self.config.heading(section.kind));
            for commit in &section.commits {
                _ = writeln!(changelog, "{}", self.commit_template.render(commit, marker));
            }
        }

        if self.config.breaking_notes {
            Self::write_breaking_notes(&mut changelog, &sections);
        }

        let changes = sections
            .iter()
            .flat_map(|section| &section.commits)
            .map(|commit| self.changes_template.render(commit, marker))
            .collect::<Vec<_>>()
            .join("\n");

        debug!(version, sections = sections.len(), "changelog generated");

        Changelog { changelog, changes }
    }

    /// Returns the version heading.
    fn title(&self, version: &str) -> String {
        match self.date.filter(|_| self.config.include_date) {
            Some(date) => format!("## {version} - {}", date.format("%Y-%m-%d")),
            None => format!("## {version}"),
        }
    }

    /// Dedupes, groups, excludes and orders the commits.
    fn sections<'c>(&self, commits: &'c [ParsedCommit]) -> Vec<Section<'c>> {
        let mut seen = HashSet::new();
        let mut sections: Vec<Section<'c>> = Vec::new();

        for commit in commits {
            if self.config.dedupe && !commit.sha.is_empty() && !seen.insert(commit.sha.as_str()) {
                debug!(sha = commit.short_sha(), "skipping duplicate commit");
                continue;
            }

            if self.config.is_excluded(commit.r#type) {
                continue;
            }

            match sections.iter_mut().find(|s| s.kind == commit.r#type) {
                Some(section) => section.commits.push(commit),
                None => sections.push(Section {
                    kind: commit.r#type,
                    commits: vec![commit],
                }),
            }
        }

        // Stable: unlisted types keep their first-seen order after the listed ones.
        sections.sort_by_key(|section| self.rank(section.kind));
        sections
    }

    fn rank(&self, kind: CommitType) -> usize {
        self.config
            .section_order
            .iter()
            .position(|k| *k == kind)
            .unwrap_or(usize::MAX)
    }

    fn write_breaking_notes(out: &mut String, sections: &[Section<'_>]) {
        let notes: Vec<_> = sections
            .iter()
            .flat_map(|section| &section.commits)
            .filter_map(|commit| {
                commit
                    .breaking_note
                    .as_deref()
                    .map(|note| (commit.scope.as_deref(), note))
            })
            .collect();

        if notes.is_empty() {
            return;
        }

        _ = write!(out, "\n### {BREAKING_NOTES_HEADING}\n\n");
        for (scope, note) in notes {
            _ = match scope {
                Some(scope) => writeln!(out, "- **{scope}:** {note}"),
                None => writeln!(out, "- {note}"),
            };
        }
    }
}

/// Generates an undated changelog for `version`.
///
/// # Errors
///
/// Returns an error if a configured template is malformed.
pub fn generate(
    version: &str,
    commits: &[ParsedCommit],
    config: &ChangelogConfig,
) -> ChangelogResult<Changelog> {
    Ok(ChangelogGenerator::new(config)?.generate(version, commits))
}
