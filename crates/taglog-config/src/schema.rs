//! Configuration schema.

use std::collections::{BTreeMap, HashSet};

use regex::Regex;
use serde::{Deserialize, Serialize};
use taglog_commit::CommitType;

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Parser configuration.
    #[serde(default)]
    pub parser: ParserConfig,

    /// Changelog configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

impl Config {
    /// Checks values that serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns an error if a skip pattern does not compile, the section order
    /// lists a type twice, or a template is empty.
    pub fn validate(&self) -> ConfigResult<()> {
        self.parser.compile_skip_patterns()?;

        let mut seen = HashSet::new();
        for kind in &self.changelog.section_order {
            if !seen.insert(kind) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate type in section_order: {kind}"
                )));
            }
        }

        if self.changelog.commit_template.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "commit_template must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Applies command-line overrides on top of this configuration.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(exclude_types) = overrides.exclude_types {
            self.changelog.exclude_types = exclude_types;
        }
        if let Some(base_url) = overrides.base_url {
            self.parser.base_url = Some(base_url);
        }
        self
    }

    /// Serializes this configuration as a `taglog.toml` document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Values given on the command line that replace configured ones.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replaces `changelog.exclude_types` wholesale.
    pub exclude_types: Option<Vec<CommitType>>,

    /// Replaces `parser.base_url`.
    pub base_url: Option<String>,
}

/// Parser configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// Repository base URL used to link `#N` references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Regexes; a commit whose subject matches any of them is skipped.
    #[serde(default)]
    pub skip_patterns: Vec<String>,
}

impl ParserConfig {
    /// Compiles the skip patterns.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pattern that fails to compile.
    pub fn compile_skip_patterns(&self) -> ConfigResult<Vec<Regex>> {
        self.skip_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }
}

/// Changelog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangelogConfig {
    /// Types left out of the output entirely.
    #[serde(default)]
    pub exclude_types: Vec<CommitType>,

    /// Section heading per type.
    #[serde(default = "default_headings")]
    pub headings: BTreeMap<CommitType, String>,

    /// Order in which sections are emitted.
    #[serde(default = "default_section_order")]
    pub section_order: Vec<CommitType>,

    /// Template for one commit line in the changelog.
    #[serde(default = "default_commit_template")]
    pub commit_template: String,

    /// Template for one line of the flat change list (defaults to `commit_template`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes_template: Option<String>,

    /// Append the release date to the version heading when one is supplied.
    #[serde(default = "default_true")]
    pub include_date: bool,

    /// Prefix rendered by `{breaking}` for breaking commits.
    #[serde(default = "default_breaking_marker")]
    pub breaking_marker: String,

    /// Render a trailing section with `BREAKING CHANGE:` notes.
    #[serde(default = "default_true")]
    pub breaking_notes: bool,

    /// Drop repeated commits with the same hash.
    #[serde(default = "default_true")]
    pub dedupe: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            exclude_types: Vec::new(),
            headings: default_headings(),
            section_order: default_section_order(),
            commit_template: default_commit_template(),
            changes_template: None,
            include_date: true,
            breaking_marker: default_breaking_marker(),
            breaking_notes: true,
            dedupe: true,
        }
    }
}

impl ChangelogConfig {
    /// Returns the heading for a type, falling back to the type name.
    #[must_use]
    pub fn heading(&self, kind: CommitType) -> &str {
        self.headings.get(&kind).map_or(kind.as_str(), String::as_str)
    }

    /// Returns true if commits of this type are left out.
    #[must_use]
    pub fn is_excluded(&self, kind: CommitType) -> bool {
        self.exclude_types.contains(&kind)
    }

    /// Returns the template used for the flat change list.
    #[must_use]
    pub fn changes_template(&self) -> &str {
        self.changes_template
            .as_deref()
            .unwrap_or(&self.commit_template)
    }
}

fn default_true() -> bool {
    true
}

fn default_headings() -> BTreeMap<CommitType, String> {
    [
        (CommitType::Feat, "Features"),
        (CommitType::Fix, "Bug Fixes"),
        (CommitType::Perf, "Performance Improvements"),
        (CommitType::Refactor, "Refactors"),
        (CommitType::Docs, "Documentation"),
        (CommitType::Style, "Code Style"),
        (CommitType::Test, "Tests"),
        (CommitType::Build, "Build System"),
        (CommitType::Ci, "Continuous Integration"),
        (CommitType::Chore, "Chores"),
        (CommitType::Revert, "Reverts"),
        (CommitType::Other, "Other Changes"),
    ]
    .into_iter()
    .map(|(kind, label)| (kind, label.to_string()))
    .collect()
}

fn default_section_order() -> Vec<CommitType> {
    vec![
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Perf,
        CommitType::Refactor,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Test,
        CommitType::Build,
        CommitType::Ci,
        CommitType::Chore,
        CommitType::Revert,
        CommitType::Other,
    ]
}

fn default_commit_template() -> String {
    "- {breaking}{scope}{description} ({commit}){by_author}".to_string()
}

fn default_breaking_marker() -> String {
    "**BREAKING:** ".to_string()
}
