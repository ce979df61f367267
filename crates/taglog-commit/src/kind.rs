//! Conventional commit type vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A conventional commit type.
///
/// The vocabulary is closed: anything that is not a known type (or one of its
/// aliases) lands in [`CommitType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CommitType {
    /// New features.
    Feat,
    /// Bug fixes.
    Fix,
    /// Documentation only changes.
    Docs,
    /// Formatting, whitespace and other non-semantic changes.
    Style,
    /// Code changes that neither fix a bug nor add a feature.
    Refactor,
    /// Performance improvements.
    Perf,
    /// Adding or correcting tests.
    Test,
    /// Build system or dependency changes.
    Build,
    /// CI configuration changes.
    Ci,
    /// Maintenance.
    Chore,
    /// Reverts of earlier commits.
    Revert,
    /// Uncategorized bucket.
    Other,
}

/// Error returned when a type name is not part of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown commit type: {0}")]
pub struct UnknownCommitType(pub String);

impl CommitType {
    /// Every type, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Feat,
        Self::Fix,
        Self::Docs,
        Self::Style,
        Self::Refactor,
        Self::Perf,
        Self::Test,
        Self::Build,
        Self::Ci,
        Self::Chore,
        Self::Revert,
        Self::Other,
    ];

    /// Looks up a type token, accepting aliases and any letter case.
    ///
    /// Returns `None` for tokens outside the vocabulary.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let kind = match token.trim().to_ascii_lowercase().as_str() {
            "feat" | "feature" => Self::Feat,
            "fix" | "bugfix" => Self::Fix,
            "docs" | "doc" => Self::Docs,
            "style" => Self::Style,
            "refactor" => Self::Refactor,
            "perf" => Self::Perf,
            "test" | "tests" => Self::Test,
            "build" => Self::Build,
            "ci" => Self::Ci,
            "chore" => Self::Chore,
            "revert" => Self::Revert,
            "other" => Self::Other,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Chore => "chore",
            Self::Revert => "revert",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = UnknownCommitType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownCommitType(s.to_string()))
    }
}

impl TryFrom<String> for CommitType {
    type Error = UnknownCommitType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CommitType> for String {
    fn from(kind: CommitType) -> Self {
        kind.as_str().to_string()
    }
}
