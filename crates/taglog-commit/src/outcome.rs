//! Result of parsing a single commit.

use std::fmt;

use serde::Serialize;

use crate::ParsedCommit;

/// Why a commit was left out of the changelog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The message was empty after trimming.
    Empty,
    /// A merge commit with nothing worth reporting.
    Merge,
    /// A `fixup!`/`squash!`/`amend!` commit meant to be squashed away.
    Autosquash,
    /// The type token is on the always-skip list.
    SkippedType(String),
    /// The subject matched a configured skip pattern.
    ExcludedPattern(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty message"),
            Self::Merge => write!(f, "merge commit"),
            Self::Autosquash => write!(f, "autosquash commit"),
            Self::SkippedType(token) => write!(f, "skipped type: {token}"),
            Self::ExcludedPattern(pattern) => write!(f, "matched skip pattern: {pattern}"),
        }
    }
}

/// Outcome of parsing one commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ParseOutcome {
    /// The commit belongs in the changelog.
    Included(ParsedCommit),
    /// The commit must be excluded.
    Skipped(SkipReason),
}

impl ParseOutcome {
    /// Returns the parsed commit, discarding skip reasons.
    #[must_use]
    pub fn included(self) -> Option<ParsedCommit> {
        match self {
            Self::Included(commit) => Some(commit),
            Self::Skipped(_) => None,
        }
    }

    /// Returns true if the commit was skipped.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}
