//! Parsed commit type after conventional-commit parsing.

use serde::{Deserialize, Serialize};

use crate::raw::short_sha;
use crate::{CommitAuthor, CommitType, RawCommit};

/// A commit after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// The commit type (feat, fix, docs, etc.).
    pub r#type: CommitType,

    /// The optional scope.
    pub scope: Option<String>,

    /// Whether this is a breaking change.
    pub breaking: bool,

    /// Text of the `BREAKING CHANGE:` footer, if one was present.
    pub breaking_note: Option<String>,

    /// The summary without the type/scope prefix, with `#N` references linked.
    pub description: String,

    /// Pull request number, if one was referenced.
    pub pr: Option<u64>,

    /// Login of the pull request submitter.
    pub username: Option<String>,

    /// Profile link of the pull request submitter.
    pub user_url: Option<String>,

    /// The commit hash (SHA).
    pub sha: String,

    /// Link to the commit.
    pub url: String,

    /// The commit author, as reported by the host.
    pub author: Option<CommitAuthor>,
}

impl ParsedCommit {
    /// Creates a new parsed commit builder.
    #[must_use]
    pub fn builder(r#type: CommitType) -> ParsedCommitBuilder {
        ParsedCommitBuilder::new(r#type)
    }

    /// Attaches the hash, link and author of the commit this was parsed from.
    #[must_use]
    pub fn with_origin(mut self, raw: &RawCommit) -> Self {
        self.sha.clone_from(&raw.sha);
        self.url.clone_from(&raw.url);
        self.author.clone_from(&raw.author);
        self
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_sha(&self) -> &str {
        short_sha(&self.sha)
    }
}

/// Builder for [`ParsedCommit`].
#[derive(Debug)]
pub struct ParsedCommitBuilder {
    inner: ParsedCommit,
}

impl ParsedCommitBuilder {
    fn new(r#type: CommitType) -> Self {
        Self {
            inner: ParsedCommit {
                r#type,
                scope: None,
                breaking: false,
                breaking_note: None,
                description: String::new(),
                pr: None,
                username: None,
                user_url: None,
                sha: String::new(),
                url: String::new(),
                author: None,
            },
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.inner.scope = Some(scope.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = description.into();
        self
    }

    /// Sets the breaking flag.
    #[must_use]
    pub fn breaking(mut self, breaking: bool) -> Self {
        self.inner.breaking = breaking;
        self
    }

    /// Sets the breaking change note. Implies `breaking`.
    #[must_use]
    pub fn breaking_note(mut self, note: impl Into<String>) -> Self {
        self.inner.breaking = true;
        self.inner.breaking_note = Some(note.into());
        self
    }

    /// Sets the pull request number.
    #[must_use]
    pub fn pr(mut self, pr: u64) -> Self {
        self.inner.pr = Some(pr);
        self
    }

    /// Sets the pull request submitter.
    #[must_use]
    pub fn submitter(mut self, username: impl Into<String>, user_url: impl Into<String>) -> Self {
        self.inner.username = Some(username.into());
        self.inner.user_url = Some(user_url.into());
        self
    }

    /// Sets the commit hash.
    #[must_use]
    pub fn sha(mut self, sha: impl Into<String>) -> Self {
        self.inner.sha = sha.into();
        self
    }

    /// Sets the commit link.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.inner.url = url.into();
        self
    }

    /// Sets the commit author.
    #[must_use]
    pub fn author(mut self, author: CommitAuthor) -> Self {
        self.inner.author = Some(author);
        self
    }

    /// Builds the [`ParsedCommit`].
    #[must_use]
    pub fn build(self) -> ParsedCommit {
        self.inner
    }
}
