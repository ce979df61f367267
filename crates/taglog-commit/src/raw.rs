//! Raw commit type as delivered by the repository host.

use serde::{Deserialize, Serialize};

/// The author of a commit, as reported by the repository host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAuthor {
    /// The account name (e.g. a GitHub login).
    pub login: String,

    /// The display name, when known.
    #[serde(default)]
    pub name: Option<String>,

    /// Link to the author's profile.
    #[serde(default, alias = "html_url")]
    pub url: Option<String>,
}

impl CommitAuthor {
    /// Creates an author with just a login.
    #[must_use]
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: None,
            url: None,
        }
    }

    /// Sets the profile URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A commit in the compared range, before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// The commit hash (SHA).
    pub sha: String,

    /// The full commit message (subject + body).
    pub message: String,

    /// Link to the commit.
    #[serde(default, alias = "html_url")]
    pub url: String,

    /// The commit author, if the host could match one.
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

impl RawCommit {
    /// Creates a new raw commit without a link or author.
    #[must_use]
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
            url: String::new(),
            author: None,
        }
    }

    /// Sets the commit URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the commit author.
    #[must_use]
    pub fn with_author(mut self, author: CommitAuthor) -> Self {
        self.author = Some(author);
        self
    }

    /// Returns the first line of the commit message (the subject).
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.trim_start().lines().next().unwrap_or("").trim()
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_sha(&self) -> &str {
        short_sha(&self.sha)
    }
}

/// Truncates a hash to its first 7 characters.
pub(crate) fn short_sha(sha: &str) -> &str {
    sha.char_indices().nth(7).map_or(sha, |(idx, _)| &sha[..idx])
}
