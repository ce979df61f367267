//! Pull request submitter lookup.

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The account that opened a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestUser {
    /// The submitter's login.
    pub username: String,

    /// Link to the submitter's profile.
    pub user_url: String,
}

impl PullRequestUser {
    /// Creates a new submitter record.
    #[must_use]
    pub fn new(username: impl Into<String>, user_url: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            user_url: user_url.into(),
        }
    }
}

/// Errors reported by a [`UserResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The host has no pull request with this number.
    #[error("pull request #{0} not found")]
    NotFound(u64),

    /// The lookup itself failed.
    #[error("lookup failed: {0}")]
    Lookup(String),
}

/// Result type for submitter lookups.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Resolves a pull request number to its submitter.
///
/// Implementations own any retry, caching or timeout policy; the parser
/// calls [`resolve`](UserResolver::resolve) at most once per commit and
/// treats every error as "no attribution".
#[async_trait]
pub trait UserResolver: Send + Sync {
    /// Looks up the submitter of pull request `pr`.
    async fn resolve(&self, pr: u64) -> ResolveResult<PullRequestUser>;
}

/// A resolver that never finds anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

#[async_trait]
impl UserResolver for NoopResolver {
    async fn resolve(&self, pr: u64) -> ResolveResult<PullRequestUser> {
        Err(ResolveError::NotFound(pr))
    }
}

/// A resolver backed by a fixed table, e.g. one exported from the host.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    users: HashMap<u64, PullRequestUser>,
}

impl StaticResolver {
    /// Creates a resolver from a table of pull request numbers to submitters.
    #[must_use]
    pub fn new(users: HashMap<u64, PullRequestUser>) -> Self {
        Self { users }
    }
}

impl FromIterator<(u64, PullRequestUser)> for StaticResolver {
    fn from_iter<I: IntoIterator<Item = (u64, PullRequestUser)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl UserResolver for StaticResolver {
    async fn resolve(&self, pr: u64) -> ResolveResult<PullRequestUser> {
        self.users.get(&pr).cloned().ok_or(ResolveError::NotFound(pr))
    }
}

/// Adapts an async closure into a [`UserResolver`].
pub struct FnResolver<F>(F);

impl<F> FnResolver<F> {
    /// Wraps `f`.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F, Fut> UserResolver for FnResolver<F>
where
    F: Fn(u64) -> Fut + Send + Sync,
    Fut: Future<Output = ResolveResult<PullRequestUser>> + Send + 'static,
{
    async fn resolve(&self, pr: u64) -> ResolveResult<PullRequestUser> {
        (self.0)(pr).await
    }
}
