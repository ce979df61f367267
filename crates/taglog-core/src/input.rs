//! Input file readers.
//!
//! The commit range and the pull request submitters come from the repository
//! host; taglog reads them as JSON exports.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use taglog_commit::RawCommit;
use taglog_parser::{PullRequestUser, StaticResolver};
use tracing::debug;

use crate::{CoreError, CoreResult};

/// Reads a JSON array of commits, oldest first.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a commit array.
pub fn load_commits(path: impl AsRef<Path>) -> CoreResult<Vec<RawCommit>> {
    let commits: Vec<RawCommit> = read_json(path.as_ref())?;
    debug!(count = commits.len(), "loaded commits");
    Ok(commits)
}

/// Reads a JSON object mapping pull request numbers to their submitters.
///
/// # Errors
///
/// Returns an error if the file cannot be read or has the wrong shape.
pub fn load_users(path: impl AsRef<Path>) -> CoreResult<StaticResolver> {
    let users: HashMap<u64, PullRequestUser> = read_json(path.as_ref())?;
    debug!(count = users.len(), "loaded pull request submitters");
    Ok(StaticResolver::new(users))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CoreResult<T> {
    let content = fs::read_to_string(path).map_err(|source| CoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}
