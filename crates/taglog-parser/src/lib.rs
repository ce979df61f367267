//! Conventional commit parser for taglog.
//!
//! This crate turns free-form commit messages into [`ParsedCommit`]s:
//! - [`ConventionalParser`]: type, scope, breaking flag, description and PR detection
//! - [`UserResolver`]: injected lookup of a pull request's submitter
//! - [`link_references`]: rewrites `#N` references into markdown links
//!
//! [`ParsedCommit`]: taglog_commit::ParsedCommit

mod conventional;
mod links;
mod resolver;

pub use conventional::ConventionalParser;
pub use links::link_references;
pub use resolver::{
    FnResolver, NoopResolver, PullRequestUser, ResolveError, ResolveResult, StaticResolver,
    UserResolver,
};
