//! Commit types for taglog.
//!
//! This crate provides the commit types shared by the parser and the
//! changelog generator:
//! - [`RawCommit`]: A commit as delivered by the repository host
//! - [`ParsedCommit`]: A commit after conventional-commit parsing
//! - [`CommitType`]: The fixed type vocabulary, with an uncategorized bucket
//! - [`ParseOutcome`]: Whether a commit is included or skipped

mod kind;
mod outcome;
mod parsed;
mod raw;

pub use kind::{CommitType, UnknownCommitType};
pub use outcome::{ParseOutcome, SkipReason};
pub use parsed::{ParsedCommit, ParsedCommitBuilder};
pub use raw::{CommitAuthor, RawCommit};
