//! Core library for taglog.
//!
//! This crate ties the parser and the changelog generator together: it parses
//! a commit range concurrently, keeps the input order and renders the result.

mod error;
mod input;
mod pipeline;

pub use error::{CoreError, CoreResult};
pub use input::{load_commits, load_users};
pub use pipeline::Pipeline;
