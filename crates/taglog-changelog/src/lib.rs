//! Changelog generation for taglog.
//!
//! Groups parsed commits by type, orders the groups, renders one line per
//! commit through a configurable template and returns both the formatted
//! document and a flat change list.

mod error;
mod generator;
mod template;

pub use error::{ChangelogError, ChangelogResult};
pub use generator::{Changelog, ChangelogGenerator, generate};
pub use template::{Placeholder, Template};
