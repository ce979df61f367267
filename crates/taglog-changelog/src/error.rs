//! Changelog error types.

use thiserror::Error;

/// Changelog-related errors.
///
/// Only configuration can be invalid; commit data never is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangelogError {
    /// A template names a placeholder that does not exist.
    #[error("unknown placeholder {{{name}}} in template {template:?}")]
    UnknownPlaceholder {
        /// The placeholder name.
        name: String,
        /// The template it appeared in.
        template: String,
    },

    /// A `{` without a matching `}`.
    #[error("unclosed placeholder in template {0:?}")]
    UnclosedPlaceholder(String),

    /// A lone `}` outside a placeholder.
    #[error("unmatched '}}' in template {0:?}")]
    UnmatchedBrace(String),
}

/// Result type for changelog operations.
pub type ChangelogResult<T> = Result<T, ChangelogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_placeholder_display() {
        let err = ChangelogError::UnknownPlaceholder {
            name: "title".to_string(),
            template: "- {title}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown placeholder {title} in template \"- {title}\""
        );
    }

    #[test]
    fn test_unclosed_display() {
        let err = ChangelogError::UnclosedPlaceholder("- {sha".to_string());
        assert_eq!(err.to_string(), "unclosed placeholder in template \"- {sha\"");
    }

    #[test]
    fn test_unmatched_display() {
        let err = ChangelogError::UnmatchedBrace("a } b".to_string());
        assert_eq!(err.to_string(), "unmatched '}' in template \"a } b\"");
    }
}
