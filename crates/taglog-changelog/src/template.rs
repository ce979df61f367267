//! Commit line templates.

use std::fmt::{self, Write};
use std::str::FromStr;

use taglog_commit::ParsedCommit;

use crate::{ChangelogError, ChangelogResult};

/// A value that can be substituted into a commit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// The commit description, with references linked.
    Description,
    /// `**scope:** `, or nothing when the commit has no scope.
    Scope,
    /// The commit type name.
    Type,
    /// The full hash.
    Sha,
    /// The first seven characters of the hash.
    ShortSha,
    /// The commit link.
    Url,
    /// The short hash, linked to the commit when a link is known.
    Commit,
    /// The pull request submitter, else the commit author.
    Author,
    /// ` by {author}`, or nothing when no author is known.
    ByAuthor,
    /// `#N` for the pull request, or nothing.
    Pr,
    /// The breaking marker for breaking commits, or nothing.
    Breaking,
}

impl Placeholder {
    /// Every placeholder, in documentation order.
    pub const ALL: [Self; 11] = [
        Self::Description,
        Self::Scope,
        Self::Type,
        Self::Sha,
        Self::ShortSha,
        Self::Url,
        Self::Commit,
        Self::Author,
        Self::ByAuthor,
        Self::Pr,
        Self::Breaking,
    ];

    /// Returns the name used between braces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Scope => "scope",
            Self::Type => "type",
            Self::Sha => "sha",
            Self::ShortSha => "short_sha",
            Self::Url => "url",
            Self::Commit => "commit",
            Self::Author => "author",
            Self::ByAuthor => "by_author",
            Self::Pr => "pr",
            Self::Breaking => "breaking",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placeholder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|p| p.as_str() == s).ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field(Placeholder),
}

/// A parsed commit line template such as `- {scope}{description} ({commit})`.
///
/// `{{` and `}}` produce literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown placeholders and unbalanced braces.
    pub fn parse(source: &str) -> ChangelogResult<Self> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    text.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    text.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => {
                                return Err(ChangelogError::UnclosedPlaceholder(
                                    source.to_string(),
                                ));
                            }
                        }
                    }

                    let field = name.trim().parse::<Placeholder>().map_err(|()| {
                        ChangelogError::UnknownPlaceholder {
                            name: name.clone(),
                            template: source.to_string(),
                        }
                    })?;

                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Field(field));
                }
                '}' => return Err(ChangelogError::UnmatchedBrace(source.to_string())),
                c => text.push(c),
            }
        }

        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(Self { segments })
    }

    /// Renders one line for `commit`.
    #[must_use]
    pub fn render(&self, commit: &ParsedCommit, breaking_marker: &str) -> String {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field(field) => render_field(&mut out, *field, commit, breaking_marker),
            }
        }

        out
    }
}

fn render_field(
    out: &mut String,
    field: Placeholder,
    commit: &ParsedCommit,
    breaking_marker: &str,
) {
    match field {
        Placeholder::Description => out.push_str(&commit.description),
        Placeholder::Scope => {
            if let Some(scope) = &commit.scope {
                _ = write!(out, "**{scope}:** ");
            }
        }
        Placeholder::Type => out.push_str(commit.r#type.as_str()),
        Placeholder::Sha => out.push_str(&commit.sha),
        Placeholder::ShortSha => out.push_str(commit.short_sha()),
        Placeholder::Url => out.push_str(&commit.url),
        Placeholder::Commit => {
            let short = commit.short_sha();
            if commit.url.is_empty() {
                out.push_str(short);
            } else if !short.is_empty() {
                _ = write!(out, "[{short}]({})", commit.url);
            }
        }
        Placeholder::Author => {
            if let Some(author) = author_link(commit) {
                out.push_str(&author);
            }
        }
        Placeholder::ByAuthor => {
            if let Some(author) = author_link(commit) {
                _ = write!(out, " by {author}");
            }
        }
        Placeholder::Pr => {
            if let Some(pr) = commit.pr {
                _ = write!(out, "#{pr}");
            }
        }
        Placeholder::Breaking => {
            if commit.breaking {
                out.push_str(breaking_marker);
            }
        }
    }
}

/// Formats the person to credit for a commit: the pull request submitter if
/// known, else the commit author.
fn author_link(commit: &ParsedCommit) -> Option<String> {
    let (login, url) = match (&commit.username, &commit.author) {
        (Some(username), _) => (username.as_str(), commit.user_url.as_deref()),
        (None, Some(author)) => (author.login.as_str(), author.url.as_deref()),
        (None, None) => return None,
    };

    if login.is_empty() {
        return None;
    }

    Some(match url.filter(|url| !url.is_empty()) {
        Some(url) => format!("[@{login}]({url})"),
        None => format!("@{login}"),
    })
}
