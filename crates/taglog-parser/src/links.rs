//! Issue and pull request reference linking.

use std::sync::LazyLock;

use regex::{Captures, Regex};

// Already-linked references are matched first so they are copied through untouched.
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<linked>\[#\d+\]\([^)]*\))|(?P<lead>^|[^\w])#(?P<num>[1-9]\d*)\b")
        .expect("invalid regex")
});

/// Rewrites every bare `#N` in `text` into `[#N]({base_url}/issues/N)`.
///
/// References that are already markdown links are left alone, as are
/// references glued to a preceding word (`repo#12`). Without a base URL the
/// text is returned unchanged.
pub fn link_references(text: &str, base_url: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    if base_url.is_empty() {
        return text.to_string();
    }

    REFERENCE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            if let Some(linked) = caps.name("linked") {
                return linked.as_str().to_string();
            }
            let lead = caps.name("lead").map_or("", |m| m.as_str());
            let num = &caps["num"];
            format!("{lead}[#{num}]({base_url}/issues/{num})")
        })
        .into_owned()
}
