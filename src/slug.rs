//! Identifier-safe slugs.
//!
//! Hosts and zones are turned into slugs so they can be used as Terraform
//! resource names, which only allow letters, digits, `-` and `_`.

use std::sync::LazyLock;

use deunicode::deunicode;
use regex::Regex;

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_-]+").expect("static slug pattern is valid"));

static REPEATED_DASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("static slug pattern is valid"));

/// Converts a string into a lowercase slug.
///
/// Non-ASCII text is transliterated first (`café` becomes `cafe`). Every run
/// of characters outside `[a-z0-9_-]` (after lowercasing) becomes a single
/// `-`, consecutive dashes collapse, and leading or trailing `-`/`_` are
/// trimmed.
///
/// ```
/// assert_eq!(dns2tf::slugify("api.example.com"), "api-example-com");
/// assert_eq!(dns2tf::slugify("example.com."), "example-com");
/// ```
pub fn slugify(input: &str) -> String {
    let lowered = deunicode(input).to_lowercase();
    let replaced = DISALLOWED_CHARS.replace_all(&lowered, "-");
    let collapsed = REPEATED_DASHES.replace_all(&replaced, "-");
    collapsed.trim_matches(|c| c == '-' || c == '_').to_string()
}
