//! Link targets and URL path normalization.

use std::fmt;

use regex::Regex;
use serde::{Serialize, Serializer};

/// Where a navigation entry points.
///
/// Targets are stored exactly as authored. Classification only decides
/// whether the target is checked against the content tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LinkTarget {
    /// Absolute URL outside this site (`https://...`, `mailto:...`, `//host/...`).
    External(String),
    /// Path within this deployment (e.g. `/python/pytest/get_started`).
    Internal(String),
}

impl LinkTarget {
    /// Classify a raw link string.
    ///
    /// Returns `None` for empty (or whitespace-only) input, which the
    /// configuration format uses for "no link".
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if has_scheme(trimmed) || trimmed.starts_with("//") {
            Some(Self::External(raw.to_owned()))
        } else {
            Some(Self::Internal(raw.to_owned()))
        }
    }

    /// The target as authored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::External(url) => url,
            Self::Internal(path) => path,
        }
    }

    /// Whether the target leaves this deployment.
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// The path of an internal target, `None` for external ones.
    #[must_use]
    pub fn internal_path(&self) -> Option<&str> {
        match self {
            Self::Internal(path) => Some(path),
            Self::External(_) => None,
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RFC 3986 scheme check: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
fn has_scheme(value: &str) -> bool {
    let Some((scheme, _)) = value.split_once(':') else {
        return false;
    };
    scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Normalize a URL path for lookups.
///
/// - strips `?query` and `#fragment`
/// - strips a trailing `.html` or `.md` extension
/// - ensures a leading `/`
///
/// Trailing slashes are kept: `/guide/` and `/guide` are different pages
/// (a directory index and a standalone file).
///
/// # Examples
///
/// ```
/// use signpost_nav::normalize_path;
///
/// assert_eq!(normalize_path("guide/setup.html#install"), "/guide/setup");
/// assert_eq!(normalize_path("/python/flask/"), "/python/flask/");
/// assert_eq!(normalize_path(""), "/");
/// ```
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = raw[..end].trim();
    let path = path
        .strip_suffix(".html")
        .or_else(|| path.strip_suffix(".md"))
        .unwrap_or(path);

    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Regular expression marking a nav link active for every path it matches.
#[derive(Clone, Debug)]
pub struct ActiveMatch(Regex);

impl ActiveMatch {
    /// Compile an active-match pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    /// The source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether `path` is covered by this pattern.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }
}

impl PartialEq for ActiveMatch {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ActiveMatch {}

impl Serialize for ActiveMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
