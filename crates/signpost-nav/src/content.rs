//! Set of content pages that exist, used for dead-link checks.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::link::normalize_path;

/// Normalized URL paths of every page the site can serve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentIndex {
    paths: BTreeSet<String>,
}

impl ContentIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page URL path. The path is normalized first.
    pub fn insert(&mut self, path: &str) {
        self.paths.insert(normalize_path(path));
    }

    /// Whether a link target resolves to a known page.
    #[must_use]
    pub fn contains(&self, target: &str) -> bool {
        self.paths.contains(&normalize_path(target))
    }

    /// Number of registered paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no path is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Registered paths, sorted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ContentIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        for path in iter {
            index.insert(path.as_ref());
        }
        index
    }
}
