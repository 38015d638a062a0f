//! HTTP request handlers.

pub(crate) mod config;
pub(crate) mod shell;

/// Convert a captured route path (without leading slash) to a URL path.
pub(crate) fn to_url_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_owned()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_url_path() {
        assert_eq!(to_url_path(""), "/");
        assert_eq!(to_url_path("python/pytest/"), "/python/pytest/");
    }
}
