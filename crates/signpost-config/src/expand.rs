//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand `${VAR}` references in `value`.
///
/// Only `${...}` references are expanded; any other `$` (bare `$VAR`, `$`
/// in URL paths) is kept as written. An unterminated `${` is literal text.
/// `field` names the config key in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_reference(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}

/// Expand a single `${VAR}` or `${VAR:-default}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.var_name),
    })
}

/// Unset variable reported by the lookup context.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_var_in_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SIGNPOST_TEST_ZH_HOST", "zh.docs.example.com");
        }
        let result = expand_env("https://${SIGNPOST_TEST_ZH_HOST}/", "locales.zh.link").unwrap();
        assert_eq!(result, "https://zh.docs.example.com/");
        unsafe {
            std::env::remove_var("SIGNPOST_TEST_ZH_HOST");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SIGNPOST_TEST_UNSET_TITLE");
        }
        let result = expand_env("${SIGNPOST_TEST_UNSET_TITLE:-G-Tester}", "site.title").unwrap();
        assert_eq!(result, "G-Tester");
    }

    #[test]
    fn test_expand_value_wins_over_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SIGNPOST_TEST_SET_TITLE", "Docs");
        }
        let result = expand_env("${SIGNPOST_TEST_SET_TITLE:-G-Tester}", "site.title").unwrap();
        assert_eq!(result, "Docs");
        unsafe {
            std::env::remove_var("SIGNPOST_TEST_SET_TITLE");
        }
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SIGNPOST_TEST_MISSING");
        }
        let err = expand_env("${SIGNPOST_TEST_MISSING}", "server.host").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("SIGNPOST_TEST_MISSING"));
        assert!(err.to_string().contains("server.host"));
    }

    #[test]
    fn test_bare_dollar_kept_next_to_reference() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SIGNPOST_TEST_DOCS_HOST");
            std::env::remove_var("path");
        }
        let result = expand_env(
            "https://${SIGNPOST_TEST_DOCS_HOST:-docs.example.com}/$path",
            "social_links.link",
        )
        .unwrap();
        assert_eq!(result, "https://docs.example.com/$path");
    }

    #[test]
    fn test_unterminated_reference_is_literal() {
        assert_eq!(
            expand_env("https://example.com/${oops", "social_links.link").unwrap(),
            "https://example.com/${oops"
        );
    }

    #[test]
    fn test_literals_pass_through() {
        assert_eq!(expand_env("127.0.0.1", "server.host").unwrap(), "127.0.0.1");
        assert_eq!(expand_env("$HOME", "site.title").unwrap(), "$HOME");
        assert_eq!(
            expand_env("https://example.com/$path", "social_links.link").unwrap(),
            "https://example.com/$path"
        );
    }
}
