//! Locale selection and the locale switcher.
//!
//! Every locale owns a URL prefix: the root locale owns `/`, locale `zh`
//! owns `/zh/`. A locale with an external link is deployed separately and
//! never claims paths of this deployment; switching to it always leaves
//! the site.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::link::LinkTarget;

/// Base label to localized label.
pub type Labels = BTreeMap<String, String>;

/// Default code of the root locale.
pub const ROOT_LOCALE: &str = "root";

/// A language/region variant of the site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// Locale key (`root`, `zh`, ...). Non-root codes are also the URL prefix.
    pub code: String,
    /// Label shown in the locale switcher.
    pub label: String,
    /// HTML `lang` attribute for pages of this locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Absolute URL of a separately deployed site for this locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    /// Label overrides applied to nav, sidebar and footer text.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: Labels,
}

impl LocaleConfig {
    /// Create a locale served from this deployment.
    #[must_use]
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            lang: None,
            external_link: None,
            labels: Labels::new(),
        }
    }

    /// Set the `lang` attribute.
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Mark the locale as served from a separate deployment.
    #[must_use]
    pub fn with_external_link(mut self, url: impl Into<String>) -> Self {
        self.external_link = Some(url.into());
        self
    }

    /// Add a label override.
    #[must_use]
    pub fn with_label(mut self, base: impl Into<String>, localized: impl Into<String>) -> Self {
        self.labels.insert(base.into(), localized.into());
        self
    }

    /// Whether the locale lives in another deployment.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.external_link.is_some()
    }

    /// Path prefix owned by this locale, given the root locale code.
    #[must_use]
    pub fn prefix(&self, root: &str) -> String {
        if self.code == root {
            "/".to_owned()
        } else {
            format!("/{}/", self.code)
        }
    }
}

/// Destination of the locale switcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "href", rename_all = "lowercase")]
pub enum LocaleLink {
    /// Separately deployed site.
    External(String),
    /// Route within this deployment.
    Internal(String),
}

impl LocaleLink {
    /// The URL or path to navigate to.
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::External(url) => url,
            Self::Internal(path) => path,
        }
    }

    /// Whether the link leaves this deployment.
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

/// One entry of the locale switcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocaleSwitch {
    /// Target locale code.
    pub code: String,
    /// Target locale label.
    pub label: String,
    /// Where the switch navigates to.
    pub link: LocaleLink,
}

/// Whether `path` falls under a locale `prefix` (`/zh/`); the bare `/zh` counts.
fn owns(prefix: &str, path: &str) -> bool {
    path.starts_with(prefix) || prefix.strip_suffix('/') == Some(path)
}

/// Find the locale that applies to `path`.
///
/// Longest prefix wins among locales of this deployment; the first declared
/// wins on ties. Falls back to the root locale. Returns `None` only when
/// no locale matches and `root` is not declared.
#[must_use]
pub fn resolve_locale<'a>(
    locales: &'a [LocaleConfig],
    root: &str,
    path: &str,
) -> Option<&'a LocaleConfig> {
    let mut best: Option<(&LocaleConfig, usize)> = None;

    for locale in locales {
        if locale.code == root || locale.is_external() {
            continue;
        }
        let prefix = locale.prefix(root);
        if owns(&prefix, path) && best.is_none_or(|(_, len)| prefix.len() > len) {
            best = Some((locale, prefix.len()));
        }
    }

    best.map(|(locale, _)| locale)
        .or_else(|| locales.iter().find(|locale| locale.code == root))
}

/// Where switching from `path` to locale `code` navigates.
///
/// External locales always yield their external link. For local ones the
/// current locale prefix is replaced with the target prefix, keeping the
/// rest of the path. Returns `None` for an unknown `code`.
#[must_use]
pub fn switch_target(
    locales: &[LocaleConfig],
    root: &str,
    path: &str,
    code: &str,
) -> Option<LocaleLink> {
    let target = locales.iter().find(|locale| locale.code == code)?;
    if let Some(url) = &target.external_link {
        return Some(LocaleLink::External(url.clone()));
    }

    let rest = match resolve_locale(locales, root, path) {
        Some(current) if current.code != root => strip_locale_prefix(&current.prefix(root), path),
        _ => path,
    };
    let rest = rest.strip_prefix('/').unwrap_or(rest);

    Some(LocaleLink::Internal(format!("{}{rest}", target.prefix(root))))
}

/// Switcher entries for every locale other than the one `path` belongs to.
#[must_use]
pub fn locale_links(locales: &[LocaleConfig], root: &str, path: &str) -> Vec<LocaleSwitch> {
    let current = resolve_locale(locales, root, path).map(|locale| locale.code.as_str());

    locales
        .iter()
        .filter(|locale| Some(locale.code.as_str()) != current)
        .filter_map(|locale| {
            let link = switch_target(locales, root, path, &locale.code)?;
            Some(LocaleSwitch {
                code: locale.code.clone(),
                label: locale.label.clone(),
                link,
            })
        })
        .collect()
}

/// `path` without the locale `prefix`, keeping the leading slash.
fn strip_locale_prefix<'p>(prefix: &str, path: &'p str) -> &'p str {
    match path.strip_prefix(prefix.trim_end_matches('/')) {
        Some("") | None => "/",
        Some(rest) => rest,
    }
}

/// Localized text for `base`, or `base` itself when no override exists.
pub(crate) fn localize(labels: &Labels, base: &str) -> String {
    labels.get(base).map_or_else(|| base.to_owned(), Clone::clone)
}

static NO_LABELS: Labels = Labels::new();

/// Rewrites the base navigation tree for the locale a page belongs to.
///
/// Labels are replaced from the locale's overrides. For a co-hosted
/// non-root locale, internal targets also move under its prefix; targets
/// already under that prefix are kept.
#[derive(Clone, Debug)]
pub struct Localizer<'a> {
    labels: &'a Labels,
    prefix: Option<String>,
}

impl Default for Localizer<'_> {
    fn default() -> Self {
        Self {
            labels: &NO_LABELS,
            prefix: None,
        }
    }
}

impl<'a> Localizer<'a> {
    /// Replace labels only.
    #[must_use]
    pub fn new(labels: &'a Labels) -> Self {
        Self {
            labels,
            prefix: None,
        }
    }

    /// Localizer for pages of `locale`.
    #[must_use]
    pub fn for_locale(locale: &'a LocaleConfig, root: &str) -> Self {
        Self {
            labels: &locale.labels,
            prefix: (locale.code != root && !locale.is_external()).then(|| locale.prefix(root)),
        }
    }

    /// Localized text for `base`.
    #[must_use]
    pub fn label(&self, base: &str) -> String {
        localize(self.labels, base)
    }

    /// `target` as seen from this locale.
    #[must_use]
    pub fn target(&self, target: &LinkTarget) -> LinkTarget {
        match (target, &self.prefix) {
            (LinkTarget::Internal(path), Some(prefix)) if !owns(prefix, path) => {
                let rest = path.strip_prefix('/').unwrap_or(path);
                LinkTarget::Internal(format!("{prefix}{rest}"))
            }
            _ => target.clone(),
        }
    }

    /// `path` with this locale's prefix removed, as the base tree sees it.
    #[must_use]
    pub fn base_path<'p>(&self, path: &'p str) -> &'p str {
        match &self.prefix {
            Some(prefix) if owns(prefix, path) => strip_locale_prefix(prefix, path),
            _ => path,
        }
    }
}
