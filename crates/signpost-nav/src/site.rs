//! The site configuration aggregate.
//!
//! [`SiteConfig`] is built once at startup and never mutated. All lookups
//! on it are pure: the same path always yields the same answer, and
//! concurrent readers need no synchronization.

use serde::Serialize;

use crate::locale::{self, LocaleConfig, LocaleLink, LocaleSwitch, Localizer, ROOT_LOCALE};
use crate::nav::NavItem;
use crate::sidebar::{self, SidebarGroup, SidebarSection};

/// Site-wide metadata passed through to the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMeta {
    /// Site title.
    pub title: String,
    /// Site description for `<meta name="description">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default `lang` attribute.
    pub lang: String,
    /// Logo image path shown in the nav bar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Favicon path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// Serve pages without the `.html` suffix.
    pub clean_urls: bool,
    /// Heading levels shown in the page outline.
    pub outline: Outline,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Signpost".to_owned(),
            description: None,
            lang: "en-US".to_owned(),
            logo: None,
            favicon: None,
            clean_urls: false,
            outline: Outline::default(),
        }
    }
}

/// Heading level range shown in the page outline (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Outline {
    /// Shallowest heading level.
    pub min: u8,
    /// Deepest heading level.
    pub max: u8,
}

impl Outline {
    /// Whether the range satisfies `1 <= min <= max <= 6`.
    #[must_use]
    pub fn is_valid(self) -> bool {
        (1..=6).contains(&self.min) && (1..=6).contains(&self.max) && self.min <= self.max
    }
}

impl Default for Outline {
    fn default() -> Self {
        Self { min: 2, max: 2 }
    }
}

/// Footer text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    /// Message line (e.g. license notice).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Copyright line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Search provider selection. Index construction belongs to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side local search index.
    Local,
    /// No search box.
    #[default]
    #[serde(rename = "none")]
    Disabled,
}

/// Icon link in the nav bar (GitHub, Discord, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Icon name.
    pub icon: String,
    /// Absolute URL.
    pub link: String,
}

/// Complete navigation surface of a documentation site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site-wide metadata.
    pub meta: SiteMeta,
    /// Locales in declaration order.
    pub locales: Vec<LocaleConfig>,
    /// Code of the locale served at `/`.
    pub root_locale: String,
    /// Top navigation bar.
    pub nav: Vec<NavItem>,
    /// Sidebars by path prefix, in declaration order.
    pub sidebar: Vec<SidebarSection>,
    /// Footer text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    /// Search provider.
    pub search: SearchProvider,
    /// Icon links.
    pub social_links: Vec<SocialLink>,
    /// Permit internal links to missing pages.
    pub ignore_dead_links: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            meta: SiteMeta::default(),
            locales: vec![LocaleConfig::new(ROOT_LOCALE, "English")],
            root_locale: ROOT_LOCALE.to_owned(),
            nav: Vec::new(),
            sidebar: Vec::new(),
            footer: None,
            search: SearchProvider::default(),
            social_links: Vec::new(),
            ignore_dead_links: false,
        }
    }
}

impl SiteConfig {
    /// Sidebar groups for `path` (see [`sidebar::resolve_sidebar`]).
    #[must_use]
    pub fn sidebar_for(&self, path: &str) -> &[SidebarGroup] {
        sidebar::resolve_sidebar(&self.sidebar, path)
    }

    /// Locale that applies to `path` (see [`locale::resolve_locale`]).
    #[must_use]
    pub fn locale_for(&self, path: &str) -> Option<&LocaleConfig> {
        locale::resolve_locale(&self.locales, &self.root_locale, path)
    }

    /// Where switching from `path` to locale `code` navigates.
    #[must_use]
    pub fn switch_locale(&self, path: &str, code: &str) -> Option<LocaleLink> {
        locale::switch_target(&self.locales, &self.root_locale, path, code)
    }

    /// Locale switcher entries for `path`.
    #[must_use]
    pub fn locale_links(&self, path: &str) -> Vec<LocaleSwitch> {
        locale::locale_links(&self.locales, &self.root_locale, path)
    }

    /// Rewriter for the locale `path` belongs to.
    pub(crate) fn localizer(&self, path: &str) -> Localizer<'_> {
        self.locale_for(path)
            .map(|locale| Localizer::for_locale(locale, &self.root_locale))
            .unwrap_or_default()
    }

    /// Index of the top-level nav entry highlighted for `path`.
    ///
    /// On pages of a co-hosted locale the entry also matches the path with
    /// the locale prefix removed, since the nav is declared for the root.
    #[must_use]
    pub fn active_nav(&self, path: &str) -> Option<usize> {
        let base = self.localizer(path).base_path(path).to_owned();
        self.nav
            .iter()
            .position(|item| item.is_active(path) || item.is_active(&base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::ActiveMatch;
    use crate::nav::{NavLink, NavMenu};

    #[test]
    fn test_default_has_root_locale() {
        let site = SiteConfig::default();
        assert_eq!(site.locale_for("/anything").unwrap().code, "root");
        assert_eq!(site.search, SearchProvider::Disabled);
        assert!(site.sidebar_for("/anything").is_empty());
    }

    #[test]
    fn test_outline_validity() {
        assert!(Outline { min: 2, max: 3 }.is_valid());
        assert!(Outline { min: 1, max: 6 }.is_valid());
        assert!(!Outline { min: 0, max: 3 }.is_valid());
        assert!(!Outline { min: 4, max: 3 }.is_valid());
        assert!(!Outline { min: 2, max: 7 }.is_valid());
    }

    #[test]
    fn test_active_nav() {
        let site = SiteConfig {
            nav: vec![
                NavMenu::new("Python", vec![NavLink::new("doc", "/python/doc/get_started").into()])
                    .into(),
                NavMenu::new("Golang", vec![NavLink::new("doc", "/golang/doc/get_started").into()])
                    .into(),
            ],
            ..SiteConfig::default()
        };

        assert_eq!(site.active_nav("/golang/doc/get_started"), Some(1));
        assert_eq!(site.active_nav("/"), None);
    }

    #[test]
    fn test_active_nav_under_co_hosted_locale() {
        let site = SiteConfig {
            locales: vec![
                LocaleConfig::new("root", "English"),
                LocaleConfig::new("zh", "简体中文"),
            ],
            nav: vec![
                NavLink::new("Guide", "/guide").into(),
                NavLink::new("pytest", "/python/pytest/get_started")
                    .with_active_match(ActiveMatch::new("^/python/pytest/").unwrap())
                    .into(),
            ],
            ..SiteConfig::default()
        };

        assert_eq!(site.active_nav("/zh/guide"), Some(0));
        assert_eq!(site.active_nav("/zh/python/pytest/how_to_guides/fixture"), Some(1));
        assert_eq!(site.active_nav("/zh/"), None);
    }

    #[test]
    fn test_search_provider_serialization() {
        assert_eq!(serde_json::to_value(SearchProvider::Local).unwrap(), "local");
        assert_eq!(serde_json::to_value(SearchProvider::Disabled).unwrap(), "none");
    }

    #[test]
    fn test_site_config_serialization_shape() {
        let json = serde_json::to_value(SiteConfig::default()).unwrap();

        assert_eq!(json["rootLocale"], "root");
        assert_eq!(json["meta"]["lang"], "en-US");
        assert_eq!(json["meta"]["cleanUrls"], false);
        assert_eq!(json["locales"][0]["label"], "English");
        assert!(json.get("footer").is_none());
    }
}
