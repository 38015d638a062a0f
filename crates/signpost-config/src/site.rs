//! Raw site sections as authored in `signpost.toml`, and their resolution
//! into a [`SiteConfig`].

use std::collections::BTreeMap;

use serde::Deserialize;
use signpost_nav::{
    ActiveMatch, Footer, LinkTarget, LocaleConfig, NavItem, NavLink, NavMenu, Outline,
    ROOT_LOCALE, SearchProvider, SidebarGroup, SidebarItem, SidebarSection, SiteConfig, SiteMeta,
    SocialLink,
};

use crate::{ConfigError, require_http_url, require_non_empty};

/// `[site]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SiteRaw {
    pub(crate) title: Option<String>,
    description: Option<String>,
    lang: Option<String>,
    logo: Option<String>,
    favicon: Option<String>,
    clean_urls: Option<bool>,
    pub(crate) ignore_dead_links: Option<bool>,
    root_locale: Option<String>,
    outline: Option<OutlineRaw>,
}

/// `site.outline`: a single level, a `[min, max]` pair, or `"deep"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OutlineRaw {
    Level(u8),
    Range([u8; 2]),
    Keyword(String),
}

/// `[[locales]]` entry.
#[derive(Debug, Deserialize)]
pub(crate) struct LocaleRaw {
    code: String,
    label: String,
    #[serde(default)]
    lang: Option<String>,
    /// External deployment URL. An empty string means "none".
    #[serde(default)]
    pub(crate) link: Option<String>,
    #[serde(default)]
    labels: BTreeMap<String, String>,
}

/// `[[nav]]` entry (recursive through `items`).
#[derive(Debug, Deserialize)]
pub(crate) struct NavItemRaw {
    text: String,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    active_match: Option<String>,
    #[serde(default)]
    items: Option<Vec<NavItemRaw>>,
}

/// `[[sidebar]]` entry.
#[derive(Debug, Deserialize)]
pub(crate) struct SidebarSectionRaw {
    prefix: String,
    #[serde(default)]
    groups: Vec<SidebarEntryRaw>,
}

/// Sidebar group or link. Entries with `items` are groups.
#[derive(Debug, Deserialize)]
pub(crate) struct SidebarEntryRaw {
    text: String,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    collapsed: Option<bool>,
    #[serde(default)]
    items: Option<Vec<SidebarEntryRaw>>,
}

/// `[footer]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FooterRaw {
    message: Option<String>,
    copyright: Option<String>,
}

/// `[search]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SearchRaw {
    provider: SearchProviderRaw,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SearchProviderRaw {
    Local,
    #[default]
    None,
}

/// `[[social_links]]` entry.
#[derive(Debug, Deserialize)]
pub(crate) struct SocialLinkRaw {
    icon: String,
    pub(crate) link: String,
}

/// All site sections of a config file, borrowed for resolution.
pub(crate) struct SiteSections<'a> {
    pub(crate) site: &'a SiteRaw,
    pub(crate) locales: &'a [LocaleRaw],
    pub(crate) nav: &'a [NavItemRaw],
    pub(crate) sidebar: &'a [SidebarSectionRaw],
    pub(crate) footer: Option<&'a FooterRaw>,
    pub(crate) search: &'a SearchRaw,
    pub(crate) social_links: &'a [SocialLinkRaw],
}

impl SiteSections<'_> {
    /// Build the immutable [`SiteConfig`].
    ///
    /// Only field-level problems are reported here (bad regex, malformed
    /// entries, non-http locale links). Cross-entry checks such as duplicate
    /// prefixes and dead links belong to [`SiteConfig::check`].
    pub(crate) fn resolve(&self) -> Result<SiteConfig, ConfigError> {
        let defaults = SiteMeta::default();
        let lang = self.site.lang.clone().unwrap_or(defaults.lang);
        let meta = SiteMeta {
            title: self.site.title.clone().unwrap_or(defaults.title),
            description: self.site.description.clone(),
            lang: lang.clone(),
            logo: self.site.logo.clone(),
            favicon: self.site.favicon.clone(),
            clean_urls: self.site.clean_urls.unwrap_or(defaults.clean_urls),
            outline: resolve_outline(self.site.outline.as_ref())?,
        };

        let root_locale = self
            .site
            .root_locale
            .clone()
            .unwrap_or_else(|| ROOT_LOCALE.to_owned());

        let locales = if self.locales.is_empty() {
            // No [[locales]]: the site is single-language.
            vec![LocaleConfig::new(root_locale.clone(), lang.clone()).with_lang(lang)]
        } else {
            self.locales
                .iter()
                .map(resolve_locale)
                .collect::<Result<_, _>>()?
        };

        let nav = self
            .nav
            .iter()
            .map(|item| resolve_nav_item(item, "nav"))
            .collect::<Result<_, _>>()?;

        let sidebar = self
            .sidebar
            .iter()
            .map(resolve_section)
            .collect::<Result<_, _>>()?;

        let social_links = self
            .social_links
            .iter()
            .map(|social| -> Result<SocialLink, ConfigError> {
                require_non_empty(&social.icon, "social_links.icon")?;
                require_http_url(&social.link, "social_links.link")?;
                Ok(SocialLink {
                    icon: social.icon.clone(),
                    link: social.link.clone(),
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(SiteConfig {
            meta,
            locales,
            root_locale,
            nav,
            sidebar,
            footer: self.footer.map(|footer| Footer {
                message: footer.message.clone(),
                copyright: footer.copyright.clone(),
            }),
            search: match self.search.provider {
                SearchProviderRaw::Local => SearchProvider::Local,
                SearchProviderRaw::None => SearchProvider::Disabled,
            },
            social_links,
            ignore_dead_links: self.site.ignore_dead_links.unwrap_or(false),
        })
    }
}

fn resolve_outline(raw: Option<&OutlineRaw>) -> Result<Outline, ConfigError> {
    match raw {
        None => Ok(Outline::default()),
        Some(OutlineRaw::Level(level)) => Ok(Outline {
            min: *level,
            max: *level,
        }),
        Some(OutlineRaw::Range([min, max])) => Ok(Outline {
            min: *min,
            max: *max,
        }),
        Some(OutlineRaw::Keyword(keyword)) if keyword == "deep" => Ok(Outline { min: 2, max: 6 }),
        Some(OutlineRaw::Keyword(keyword)) => Err(ConfigError::Validation(format!(
            "site.outline must be a level, a [min, max] pair or \"deep\", got \"{keyword}\""
        ))),
    }
}

fn resolve_locale(raw: &LocaleRaw) -> Result<LocaleConfig, ConfigError> {
    require_non_empty(&raw.code, "locales.code")?;

    let external_link = match raw.link.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(url) => {
            require_http_url(url, &format!("locales.{}.link", raw.code))?;
            Some(url.to_owned())
        }
    };

    Ok(LocaleConfig {
        code: raw.code.clone(),
        label: raw.label.clone(),
        lang: raw.lang.clone(),
        external_link,
        labels: raw.labels.clone(),
    })
}

fn resolve_nav_item(raw: &NavItemRaw, parent: &str) -> Result<NavItem, ConfigError> {
    let location = format!("{parent} > {}", raw.text);

    match &raw.items {
        Some(items) => {
            if raw.link.is_some() || raw.active_match.is_some() {
                return Err(ConfigError::Validation(format!(
                    "{location}: a menu with items cannot have link or active_match"
                )));
            }
            let children = items
                .iter()
                .map(|item| resolve_nav_item(item, &location))
                .collect::<Result<_, _>>()?;
            Ok(NavMenu::new(raw.text.clone(), children).into())
        }
        None => {
            let mut link = NavLink::new(raw.text.clone(), raw.link.as_deref().unwrap_or_default());
            if let Some(pattern) = &raw.active_match {
                let active_match = ActiveMatch::new(pattern).map_err(|e| {
                    ConfigError::Validation(format!("{location}: invalid active_match: {e}"))
                })?;
                link = link.with_active_match(active_match);
            }
            Ok(link.into())
        }
    }
}

fn resolve_section(raw: &SidebarSectionRaw) -> Result<SidebarSection, ConfigError> {
    let location = format!("sidebar {}", raw.prefix);
    if raw.prefix.is_empty() {
        return Err(ConfigError::Validation(
            "sidebar.prefix cannot be empty".to_owned(),
        ));
    }

    let groups = raw
        .groups
        .iter()
        .map(|entry| resolve_group(entry, &location))
        .collect::<Result<_, _>>()?;

    Ok(SidebarSection::new(raw.prefix.clone(), groups))
}

fn resolve_group(raw: &SidebarEntryRaw, parent: &str) -> Result<SidebarGroup, ConfigError> {
    let location = format!("{parent} > {}", raw.text);
    let items = raw
        .items
        .iter()
        .flatten()
        .map(|entry| resolve_sidebar_item(entry, &location))
        .collect::<Result<_, _>>()?;

    Ok(SidebarGroup {
        title: raw.text.clone(),
        collapsible: raw.collapsed.is_some(),
        collapsed: raw.collapsed.unwrap_or(false),
        link: raw.link.as_deref().and_then(LinkTarget::parse),
        items,
    })
}

fn resolve_sidebar_item(raw: &SidebarEntryRaw, parent: &str) -> Result<SidebarItem, ConfigError> {
    if raw.items.is_some() {
        return resolve_group(raw, parent).map(SidebarItem::Group);
    }
    if raw.collapsed.is_some() {
        return Err(ConfigError::Validation(format!(
            "{parent} > {}: collapsed requires items",
            raw.text
        )));
    }
    Ok(NavLink::new(raw.text.clone(), raw.link.as_deref().unwrap_or_default()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_outline() {
        assert_eq!(resolve_outline(None).unwrap(), Outline { min: 2, max: 2 });
        assert_eq!(
            resolve_outline(Some(&OutlineRaw::Level(3))).unwrap(),
            Outline { min: 3, max: 3 }
        );
        assert_eq!(
            resolve_outline(Some(&OutlineRaw::Range([2, 3]))).unwrap(),
            Outline { min: 2, max: 3 }
        );
        assert_eq!(
            resolve_outline(Some(&OutlineRaw::Keyword("deep".to_owned()))).unwrap(),
            Outline { min: 2, max: 6 }
        );
        assert!(resolve_outline(Some(&OutlineRaw::Keyword("shallow".to_owned()))).is_err());
    }

    #[test]
    fn test_resolve_locale_empty_link_is_local() {
        let raw = LocaleRaw {
            code: "zh".to_owned(),
            label: "简体中文 (待完成)".to_owned(),
            lang: None,
            link: Some(String::new()),
            labels: BTreeMap::new(),
        };

        let locale = resolve_locale(&raw).unwrap();

        assert!(!locale.is_external());
    }

    #[test]
    fn test_resolve_locale_rejects_relative_link() {
        let raw = LocaleRaw {
            code: "zh".to_owned(),
            label: "简体中文".to_owned(),
            lang: None,
            link: Some("/zh/".to_owned()),
            labels: BTreeMap::new(),
        };

        let err = resolve_locale(&raw).unwrap_err();

        assert!(err.to_string().contains("locales.zh.link"));
    }

    #[test]
    fn test_resolve_menu_with_link_fails() {
        let raw = NavItemRaw {
            text: "Python".to_owned(),
            link: Some("/python/".to_owned()),
            active_match: None,
            items: Some(Vec::new()),
        };

        let err = resolve_nav_item(&raw, "nav").unwrap_err();

        assert!(err.to_string().contains("nav > Python"));
    }

    #[test]
    fn test_resolve_invalid_active_match_fails() {
        let raw = NavItemRaw {
            text: "pytest".to_owned(),
            link: Some("/python/pytest/get_started".to_owned()),
            active_match: Some("/python/(".to_owned()),
            items: None,
        };

        let err = resolve_nav_item(&raw, "nav > Python").unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("nav > Python > pytest: invalid active_match"));
    }

    #[test]
    fn test_collapsed_link_fails() {
        let raw = SidebarEntryRaw {
            text: "Get Started".to_owned(),
            link: Some("/python/pytest/get_started".to_owned()),
            collapsed: Some(true),
            items: None,
        };

        let err = resolve_sidebar_item(&raw, "sidebar /python/pytest/ > Pytest").unwrap_err();

        assert!(err.to_string().contains("collapsed requires items"));
    }

    #[test]
    fn test_group_collapse_states() {
        let entry = |collapsed| SidebarEntryRaw {
            text: "How-to guides".to_owned(),
            link: None,
            collapsed,
            items: Some(Vec::new()),
        };

        let fixed = resolve_group(&entry(None), "sidebar /").unwrap();
        assert!(!fixed.collapsible && !fixed.collapsed);

        let open = resolve_group(&entry(Some(false)), "sidebar /").unwrap();
        assert!(open.collapsible && !open.collapsed);

        let folded = resolve_group(&entry(Some(true)), "sidebar /").unwrap();
        assert!(folded.collapsible && folded.collapsed);
    }
}
