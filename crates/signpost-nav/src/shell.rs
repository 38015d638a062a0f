//! Per-page navigation bundle handed to the renderer.

use serde::Serialize;

use crate::link::normalize_path;
use crate::locale::LocaleSwitch;
use crate::nav::NavItem;
use crate::sidebar::SidebarGroup;
use crate::site::{Footer, SearchProvider, SiteConfig, SocialLink};

/// Navigation surface of one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageShell {
    /// Normalized page path.
    pub path: String,
    /// Locale the page belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<LocaleSummary>,
    /// Localized top navigation bar.
    pub nav: Vec<NavItem>,
    /// Index into `nav` of the highlighted entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_nav: Option<usize>,
    /// Localized sidebar groups (empty when the page has no sidebar).
    pub sidebar: Vec<SidebarGroup>,
    /// Previous/next links in sidebar order.
    pub pager: Pager,
    /// Locale switcher entries.
    pub locale_links: Vec<LocaleSwitch>,
    /// Localized footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    /// Search provider.
    pub search: SearchProvider,
    /// Icon links.
    pub social_links: Vec<SocialLink>,
}

/// Current locale as seen by the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocaleSummary {
    /// Locale code.
    pub code: String,
    /// Locale label.
    pub label: String,
    /// Effective `lang` attribute (locale `lang`, else the site default).
    pub lang: String,
}

/// Neighbouring pages in the flattened sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pager {
    /// Previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PagerLink>,
    /// Next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PagerLink>,
}

/// Pager entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PagerLink {
    /// Link label.
    pub label: String,
    /// Internal path as authored.
    pub path: String,
}

impl SiteConfig {
    /// Build the navigation surface for `path`.
    ///
    /// `path` is normalized first. Nav and sidebar are rewritten for the
    /// locale the path belongs to: labels take its overrides and, for a
    /// co-hosted locale, internal targets move under its prefix.
    #[must_use]
    pub fn page_shell(&self, path: &str) -> PageShell {
        let path = normalize_path(path);
        let locale = self.locale_for(&path);
        let localizer = self.localizer(&path);

        let sidebar: Vec<SidebarGroup> = self
            .sidebar_for(&path)
            .iter()
            .map(|group| group.localized(&localizer))
            .collect();
        let pager = pager_for(&sidebar, &path);

        PageShell {
            locale: locale.map(|locale| LocaleSummary {
                code: locale.code.clone(),
                label: locale.label.clone(),
                lang: locale.lang.clone().unwrap_or_else(|| self.meta.lang.clone()),
            }),
            nav: self.nav.iter().map(|item| item.localized(&localizer)).collect(),
            active_nav: self.active_nav(&path),
            sidebar,
            pager,
            locale_links: self.locale_links(&path),
            footer: self.footer.as_ref().map(|footer| Footer {
                message: footer.message.as_deref().map(|text| localizer.label(text)),
                copyright: footer.copyright.as_deref().map(|text| localizer.label(text)),
            }),
            search: self.search,
            social_links: self.social_links.clone(),
            path,
        }
    }
}

/// Previous/next internal links around `path` in sidebar display order.
///
/// Uses the first occurrence of `path`; a page missing from the sidebar
/// gets an empty pager.
fn pager_for(groups: &[SidebarGroup], path: &str) -> Pager {
    let mut links = Vec::new();
    for group in groups {
        group.for_each_link(&mut |_, label, target| {
            if let Some(target) = target.internal_path() {
                links.push(PagerLink {
                    label: label.to_owned(),
                    path: target.to_owned(),
                });
            }
        });
    }

    let Some(index) = links
        .iter()
        .position(|link| normalize_path(&link.path) == path)
    else {
        return Pager::default();
    };

    Pager {
        prev: index.checked_sub(1).map(|i| links[i].clone()),
        next: links.get(index + 1).cloned(),
    }
}
