//! Sidebar trees and the per-path sidebar resolver.

use serde::Serialize;

use crate::link::LinkTarget;
use crate::locale::Localizer;
use crate::nav::NavLink;

/// Sidebar shown for every page under `prefix`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    /// URL path prefix (e.g. `/python/pytest/`).
    pub prefix: String,
    /// Top-level groups, in display order.
    pub groups: Vec<SidebarGroup>,
}

/// Titled, optionally collapsible group of sidebar entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub title: String,
    /// Whether the reader can fold the group.
    pub collapsible: bool,
    /// Whether the group starts folded. Implies `collapsible`.
    pub collapsed: bool,
    /// Optional link on the group heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkTarget>,
    /// Entries, in display order.
    pub items: Vec<SidebarItem>,
}

/// Sidebar entry: a link or a nested group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarItem {
    /// Page link.
    Link(NavLink),
    /// Nested group.
    Group(SidebarGroup),
}

impl SidebarSection {
    /// Create a section.
    #[must_use]
    pub fn new(prefix: impl Into<String>, groups: Vec<SidebarGroup>) -> Self {
        Self {
            prefix: prefix.into(),
            groups,
        }
    }
}

impl SidebarGroup {
    /// Create an always-expanded group.
    #[must_use]
    pub fn new(title: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            title: title.into(),
            collapsible: false,
            collapsed: false,
            link: None,
            items,
        }
    }

    /// Make the group collapsible, folded or not.
    #[must_use]
    pub fn collapsible(mut self, collapsed: bool) -> Self {
        self.collapsible = true;
        self.collapsed = collapsed;
        self
    }

    /// Link the group heading.
    #[must_use]
    pub fn with_link(mut self, target: &str) -> Self {
        self.link = LinkTarget::parse(target);
        self
    }

    /// Visit the heading link and every link below, in display order.
    ///
    /// The visitor receives the titles of the enclosing groups (this one
    /// included) and the label and target of each link.
    pub fn for_each_link<'a>(&'a self, f: &mut impl FnMut(&[&'a str], &'a str, &'a LinkTarget)) {
        let mut trail = Vec::new();
        self.walk(&mut trail, f);
    }

    fn walk<'a>(
        &'a self,
        trail: &mut Vec<&'a str>,
        f: &mut impl FnMut(&[&'a str], &'a str, &'a LinkTarget),
    ) {
        trail.push(self.title.as_str());
        if let Some(link) = &self.link {
            f(trail.as_slice(), self.title.as_str(), link);
        }
        for item in &self.items {
            match item {
                SidebarItem::Link(nav_link) => {
                    if let Some(target) = &nav_link.target {
                        f(trail.as_slice(), nav_link.label.as_str(), target);
                    }
                }
                SidebarItem::Group(group) => group.walk(trail, f),
            }
        }
        trail.pop();
    }

    /// Copy of this group as seen from a locale (see [`Localizer`]).
    #[must_use]
    pub fn localized(&self, localizer: &Localizer<'_>) -> Self {
        Self {
            title: localizer.label(&self.title),
            collapsible: self.collapsible,
            collapsed: self.collapsed,
            link: self.link.as_ref().map(|target| localizer.target(target)),
            items: self
                .items
                .iter()
                .map(|item| match item {
                    SidebarItem::Link(link) => SidebarItem::Link(link.localized(localizer)),
                    SidebarItem::Group(group) => SidebarItem::Group(group.localized(localizer)),
                })
                .collect(),
        }
    }
}

impl From<NavLink> for SidebarItem {
    fn from(link: NavLink) -> Self {
        Self::Link(link)
    }
}

impl From<SidebarGroup> for SidebarItem {
    fn from(group: SidebarGroup) -> Self {
        Self::Group(group)
    }
}

/// Select the sidebar groups for `path`.
///
/// Among sections whose prefix is a prefix of `path`, the longest one wins;
/// on equal length the first declared wins. Returns an empty slice when no
/// section matches, which is the normal case for top-level pages.
#[must_use]
pub fn resolve_sidebar<'a>(sections: &'a [SidebarSection], path: &str) -> &'a [SidebarGroup] {
    let mut best: Option<&SidebarSection> = None;

    for section in sections {
        if !path.starts_with(section.prefix.as_str()) {
            continue;
        }
        if best.is_none_or(|current| section.prefix.len() > current.prefix.len()) {
            best = Some(section);
        }
    }

    best.map(|section| section.groups.as_slice()).unwrap_or_default()
}
