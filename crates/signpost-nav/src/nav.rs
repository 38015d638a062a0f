//! Top navigation bar entries.

use serde::Serialize;

use crate::link::{ActiveMatch, LinkTarget, normalize_path};
use crate::locale::Localizer;

/// One entry of the top navigation bar: a direct link or a labelled submenu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Direct link.
    Link(NavLink),
    /// Labelled submenu.
    Menu(NavMenu),
}

/// Leaf navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    /// Display label.
    pub label: String,
    /// Link target. `None` renders as plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
    /// Pattern marking the entry active for other paths than its target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_match: Option<ActiveMatch>,
}

/// Submenu with ordered children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavMenu {
    /// Display label.
    pub label: String,
    /// Child entries.
    pub children: Vec<NavItem>,
}

impl NavLink {
    /// Create a link, parsing `target` with [`LinkTarget::parse`].
    #[must_use]
    pub fn new(label: impl Into<String>, target: &str) -> Self {
        Self {
            label: label.into(),
            target: LinkTarget::parse(target),
            active_match: None,
        }
    }

    /// Attach an active-match pattern.
    #[must_use]
    pub fn with_active_match(mut self, active_match: ActiveMatch) -> Self {
        self.active_match = Some(active_match);
        self
    }

    /// Whether this link is the current page (or covers it via `active_match`).
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        if let Some(active_match) = &self.active_match {
            return active_match.is_match(path);
        }
        self.target
            .as_ref()
            .and_then(LinkTarget::internal_path)
            .is_some_and(|target| normalize_path(target) == normalize_path(path))
    }

    pub(crate) fn localized(&self, localizer: &Localizer<'_>) -> Self {
        Self {
            label: localizer.label(&self.label),
            target: self.target.as_ref().map(|target| localizer.target(target)),
            active_match: self.active_match.clone(),
        }
    }
}

impl NavMenu {
    /// Create a submenu.
    #[must_use]
    pub fn new(label: impl Into<String>, children: Vec<NavItem>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }
}

impl NavItem {
    /// Display label of the entry.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link(link) => &link.label,
            Self::Menu(menu) => &menu.label,
        }
    }

    /// Whether this entry, or any entry below it, is active for `path`.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        match self {
            Self::Link(link) => link.is_active(path),
            Self::Menu(menu) => menu.children.iter().any(|child| child.is_active(path)),
        }
    }

    /// Visit every link in this subtree (depth-first, declaration order).
    ///
    /// The visitor receives the labels of the enclosing menus as a trail.
    pub fn for_each_link<'a>(&'a self, f: &mut impl FnMut(&[&'a str], &'a NavLink)) {
        let mut trail = Vec::new();
        self.walk(&mut trail, f);
    }

    fn walk<'a>(&'a self, trail: &mut Vec<&'a str>, f: &mut impl FnMut(&[&'a str], &'a NavLink)) {
        match self {
            Self::Link(link) => f(trail.as_slice(), link),
            Self::Menu(menu) => {
                trail.push(menu.label.as_str());
                for child in &menu.children {
                    child.walk(trail, f);
                }
                trail.pop();
            }
        }
    }

    /// Copy of this subtree as seen from a locale (see [`Localizer`]).
    #[must_use]
    pub fn localized(&self, localizer: &Localizer<'_>) -> Self {
        match self {
            Self::Link(link) => Self::Link(link.localized(localizer)),
            Self::Menu(menu) => Self::Menu(NavMenu {
                label: localizer.label(&menu.label),
                children: menu.children.iter().map(|c| c.localized(localizer)).collect(),
            }),
        }
    }
}

impl From<NavLink> for NavItem {
    fn from(link: NavLink) -> Self {
        Self::Link(link)
    }
}

impl From<NavMenu> for NavItem {
    fn from(menu: NavMenu) -> Self {
        Self::Menu(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Labels;
    use pretty_assertions::assert_eq;

    fn python_menu() -> NavItem {
        NavMenu::new(
            "Python",
            vec![
                NavLink::new("doc", "/python/doc/get_started")
                    .with_active_match(ActiveMatch::new("/python/doc/").unwrap())
                    .into(),
                NavMenu::new(
                    "Test Automatic",
                    vec![
                        NavLink::new("pytest", "/python/pytest/get_started")
                            .with_active_match(ActiveMatch::new("/python/pytest").unwrap())
                            .into(),
                        NavLink::new("selenium", "...").into(),
                    ],
                )
                .into(),
            ],
        )
        .into()
    }

    #[test]
    fn test_link_active_by_exact_target() {
        let link = NavLink::new("Guide", "/guide");
        assert!(link.is_active("/guide"));
        assert!(link.is_active("/guide.html"));
        assert!(!link.is_active("/guide/setup"));
    }

    #[test]
    fn test_link_active_match_overrides_target() {
        let link = NavLink::new("pytest", "/python/pytest/get_started")
            .with_active_match(ActiveMatch::new("/python/pytest").unwrap());
        assert!(link.is_active("/python/pytest/how_to_guides/mark"));
        assert!(!link.is_active("/python/flask/index"));
    }

    #[test]
    fn test_external_link_never_active() {
        let link = NavLink::new("GitHub", "https://github.com/");
        assert!(!link.is_active("/"));
    }

    #[test]
    fn test_menu_active_when_descendant_active() {
        let menu = python_menu();
        assert!(menu.is_active("/python/pytest/get_started"));
        assert!(menu.is_active("/python/doc/intro"));
        assert!(!menu.is_active("/golang/doc/get_started"));
    }

    #[test]
    fn test_for_each_link_reports_trail() {
        let menu = python_menu();
        let mut seen = Vec::new();
        menu.for_each_link(&mut |trail, link| {
            seen.push((trail.join(" > "), link.label.clone()));
        });

        assert_eq!(
            seen,
            vec![
                ("Python".to_owned(), "doc".to_owned()),
                ("Python > Test Automatic".to_owned(), "pytest".to_owned()),
                ("Python > Test Automatic".to_owned(), "selenium".to_owned()),
            ]
        );
    }

    #[test]
    fn test_localized_replaces_known_labels_only() {
        let labels = Labels::from([
            ("Python".to_owned(), "Python 文档".to_owned()),
            ("doc".to_owned(), "文档".to_owned()),
        ]);
        let NavItem::Menu(menu) = python_menu().localized(&Localizer::new(&labels)) else {
            panic!("expected menu");
        };

        assert_eq!(menu.label, "Python 文档");
        assert_eq!(menu.children[0].label(), "文档");
        assert_eq!(menu.children[1].label(), "Test Automatic");
    }

    #[test]
    fn test_nav_link_serialization() {
        let link = NavLink::new("doc", "/python/doc/get_started")
            .with_active_match(ActiveMatch::new("/python/doc/").unwrap());
        let json = serde_json::to_value(NavItem::from(link)).unwrap();

        assert_eq!(json["label"], "doc");
        assert_eq!(json["target"], "/python/doc/get_started");
        assert_eq!(json["activeMatch"], "/python/doc/");
    }

    #[test]
    fn test_nav_link_without_target_omits_field() {
        let json = serde_json::to_value(NavLink::new("Soon", "")).unwrap();
        assert!(json.get("target").is_none());
        assert!(json.get("activeMatch").is_none());
    }
}
