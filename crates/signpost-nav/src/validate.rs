//! Load-time validation of a [`SiteConfig`] against the content tree.

use std::collections::HashSet;

use crate::content::ContentIndex;
use crate::link::LinkTarget;
use crate::site::SiteConfig;

/// Malformed or inconsistent site configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Internal link to a page that does not exist.
    #[error("Dangling link in {location}: '{label}' points to missing page {target}")]
    DanglingLink {
        /// Where the link is declared (e.g. `nav > Python`).
        location: String,
        /// Link label.
        label: String,
        /// Link target as authored.
        target: String,
    },
    /// Two sidebar sections share a prefix.
    #[error("Duplicate sidebar section for prefix {prefix}")]
    DuplicateSection {
        /// The repeated prefix.
        prefix: String,
    },
    /// Two locales share a code.
    #[error("Duplicate locale code: {code}")]
    DuplicateLocale {
        /// The repeated code.
        code: String,
    },
    /// The root locale is not declared.
    #[error("Root locale '{code}' is not declared")]
    MissingRootLocale {
        /// Expected root locale code.
        code: String,
    },
    /// Outline levels out of range.
    #[error("Outline levels [{min}, {max}] must satisfy 1 <= min <= max <= 6")]
    InvalidOutline {
        /// Configured minimum level.
        min: u8,
        /// Configured maximum level.
        max: u8,
    },
}

impl SiteConfig {
    /// Validate the configuration, failing on the first problem.
    ///
    /// Problems are reported in the order [`SiteConfig::check`] lists them.
    pub fn validate(&self, content: &ContentIndex) -> Result<(), ValidationError> {
        match self.check(content).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Collect every validation problem.
    ///
    /// Order: locales, outline, sidebar prefixes, then dangling links in
    /// nav and sidebar declaration order. Dangling links are skipped
    /// entirely when `ignore_dead_links` is set.
    #[must_use]
    pub fn check(&self, content: &ContentIndex) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        self.check_locales(&mut errors);

        let outline = self.meta.outline;
        if !outline.is_valid() {
            errors.push(ValidationError::InvalidOutline {
                min: outline.min,
                max: outline.max,
            });
        }

        self.check_sections(&mut errors);

        if self.ignore_dead_links {
            tracing::debug!("Dead link check disabled");
        } else {
            self.check_links(content, &mut errors);
        }

        tracing::debug!(problems = errors.len(), "Validated site configuration");
        errors
    }

    fn check_locales(&self, errors: &mut Vec<ValidationError>) {
        let mut seen = HashSet::new();
        for locale in &self.locales {
            if !seen.insert(locale.code.as_str()) {
                errors.push(ValidationError::DuplicateLocale {
                    code: locale.code.clone(),
                });
            }
        }
        if !seen.contains(self.root_locale.as_str()) {
            errors.push(ValidationError::MissingRootLocale {
                code: self.root_locale.clone(),
            });
        }
    }

    fn check_sections(&self, errors: &mut Vec<ValidationError>) {
        let mut seen = HashSet::new();
        for section in &self.sidebar {
            if !seen.insert(section.prefix.as_str()) {
                errors.push(ValidationError::DuplicateSection {
                    prefix: section.prefix.clone(),
                });
            }
        }
    }

    fn check_links(&self, content: &ContentIndex, errors: &mut Vec<ValidationError>) {
        let mut check = |location: String, label: &str, target: &LinkTarget| {
            if let Some(path) = target.internal_path()
                && !content.contains(path)
            {
                errors.push(ValidationError::DanglingLink {
                    location,
                    label: label.to_owned(),
                    target: path.to_owned(),
                });
            }
        };

        for item in &self.nav {
            item.for_each_link(&mut |trail, link| {
                if let Some(target) = &link.target {
                    check(breadcrumb("nav", trail), &link.label, target);
                }
            });
        }

        for section in &self.sidebar {
            let root = format!("sidebar {}", section.prefix);
            for group in &section.groups {
                group.for_each_link(&mut |trail, label, target| {
                    check(breadcrumb(&root, trail), label, target);
                });
            }
        }
    }
}

/// `root > a > b` location string.
fn breadcrumb(root: &str, trail: &[&str]) -> String {
    std::iter::once(root)
        .chain(trail.iter().copied())
        .collect::<Vec<_>>()
        .join(" > ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleConfig;
    use crate::nav::{NavLink, NavMenu};
    use crate::site::Outline;
    use crate::sidebar::{SidebarGroup, SidebarSection};
    use pretty_assertions::assert_eq;

    fn content() -> ContentIndex {
        [
            "/python/pytest/get_started",
            "/python/pytest/how_to_guides/fixture",
            "/python/flask/index",
            "/python/flask/",
        ]
        .into_iter()
        .collect()
    }

    fn site_with_nav_target(target: &str) -> SiteConfig {
        SiteConfig {
            nav: vec![NavMenu::new("Python", vec![NavLink::new("doc", target).into()]).into()],
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let site = SiteConfig {
            nav: vec![
                NavLink::new("pytest", "/python/pytest/get_started").into(),
                NavLink::new("GitHub", "https://github.com/huohuoren4/docs.git").into(),
                NavLink::new("Soon", "").into(),
            ],
            sidebar: vec![SidebarSection::new(
                "/python/flask/",
                vec![SidebarGroup::new(
                    "Flask",
                    vec![NavLink::new("Get Started", "/python/flask/index").into()],
                )],
            )],
            ..SiteConfig::default()
        };

        assert_eq!(site.validate(&content()), Ok(()));
    }

    #[test]
    fn test_dangling_nav_link_fails() {
        let site = site_with_nav_target("/missing/page");

        assert_eq!(
            site.validate(&content()),
            Err(ValidationError::DanglingLink {
                location: "nav > Python".to_owned(),
                label: "doc".to_owned(),
                target: "/missing/page".to_owned(),
            })
        );
    }

    #[test]
    fn test_ignore_dead_links_preserves_link_verbatim() {
        let mut site = site_with_nav_target("/missing/page");
        site.ignore_dead_links = true;

        assert_eq!(site.validate(&content()), Ok(()));
        let mut targets = Vec::new();
        site.nav[0].for_each_link(&mut |_, link| targets.push(link.target.clone()));
        assert_eq!(targets, vec![LinkTarget::parse("/missing/page")]);
    }

    #[test]
    fn test_external_links_are_not_checked() {
        let site = site_with_nav_target("https://example.com/missing");
        assert!(site.check(&ContentIndex::new()).is_empty());
    }

    #[test]
    fn test_dangling_sidebar_links_include_group_headers() {
        let site = SiteConfig {
            sidebar: vec![SidebarSection::new(
                "/python/pytest/",
                vec![SidebarGroup::new(
                    "Pytest",
                    vec![
                        NavLink::new("Get Started", "/python/pytest/get_started").into(),
                        SidebarGroup::new(
                            "Reference guides",
                            vec![NavLink::new("How to invoke pytest", "/python/pytest/invoke_pytest")
                                .into()],
                        )
                        .collapsible(true)
                        .with_link("/python/pytest/reference/")
                        .into(),
                    ],
                )],
            )],
            ..SiteConfig::default()
        };

        let errors = site.check(&content());

        assert_eq!(
            errors,
            vec![
                ValidationError::DanglingLink {
                    location: "sidebar /python/pytest/ > Pytest > Reference guides".to_owned(),
                    label: "Reference guides".to_owned(),
                    target: "/python/pytest/reference/".to_owned(),
                },
                ValidationError::DanglingLink {
                    location: "sidebar /python/pytest/ > Pytest > Reference guides".to_owned(),
                    label: "How to invoke pytest".to_owned(),
                    target: "/python/pytest/invoke_pytest".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_section_fails() {
        let site = SiteConfig {
            sidebar: vec![
                SidebarSection::new("/a/", Vec::new()),
                SidebarSection::new("/b/", Vec::new()),
                SidebarSection::new("/a/", Vec::new()),
            ],
            ..SiteConfig::default()
        };

        assert_eq!(
            site.validate(&ContentIndex::new()),
            Err(ValidationError::DuplicateSection {
                prefix: "/a/".to_owned()
            })
        );
    }

    #[test]
    fn test_duplicate_locale_fails() {
        let site = SiteConfig {
            locales: vec![
                LocaleConfig::new("root", "English"),
                LocaleConfig::new("zh", "简体中文"),
                LocaleConfig::new("zh", "中文"),
            ],
            ..SiteConfig::default()
        };

        assert_eq!(
            site.validate(&ContentIndex::new()),
            Err(ValidationError::DuplicateLocale {
                code: "zh".to_owned()
            })
        );
    }

    #[test]
    fn test_missing_root_locale_fails() {
        let site = SiteConfig {
            locales: vec![LocaleConfig::new("zh", "简体中文")],
            ..SiteConfig::default()
        };

        assert_eq!(
            site.validate(&ContentIndex::new()),
            Err(ValidationError::MissingRootLocale {
                code: "root".to_owned()
            })
        );
    }

    #[test]
    fn test_invalid_outline_fails() {
        let mut site = SiteConfig::default();
        site.meta.outline = Outline { min: 3, max: 2 };

        let err = site.validate(&ContentIndex::new()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidOutline { min: 3, max: 2 });
        assert!(err.to_string().contains("[3, 2]"));
    }

    #[test]
    fn test_check_collects_all_problems_in_order() {
        let site = SiteConfig {
            locales: vec![LocaleConfig::new("zh", "简体中文")],
            nav: vec![NavLink::new("selenium", "...").into()],
            sidebar: vec![
                SidebarSection::new("/a/", Vec::new()),
                SidebarSection::new("/a/", Vec::new()),
            ],
            ..SiteConfig::default()
        };

        let errors = site.check(&content());

        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], ValidationError::MissingRootLocale { .. }));
        assert!(matches!(errors[1], ValidationError::DuplicateSection { .. }));
        assert!(matches!(errors[2], ValidationError::DanglingLink { .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::DanglingLink {
            location: "nav > Python".to_owned(),
            label: "doc".to_owned(),
            target: "/missing/page".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Dangling link in nav > Python: 'doc' points to missing page /missing/page"
        );
    }
}
