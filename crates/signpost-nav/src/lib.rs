//! Navigation model for Signpost documentation sites.
//!
//! This crate provides:
//! - [`SiteConfig`]: the immutable description of a site's navigation surface
//!   (top nav, sidebars by path prefix, locales, footer, search, social links)
//! - Sidebar resolution by longest path prefix ([`resolve_sidebar`])
//! - Locale selection and the locale switcher ([`resolve_locale`], [`switch_target`])
//! - Load-time validation against the content tree ([`SiteConfig::validate`])
//! - Per-page navigation bundles for renderers ([`SiteConfig::page_shell`])
//!
//! # Quick Start
//!
//! ```
//! use signpost_nav::{
//!     ContentIndex, NavLink, SidebarGroup, SidebarSection, SiteConfig,
//! };
//!
//! let site = SiteConfig {
//!     nav: vec![NavLink::new("Pytest", "/python/pytest/get_started").into()],
//!     sidebar: vec![SidebarSection::new(
//!         "/python/pytest/",
//!         vec![SidebarGroup::new(
//!             "Pytest",
//!             vec![NavLink::new("Get Started", "/python/pytest/get_started").into()],
//!         )],
//!     )],
//!     ..SiteConfig::default()
//! };
//!
//! let content: ContentIndex = ["/python/pytest/get_started"].into_iter().collect();
//! site.validate(&content)?;
//!
//! assert_eq!(site.sidebar_for("/python/pytest/get_started")[0].title, "Pytest");
//! assert!(site.sidebar_for("/golang/gin/").is_empty());
//! # Ok::<(), signpost_nav::ValidationError>(())
//! ```

mod content;
mod link;
mod locale;
mod nav;
mod shell;
mod sidebar;
mod site;
mod validate;

pub use content::ContentIndex;
pub use link::{ActiveMatch, LinkTarget, normalize_path};
pub use locale::{
    Labels, LocaleConfig, LocaleLink, LocaleSwitch, Localizer, ROOT_LOCALE, locale_links,
    resolve_locale, switch_target,
};
pub use nav::{NavItem, NavLink, NavMenu};
pub use shell::{LocaleSummary, PageShell, Pager, PagerLink};
pub use sidebar::{SidebarGroup, SidebarItem, SidebarSection, resolve_sidebar};
pub use site::{Footer, Outline, SearchProvider, SiteConfig, SiteMeta, SocialLink};
pub use validate::ValidationError;
