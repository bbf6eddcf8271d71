//! Shared page chrome: head metadata, navigation, JSON-LD, CTA banner, footer.

use chrono::Datelike;
use serde_json::Value;

use crate::content::{SITE, SiteConfig};
use crate::seo::schema::{self, Crumb};
use crate::seo::PageMeta;
use crate::utils::visual::prism_background;

/// A header navigation link with its active state resolved.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Data every page template extends `base.html` with.
#[derive(Debug, Clone)]
pub struct Layout {
    pub meta: PageMeta,
    pub site: &'static SiteConfig,
    pub nav: Vec<NavLink>,
    pub year: i32,
    /// JSON-LD documents, already escaped for embedding.
    pub schemas: Vec<String>,
    pub show_cta: bool,
    pub cta_background: String,
    pub keywords: String,
    pub social: Vec<&'static str>,
    pub manifest_path: &'static str,
}

impl Layout {
    /// Layout for `meta` with organization and breadcrumb JSON-LD.
    pub fn new(meta: PageMeta, crumbs: &[Crumb<'_>]) -> Self {
        let current = crumbs.last().map(|c| c.path).unwrap_or("/");
        let nav = SITE
            .nav_items
            .iter()
            .map(|item| NavLink {
                label: item.label,
                href: item.href,
                active: current == item.href || current.starts_with(&format!("{}/", item.href)),
            })
            .collect();

        let mut schemas = vec![schema::to_script_json(&schema::organization())];
        if crumbs.len() > 1 {
            schemas.push(schema::to_script_json(&schema::breadcrumb(crumbs)));
        }

        Self {
            meta,
            site: &SITE,
            nav,
            year: chrono::Utc::now().year(),
            schemas,
            show_cta: true,
            cta_background: prism_background("cta"),
            keywords: SITE.keywords(),
            social: SITE.social.urls(),
            manifest_path: "/manifest.webmanifest",
        }
    }

    pub fn with_schema(mut self, value: &Value) -> Self {
        self.schemas.push(schema::to_script_json(value));
        self
    }

    pub fn without_cta(mut self) -> Self {
        self.show_cta = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::schema::HOME;

    #[test]
    fn test_nav_marks_section_active() {
        let meta = PageMeta::new("Post", "d", "/blog/speed");
        let layout = Layout::new(
            meta,
            &[HOME, Crumb::new("Notes", "/blog"), Crumb::new("Speed", "/blog/speed")],
        );

        let active: Vec<_> = layout.nav.iter().filter(|n| n.active).map(|n| n.label).collect();
        assert_eq!(active, vec!["Notes"]);
    }

    #[test]
    fn test_schemas_include_breadcrumb_for_subpages() {
        let home = Layout::new(PageMeta::new("Home", "d", "/"), &[HOME]);
        assert_eq!(home.schemas.len(), 1);

        let about = Layout::new(
            PageMeta::new("About", "d", "/about"),
            &[HOME, Crumb::new("About", "/about")],
        );
        assert_eq!(about.schemas.len(), 2);
        assert!(about.schemas[1].contains("BreadcrumbList"));
    }
}
