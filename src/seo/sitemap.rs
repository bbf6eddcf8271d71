//! XML sitemap, robots.txt and web app manifest.

use chrono::NaiveDate;
use serde::Serialize;

use crate::content::{CASE_STUDIES, SITE};
use crate::domain::entities::PostSummary;
use crate::utils::text::parse_date;

/// Routes listed in the sitemap with the generation date.
pub const STATIC_ROUTES: &[&str] = &[
    "",
    "/services",
    "/pricing",
    "/work",
    "/about",
    "/blog",
    "/contact",
    "/legal/privacy",
    "/legal/terms",
    "/hoa",
    "/small-business",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: Option<NaiveDate>,
}

/// Static routes, case studies, then posts.
///
/// Posts carry their own publication date; one that does not parse is
/// listed without `lastmod`.
pub fn sitemap_entries(posts: &[PostSummary], today: NaiveDate) -> Vec<SitemapEntry> {
    let static_pages = STATIC_ROUTES
        .iter()
        .map(|route| format!("{}{}", SITE.url, route))
        .chain(CASE_STUDIES.iter().map(|study| format!("{}{}", SITE.url, study.path())))
        .map(|url| SitemapEntry {
            url,
            last_modified: Some(today),
        });

    let post_pages = posts.iter().map(|post| SitemapEntry {
        url: format!("{}{}", SITE.url, post.path()),
        last_modified: parse_date(&post.front_matter.date),
    });

    static_pages.chain(post_pages).collect()
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.url)));
        if let Some(date) = entry.last_modified {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", date.format("%Y-%m-%d")));
        }
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn robots_txt() -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n", SITE.url)
}

#[derive(Debug, Serialize)]
pub struct ManifestIcon {
    pub src: &'static str,
    #[serde(rename = "type")]
    pub mime: &'static str,
    pub sizes: &'static str,
}

/// Web app manifest served at `/manifest.webmanifest`.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub start_url: &'static str,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub icons: Vec<ManifestIcon>,
}

pub fn manifest() -> Manifest {
    Manifest {
        name: SITE.name,
        short_name: SITE.short_name,
        description: SITE.description,
        start_url: "/",
        display: "standalone",
        background_color: "#0f172a",
        theme_color: "#2563eb",
        icons: vec![ManifestIcon {
            src: "/static/favicon.svg",
            mime: "image/svg+xml",
            sizes: "any",
        }],
    }
}
