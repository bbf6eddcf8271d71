//! Per-page metadata: titles, canonical URLs, Open Graph and Twitter tags.

use crate::content::SITE;

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

/// Everything the layout needs to render `<head>` tags for a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub og_type: &'static str,
    pub image: String,
    pub image_alt: String,
    pub published_time: Option<String>,
    pub twitter_card: &'static str,
}

impl PageMeta {
    /// Builds metadata for `path`.
    ///
    /// The title is suffixed with ` | <site name>` unless it already mentions
    /// the site.
    pub fn new(title: &str, description: impl Into<String>, path: &str) -> Self {
        let title = branded_title(title);

        Self {
            image_alt: title.clone(),
            title,
            description: description.into(),
            canonical: SITE.absolute_url(path),
            og_type: "website",
            image: format!("{}/opengraph-image", SITE.url),
            published_time: None,
            twitter_card: "summary_large_image",
        }
    }

    /// Marks the page as an article published on `published`.
    pub fn article(mut self, published: impl Into<String>) -> Self {
        self.og_type = "article";
        self.published_time = Some(published.into());
        self
    }

    /// Replaces the default share image. Site-relative paths are made absolute.
    pub fn with_image(mut self, image: &str) -> Self {
        self.image = absolute_asset_url(image);
        self
    }

    pub fn image_width(&self) -> u32 {
        OG_IMAGE_WIDTH
    }

    pub fn image_height(&self) -> u32 {
        OG_IMAGE_HEIGHT
    }
}

/// Prefixes site-relative asset paths with the site URL; absolute URLs pass through.
pub fn absolute_asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", SITE.url, path)
    }
}

pub fn branded_title(title: &str) -> String {
    let title = title.trim();
    if title.contains(SITE.name) {
        title.to_string()
    } else {
        format!("{} | {}", title, SITE.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_branded_once() {
        let meta = PageMeta::new("Pricing", "d", "/pricing");
        assert_eq!(meta.title, "Pricing | Multimedium.dev");
        assert_eq!(meta.image_alt, "Pricing | Multimedium.dev");

        let meta = PageMeta::new("Multimedium.dev", "d", "/");
        assert_eq!(meta.title, "Multimedium.dev");
    }

    #[test]
    fn test_canonical_url() {
        assert_eq!(PageMeta::new("Home", "d", "/").canonical, "https://multimedium.dev");
        assert_eq!(
            PageMeta::new("Work", "d", "/work").canonical,
            "https://multimedium.dev/work"
        );
    }

    #[test]
    fn test_defaults() {
        let meta = PageMeta::new("About", "d", "/about");
        assert_eq!(meta.og_type, "website");
        assert_eq!(meta.image, "https://multimedium.dev/opengraph-image");
        assert_eq!(meta.twitter_card, "summary_large_image");
        assert_eq!(meta.published_time, None);
        assert_eq!((meta.image_width(), meta.image_height()), (1200, 630));
    }

    #[test]
    fn test_article_with_image() {
        let meta = PageMeta::new("Speed", "d", "/blog/speed")
            .article("2024-02-10")
            .with_image("/images/speed.png");
        assert_eq!(meta.og_type, "article");
        assert_eq!(meta.published_time.as_deref(), Some("2024-02-10"));
        assert_eq!(meta.image, "https://multimedium.dev/images/speed.png");
    }
}
