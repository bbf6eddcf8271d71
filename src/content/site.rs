//! Site-wide identity, contact details, and navigation.

use crate::config::SiteVariant;

/// A navigation link.
#[derive(Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug)]
pub struct Location {
    pub city: &'static str,
    pub region: &'static str,
    pub country: &'static str,
}

#[derive(Debug)]
pub struct SocialProfiles {
    pub linkedin: &'static str,
    pub github: &'static str,
    pub behance: &'static str,
    pub dribbble: &'static str,
}

impl SocialProfiles {
    /// Non-empty profile URLs, in display order.
    pub fn urls(&self) -> Vec<&'static str> {
        [self.linkedin, self.github, self.behance, self.dribbble]
            .into_iter()
            .filter(|url| !url.is_empty())
            .collect()
    }
}

/// Headline pair shown at the top of the home page.
#[derive(Debug)]
pub struct Hero {
    pub headline: &'static str,
    pub subheadline: &'static str,
}

#[derive(Debug)]
pub struct SiteConfig {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub locale: &'static str,
    pub owner: &'static str,
    pub phone: &'static str,
    pub phone_international: &'static str,
    pub email: &'static str,
    pub calendar: Option<&'static str>,
    pub location: Location,
    pub focus_areas: &'static [&'static str],
    pub base_keywords: &'static [&'static str],
    pub nav_items: &'static [NavItem],
    pub social: SocialProfiles,
    pub hero: Hero,
    pub hero_alt: Hero,
}

impl SiteConfig {
    /// Hero copy for the given branding variant.
    pub fn hero_for(&self, variant: SiteVariant) -> &Hero {
        match variant {
            SiteVariant::Primary => &self.hero,
            SiteVariant::Alt => &self.hero_alt,
        }
    }

    /// Absolute URL for a site path. `/` maps to the bare site URL.
    pub fn absolute_url(&self, path: &str) -> String {
        if path == "/" || path.is_empty() {
            self.url.to_string()
        } else {
            format!("{}{}", self.url, path)
        }
    }

    pub fn keywords(&self) -> String {
        self.base_keywords.join(", ")
    }
}

pub static SITE: SiteConfig = SiteConfig {
    name: "Multimedium.dev",
    short_name: "Multimedium",
    description: "Conversion-first web design and development for teams that want to look premium, load fast, and turn attention into inquiries. Based in the Poconos — available remote.",
    url: "https://multimedium.dev",
    locale: "en_US",
    owner: "Haydn",
    phone: "570-994-6186",
    phone_international: "+15709946186",
    email: "haydn@multimedium.dev",
    calendar: None,
    location: Location {
        city: "Poconos",
        region: "Pennsylvania",
        country: "United States",
    },
    focus_areas: &[
        "Web design",
        "Web development",
        "Conversion strategy",
        "Marketing & SEO",
        "Automation & portals",
    ],
    base_keywords: &[
        "web design poconos",
        "web development nepa",
        "conversion focused web design",
        "next.js agency",
        "marketing automation",
        "seo consultant",
        "professional web design",
        "business website design",
        "website redesign",
        "ai chatbot integration",
        "multimedium.dev",
    ],
    nav_items: &[
        NavItem { label: "Work", href: "/work" },
        NavItem { label: "Services", href: "/services" },
        NavItem { label: "Pricing", href: "/pricing" },
        NavItem { label: "About", href: "/about" },
        NavItem { label: "Notes", href: "/blog" },
    ],
    social: SocialProfiles {
        linkedin: "https://www.linkedin.com/in/haydnm",
        github: "https://github.com/MultimediumDev",
        behance: "https://www.behance.net/multimedium",
        dribbble: "https://dribbble.com/multimedium",
    },
    hero: Hero {
        headline: "Websites That Look Premium and Convert",
        subheadline: "Strategy-led design and clean Next.js builds that ship fast, load fast, and make contacting you feel inevitable.",
    },
    hero_alt: Hero {
        headline: "Make Your Business Look Established",
        subheadline: "High-converting websites designed to capture leads and build trust-whether you're a team of 3 or 30.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url() {
        assert_eq!(SITE.absolute_url("/"), "https://multimedium.dev");
        assert_eq!(SITE.absolute_url("/work"), "https://multimedium.dev/work");
    }

    #[test]
    fn test_hero_for_variant() {
        assert_eq!(
            SITE.hero_for(SiteVariant::Primary).headline,
            "Websites That Look Premium and Convert"
        );
        assert_eq!(
            SITE.hero_for(SiteVariant::Alt).headline,
            "Make Your Business Look Established"
        );
    }

    #[test]
    fn test_social_urls_skip_empty() {
        assert_eq!(SITE.social.urls().len(), 4);
    }
}
