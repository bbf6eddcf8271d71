//! JSON-LD structured data.

use serde_json::{Value, json};

use crate::content::SITE;
use crate::content::landing::ServiceOffer;
use crate::domain::entities::Post;
use crate::seo::metadata::absolute_asset_url;

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, Copy)]
pub struct Crumb<'a> {
    pub name: &'a str,
    pub path: &'a str,
}

impl<'a> Crumb<'a> {
    pub const fn new(name: &'a str, path: &'a str) -> Self {
        Self { name, path }
    }
}

pub const HOME: Crumb<'static> = Crumb::new("Home", "/");

/// `ProfessionalService` describing the business.
pub fn organization() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": SITE.name,
        "url": SITE.url,
        "telephone": SITE.phone_international,
        "areaServed": [
            { "@type": "AdministrativeArea", "name": "Northeastern Pennsylvania" },
            { "@type": "AdministrativeArea", "name": "United States" }
        ],
        "image": format!("{}/opengraph-image", SITE.url),
        "description": SITE.description,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": SITE.location.city,
            "addressRegion": SITE.location.region,
            "addressCountry": SITE.location.country
        },
        "sameAs": SITE.social.urls(),
        "founder": { "@type": "Person", "name": SITE.owner },
        "serviceType": SITE.focus_areas
    })
}

/// `BreadcrumbList` with positions starting at 1.
pub fn breadcrumb(items: &[Crumb<'_>]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": format!("{}{}", SITE.url, item.path)
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements
    })
}

pub fn article(post: &Post) -> Value {
    let fm = &post.front_matter;
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": fm.title,
        "description": fm.description,
        "datePublished": fm.date,
        "author": { "@type": "Person", "name": SITE.owner },
        "publisher": { "@type": "Organization", "name": SITE.name },
        "mainEntityOfPage": format!("{}/blog/{}", SITE.url, post.slug)
    });

    if let (Some(image), Some(map)) = (&fm.hero_image, schema.as_object_mut()) {
        map.insert(
            "image".to_string(),
            json!({ "@type": "ImageObject", "url": absolute_asset_url(image) }),
        );
    }

    schema
}

/// `Service` with an in-stock USD offer pointing at the pricing page.
pub fn service(offer: &ServiceOffer) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "name": offer.name,
        "description": offer.description,
        "provider": { "@type": "Organization", "name": SITE.name, "url": SITE.url },
        "areaServed": [SITE.location.region, SITE.location.country],
        "serviceType": offer.service_types,
        "offers": {
            "@type": "Offer",
            "priceCurrency": "USD",
            "availability": "https://schema.org/InStock",
            "url": format!("{}{}", SITE.url, offer.pricing_anchor)
        }
    })
}

/// Serializes a schema for embedding in a `<script type="application/ld+json">`.
///
/// `</` is escaped so the payload cannot close the script element.
pub fn to_script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}
