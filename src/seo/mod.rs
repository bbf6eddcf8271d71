//! Search engine and sharing metadata.
//!
//! - [`metadata`] - Page titles, canonical URLs, Open Graph tags
//! - [`schema`] - JSON-LD builders
//! - [`sitemap`] - `sitemap.xml`, `robots.txt`, web manifest

pub mod metadata;
pub mod schema;
pub mod sitemap;

pub use metadata::PageMeta;
pub use schema::Crumb;
