//! Utility functions shared across the site.
//!
//! - [`front_matter`] - Splitting YAML front matter from markdown
//! - [`markdown`] - Markdown to HTML with linked headings
//! - [`text`] - Slugs, reading time, date formatting
//! - [`visual`] - Deterministic gradient backgrounds

pub mod front_matter;
pub mod markdown;
pub mod text;
pub mod visual;
