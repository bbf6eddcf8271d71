//! Static site content compiled into the binary.
//!
//! Everything here is immutable and lives for the life of the process. Blog
//! posts are the only content read from disk; see [`crate::application::services::BlogService`].

pub mod about;
pub mod case_studies;
pub mod contact;
pub mod home;
pub mod landing;
pub mod legal;
pub mod pricing;
pub mod services;
pub mod site;

pub use case_studies::{CASE_STUDIES, CaseStudy, find_case_study};
pub use site::{SITE, SiteConfig};

/// A labelled link used by calls to action.
#[derive(Debug)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}
