//! Application layer services implementing the site's behaviour.
//!
//! Services consume the domain traits and give HTTP handlers a small API.
//!
//! # Available Services
//!
//! - [`services::blog_service::BlogService`] - Post listing, rendering, categories
//! - [`services::contact_service::ContactService`] - Contact form submissions
//! - [`services::newsletter_service::NewsletterService`] - Newsletter signups

pub mod services;
