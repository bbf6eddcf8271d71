//! # Multimedium.dev
//!
//! Server-rendered marketing site for a web design practice, built with Axum
//! and Askama.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation throughout:
//!
//! - **Content** ([`content`]) - Site copy, case studies and pricing compiled into the binary
//! - **Domain Layer** ([`domain`]) - Posts, form payloads and the traits they flow through
//! - **Application Layer** ([`application`]) - Blog, contact and newsletter services
//! - **Infrastructure Layer** ([`infrastructure`]) - Filesystem posts and the log sink
//! - **SEO** ([`seo`]) - Page metadata, JSON-LD, sitemap and manifest
//! - **API Layer** ([`api`]) - JSON form endpoints, health check and middleware
//! - **Web Layer** ([`web`]) - HTML pages
//!
//! ## Features
//!
//! - Markdown blog with YAML front matter, categories and related posts
//! - Contact and newsletter forms with a honeypot, working with or without JavaScript
//! - Deterministic per-page gradient backgrounds
//! - Two branding variants selected at startup
//! - Rate limiting and structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! export CONTENT_DIR="content/blog"
//! export SITE_VARIANT="primary"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod content;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod seo;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the admin binary
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BlogService, ContactService, NewsletterService};
    pub use crate::domain::entities::{ContactInquiry, NewsletterOptIn, Post, PostSummary};
    pub use crate::domain::forms::{
        ContactForm, FormState, FormStatus, NewsletterForm, Submission, SubmissionOutcome,
    };
    pub use crate::domain::repositories::{PostRepository, SubmissionSink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
