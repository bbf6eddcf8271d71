//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{BlogService, ContactService, NewsletterService};
use crate::config::SiteVariant;
use crate::domain::repositories::{PostRepository, SubmissionSink};

/// Immutable after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<BlogService<dyn PostRepository>>,
    pub contact_service: Arc<ContactService<dyn SubmissionSink>>,
    pub newsletter_service: Arc<NewsletterService<dyn SubmissionSink>>,
    pub variant: SiteVariant,
}

impl AppState {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        sink: Arc<dyn SubmissionSink>,
        variant: SiteVariant,
    ) -> Self {
        Self {
            blog_service: Arc::new(BlogService::new(posts)),
            contact_service: Arc::new(ContactService::new(sink.clone())),
            newsletter_service: Arc::new(NewsletterService::new(sink)),
            variant,
        }
    }
}
