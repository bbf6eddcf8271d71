#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use multimedium_site::api;
use multimedium_site::config::SiteVariant;
use multimedium_site::domain::entities::{ContactInquiry, NewsletterOptIn};
use multimedium_site::domain::repositories::{PostRepository, SubmissionSink};
use multimedium_site::error::AppError;
use multimedium_site::infrastructure::content::FsPostRepository;
use multimedium_site::routes::site_routes;
use multimedium_site::state::AppState;
use multimedium_site::web;
use serde_json::json;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Sink that keeps every submission in memory.
#[derive(Default)]
pub struct RecordingSink {
    pub inquiries: Mutex<Vec<ContactInquiry>>,
    pub opt_ins: Mutex<Vec<NewsletterOptIn>>,
}

impl RecordingSink {
    pub fn inquiries(&self) -> Vec<ContactInquiry> {
        self.inquiries.lock().unwrap().clone()
    }

    pub fn opt_ins(&self) -> Vec<NewsletterOptIn> {
        self.opt_ins.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn deliver_inquiry(&self, inquiry: ContactInquiry) -> Result<(), AppError> {
        self.inquiries.lock().unwrap().push(inquiry);
        Ok(())
    }

    async fn deliver_opt_in(&self, opt_in: NewsletterOptIn) -> Result<(), AppError> {
        self.opt_ins.lock().unwrap().push(opt_in);
        Ok(())
    }
}

/// Sink whose every delivery fails.
pub struct FailingSink;

#[async_trait]
impl SubmissionSink for FailingSink {
    async fn deliver_inquiry(&self, _inquiry: ContactInquiry) -> Result<(), AppError> {
        Err(AppError::internal("mail relay down", json!({})))
    }

    async fn deliver_opt_in(&self, _opt_in: NewsletterOptIn) -> Result<(), AppError> {
        Err(AppError::internal("mail relay down", json!({})))
    }
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/blog")
}

pub fn create_test_state_with(
    content_dir: PathBuf,
    sink: Arc<dyn SubmissionSink>,
    variant: SiteVariant,
) -> AppState {
    let posts: Arc<dyn PostRepository> = Arc::new(FsPostRepository::new(content_dir));
    AppState::new(posts, sink, variant)
}

pub fn create_test_state(sink: Arc<dyn SubmissionSink>) -> AppState {
    create_test_state_with(fixtures_dir(), sink, SiteVariant::Primary)
}

/// Full site without rate limiting, which needs a peer address.
pub fn create_test_server(state: AppState) -> TestServer {
    let app = site_routes(web::routes::form_routes(), api::routes::routes()).with_state(state);
    TestServer::new(app).unwrap()
}

pub fn valid_contact() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("project_type", "hoa-website"),
        ("website", ""),
        ("budget", "3k-8k"),
        ("timeline", "standard"),
        ("goals", "Residents cannot find the bylaws or the pool schedule."),
        ("company", ""),
    ]
}
