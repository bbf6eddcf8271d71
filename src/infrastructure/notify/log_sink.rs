//! Submission sink that records submissions in the application log.

use async_trait::async_trait;
use tracing::info;

use crate::domain::entities::{ContactInquiry, NewsletterOptIn};
use crate::domain::repositories::SubmissionSink;
use crate::error::AppError;

/// Writes one structured `tracing` event per submission.
///
/// Stands in for a mail or CRM integration; nothing is stored.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionSink for LogSink {
    async fn deliver_inquiry(&self, inquiry: ContactInquiry) -> Result<(), AppError> {
        info!(
            target: "submissions",
            kind = "contact",
            name = %inquiry.name,
            email = %inquiry.email,
            project_type = %inquiry.project_type,
            website = inquiry.website.as_deref().unwrap_or("-"),
            budget = inquiry.budget.as_deref().unwrap_or("-"),
            timeline = inquiry.timeline.as_deref().unwrap_or("-"),
            goals = %inquiry.goals,
            "New inquiry received"
        );
        Ok(())
    }

    async fn deliver_opt_in(&self, opt_in: NewsletterOptIn) -> Result<(), AppError> {
        info!(
            target: "submissions",
            kind = "newsletter",
            email = %opt_in.email,
            tag = opt_in.tag.as_deref().unwrap_or("-"),
            "Newsletter opt-in"
        );
        Ok(())
    }
}
