//! Destination for validated form submissions.

use crate::domain::entities::{ContactInquiry, NewsletterOptIn};
use crate::error::AppError;
use async_trait::async_trait;

/// Receives submissions that passed validation and the honeypot check.
///
/// # Implementations
///
/// - [`crate::infrastructure::notify::LogSink`] - Writes a structured log event
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the inquiry could not be delivered.
    async fn deliver_inquiry(&self, inquiry: ContactInquiry) -> Result<(), AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the opt-in could not be recorded.
    async fn deliver_opt_in(&self, opt_in: NewsletterOptIn) -> Result<(), AppError>;
}
