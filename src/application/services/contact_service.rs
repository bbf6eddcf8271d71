//! Contact form handling.

use std::sync::Arc;

use validator::Validate;

use crate::content::SITE;
use crate::domain::entities::ContactInquiry;
use crate::domain::forms::{ContactForm, FormState, Honeypot, Submission, field_errors};
use crate::domain::repositories::SubmissionSink;

pub const VALIDATION_FAILED: &str = "Please fix the highlighted fields.";

/// Turns contact form submissions into [`FormState`]s.
///
/// # Flow
///
/// 1. Validate every field; failures come back with one message per field
/// 2. Honeypot submissions are acknowledged but go nowhere
/// 3. Everything else is handed to the [`SubmissionSink`]
pub struct ContactService<S: SubmissionSink + ?Sized> {
    sink: Arc<S>,
}

impl<S: SubmissionSink + ?Sized> ContactService<S> {
    pub fn new(sink: Arc<S>) -> Self {
        Self { sink }
    }

    pub async fn submit(&self, form: ContactForm) -> Submission {
        if let Err(errors) = form.validate() {
            return Submission::invalid(
                FormState::error(VALIDATION_FAILED).with_errors(field_errors(&errors)),
            );
        }

        if form.is_bot() {
            tracing::info!("Contact honeypot tripped, dropping submission");
            return Submission::accepted(FormState::success(thank_you()));
        }

        let inquiry = ContactInquiry::from(form);
        match self.sink.deliver_inquiry(inquiry).await {
            Ok(()) => Submission::accepted(FormState::success(thank_you())),
            Err(e) => {
                tracing::error!(error = %e, "Contact form submission failed");
                Submission::delivery_failed(FormState::error(format!(
                    "We couldn't send your message. Please try again or call/text {}.",
                    SITE.phone
                )))
            }
        }
    }
}

fn thank_you() -> String {
    format!(
        "Thanks! {} will reach out within one business day.",
        SITE.owner
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forms::{FormStatus, SubmissionOutcome};
    use crate::domain::repositories::MockSubmissionSink;
    use crate::error::AppError;
    use serde_json::json;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            project_type: "hoa-website".into(),
            website: None,
            budget: Some("8k-plus".into()),
            timeline: Some("standard".into()),
            goals: "Residents cannot find the bylaws.".into(),
            company: String::new(),
        }
    }

    #[tokio::test]
    async fn test_submit_delivers_inquiry() {
        let mut mock_sink = MockSubmissionSink::new();
        mock_sink
            .expect_deliver_inquiry()
            .withf(|inquiry| inquiry.email == "jane@example.com" && inquiry.project_type == "hoa-website")
            .times(1)
            .returning(|_| Ok(()));

        let service = ContactService::new(Arc::new(mock_sink));
        let result = service.submit(valid_form()).await;
        assert_eq!(result.outcome, SubmissionOutcome::Accepted);

        let state = result.state;
        assert_eq!(state.status, FormStatus::Success);
        assert_eq!(
            state.message,
            "Thanks! Haydn will reach out within one business day."
        );
        assert!(state.errors.is_empty());
    }

    #[tokio::test]
    async fn test_submit_validation_errors() {
        let mut mock_sink = MockSubmissionSink::new();
        mock_sink.expect_deliver_inquiry().times(0);

        let service = ContactService::new(Arc::new(mock_sink));
        let result = service
            .submit(ContactForm {
                email: "nope".into(),
                goals: "short".into(),
                ..valid_form()
            })
            .await;
        assert_eq!(result.outcome, SubmissionOutcome::Invalid);

        let state = result.state;
        assert_eq!(state.status, FormStatus::Error);
        assert_eq!(state.message, VALIDATION_FAILED);
        assert_eq!(state.error_for("email"), Some("Enter a valid email address."));
        assert_eq!(
            state.error_for("goals"),
            Some("Share a bit more about your goals.")
        );
        assert_eq!(state.error_for("name"), None);
    }

    #[tokio::test]
    async fn test_honeypot_reports_success_without_delivery() {
        let mut mock_sink = MockSubmissionSink::new();
        mock_sink.expect_deliver_inquiry().times(0);

        let service = ContactService::new(Arc::new(mock_sink));
        let state = service
            .submit(ContactForm {
                company: "Spam LLC".into(),
                ..valid_form()
            })
            .await
            .state;

        assert!(state.is_success());
        assert_eq!(
            state.message,
            "Thanks! Haydn will reach out within one business day."
        );
    }

    #[tokio::test]
    async fn test_honeypot_with_invalid_fields_is_validation_error() {
        let mut mock_sink = MockSubmissionSink::new();
        mock_sink.expect_deliver_inquiry().times(0);

        let service = ContactService::new(Arc::new(mock_sink));
        let result = service
            .submit(ContactForm {
                name: String::new(),
                company: "Spam LLC".into(),
                ..valid_form()
            })
            .await;

        assert_eq!(result.outcome, SubmissionOutcome::Invalid);
        assert!(result.state.is_error());
    }

    #[tokio::test]
    async fn test_sink_failure_reports_phone() {
        let mut mock_sink = MockSubmissionSink::new();
        mock_sink
            .expect_deliver_inquiry()
            .times(1)
            .returning(|_| Err(AppError::internal("mail down", json!({}))));

        let service = ContactService::new(Arc::new(mock_sink));
        let result = service.submit(valid_form()).await;
        assert_eq!(result.outcome, SubmissionOutcome::DeliveryFailed);

        let state = result.state;
        assert!(state.is_error());
        assert_eq!(
            state.message,
            "We couldn't send your message. Please try again or call/text 570-994-6186."
        );
    }
}
