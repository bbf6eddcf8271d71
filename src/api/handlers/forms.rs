//! JSON endpoints for the contact form and newsletter signup.
//!
//! Both accept the same form-encoded bodies as the HTML forms, so the
//! progressive-enhancement script can post the form as-is and render the
//! returned [`FormState`] in place.

use axum::{Form, Json, extract::State, extract::rejection::FormRejection, http::StatusCode};

use crate::domain::forms::{ContactForm, FormState, NewsletterForm, Submission, SubmissionOutcome};
use crate::state::AppState;

/// Shown when the request body could not be read as a form.
pub const UNREADABLE_SUBMISSION: &str = "Something went wrong. Please try again.";

/// Submits the contact form.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Response Codes
///
/// - **200 OK**: Inquiry delivered (or silently dropped by the honeypot)
/// - **400 Bad Request**: Body is not a form-encoded submission
/// - **422 Unprocessable Entity**: One or more fields failed validation
/// - **500 Internal Server Error**: Delivery failed
///
/// # Response
///
/// ```json
/// {
///   "status": "error",
///   "message": "Please fix the highlighted fields.",
///   "errors": { "email": "Enter a valid email address." }
/// }
/// ```
pub async fn contact_handler(
    State(state): State<AppState>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> (StatusCode, Json<FormState>) {
    match form {
        Ok(Form(form)) => respond(state.contact_service.submit(form).await),
        Err(rejection) => rejected(rejection),
    }
}

/// Subscribes an address to the newsletter.
///
/// # Endpoint
///
/// `POST /api/newsletter`
///
/// Same response codes as [`contact_handler`]. Validation failures carry a
/// single message and no per-field errors.
pub async fn newsletter_handler(
    State(state): State<AppState>,
    form: Result<Form<NewsletterForm>, FormRejection>,
) -> (StatusCode, Json<FormState>) {
    match form {
        Ok(Form(form)) => respond(state.newsletter_service.subscribe(form).await),
        Err(rejection) => rejected(rejection),
    }
}

fn respond(submission: Submission) -> (StatusCode, Json<FormState>) {
    (status_for(submission.outcome), Json(submission.state))
}

fn rejected(rejection: FormRejection) -> (StatusCode, Json<FormState>) {
    tracing::warn!(error = %rejection, "Rejected form body");
    (
        StatusCode::BAD_REQUEST,
        Json(FormState::error(UNREADABLE_SUBMISSION)),
    )
}

fn status_for(outcome: SubmissionOutcome) -> StatusCode {
    match outcome {
        SubmissionOutcome::Accepted => StatusCode::OK,
        SubmissionOutcome::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionOutcome::DeliveryFailed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for() {
        assert_eq!(status_for(SubmissionOutcome::Accepted), StatusCode::OK);
        assert_eq!(
            status_for(SubmissionOutcome::Invalid),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(SubmissionOutcome::DeliveryFailed),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
