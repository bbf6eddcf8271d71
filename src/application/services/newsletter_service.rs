//! Newsletter signups.

use std::sync::Arc;

use validator::Validate;

use crate::content::SITE;
use crate::domain::entities::NewsletterOptIn;
use crate::domain::forms::{FormState, Honeypot, NewsletterForm, Submission, field_errors};
use crate::domain::repositories::SubmissionSink;

const CONFIRMATION: &str = "Thanks! Check your inbox for a confirmation email.";
const FALLBACK_INVALID: &str = "Please use a valid email.";

pub struct NewsletterService<S: SubmissionSink + ?Sized> {
    sink: Arc<S>,
}

impl<S: SubmissionSink + ?Sized> NewsletterService<S> {
    pub fn new(sink: Arc<S>) -> Self {
        Self { sink }
    }

    /// Validates the signup and records the opt-in.
    ///
    /// Validation failures report only the first message. Honeypot signups
    /// are acknowledged without being recorded.
    pub async fn subscribe(&self, form: NewsletterForm) -> Submission {
        if let Err(errors) = form.validate() {
            let message = field_errors(&errors)
                .into_values()
                .next()
                .unwrap_or_else(|| FALLBACK_INVALID.to_string());
            return Submission::invalid(FormState::error(message));
        }

        if form.is_bot() {
            tracing::info!("Newsletter honeypot tripped, dropping signup");
            return Submission::accepted(FormState::success(CONFIRMATION));
        }

        match self.sink.deliver_opt_in(NewsletterOptIn::from(form)).await {
            Ok(()) => Submission::accepted(FormState::success(CONFIRMATION)),
            Err(e) => {
                tracing::error!(error = %e, "Newsletter subscription failed");
                Submission::delivery_failed(FormState::error(format!(
                    "We couldn't add you right now. Try again or email {}.",
                    SITE.email
                )))
            }
        }
    }
}
