//! Form payloads, their validation rules, and the resulting form state.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationErrors};

/// Treats blank or whitespace-only optional inputs as absent.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Body of the contact form.
///
/// Every field defaults to empty so that missing inputs surface as
/// validation messages rather than extractor rejections.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 2, message = "Please enter your name."))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[validate(length(min = 2, message = "Select a project type."))]
    pub project_type: String,

    #[serde(deserialize_with = "blank_as_none")]
    #[validate(url(message = "Enter a valid URL (include https://)."))]
    pub website: Option<String>,

    #[serde(deserialize_with = "blank_as_none")]
    pub budget: Option<String>,

    #[serde(deserialize_with = "blank_as_none")]
    pub timeline: Option<String>,

    #[validate(length(min = 10, message = "Share a bit more about your goals."))]
    pub goals: String,

    /// Honeypot. Hidden from people, filled in by bots.
    pub company: String,
}

/// Body of the newsletter signup.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct NewsletterForm {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[serde(deserialize_with = "blank_as_none")]
    pub tag: Option<String>,

    /// Honeypot.
    pub company: String,
}

pub trait Honeypot {
    fn is_bot(&self) -> bool;
}

impl Honeypot for ContactForm {
    fn is_bot(&self) -> bool {
        !self.company.is_empty()
    }
}

impl Honeypot for NewsletterForm {
    fn is_bot(&self) -> bool {
        !self.company.is_empty()
    }
}

/// Collects one message per failing field.
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let message = errs.first()?.message.as_ref()?.to_string();
            Some((field.to_string(), message))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Which path a submission took through a form service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Delivered to the sink, or dropped by the honeypot.
    Accepted,
    /// At least one field failed validation.
    Invalid,
    /// Valid, but the sink could not take it.
    DeliveryFailed,
}

/// A [`FormState`] together with the [`SubmissionOutcome`] that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub outcome: SubmissionOutcome,
    pub state: FormState,
}

impl Submission {
    pub fn accepted(state: FormState) -> Self {
        Self { outcome: SubmissionOutcome::Accepted, state }
    }

    pub fn invalid(state: FormState) -> Self {
        Self { outcome: SubmissionOutcome::Invalid, state }
    }

    pub fn delivery_failed(state: FormState) -> Self {
        Self { outcome: SubmissionOutcome::DeliveryFailed, state }
    }
}

/// Outcome of a form submission, rendered back to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormState {
    pub status: FormStatus,
    pub message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

impl FormState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: FormStatus::Success,
            message: message.into(),
            errors: BTreeMap::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: FormStatus::Error,
            message: message.into(),
            errors: BTreeMap::new(),
        }
    }

    pub fn with_errors(mut self, errors: BTreeMap<String, String>) -> Self {
        self.errors = errors;
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == FormStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == FormStatus::Error
    }

    /// Message for `field`, if it failed validation.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}
