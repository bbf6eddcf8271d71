//! Validated submissions handed to a [`crate::domain::repositories::SubmissionSink`].

use serde::Serialize;

use crate::domain::forms::{ContactForm, NewsletterForm};

/// A project inquiry from the contact form. The honeypot field is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub website: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub goals: String,
}

impl From<ContactForm> for ContactInquiry {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            project_type: form.project_type,
            website: form.website,
            budget: form.budget,
            timeline: form.timeline,
            goals: form.goals,
        }
    }
}

/// A newsletter signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterOptIn {
    pub email: String,
    pub tag: Option<String>,
}

impl From<NewsletterForm> for NewsletterOptIn {
    fn from(form: NewsletterForm) -> Self {
        Self {
            email: form.email,
            tag: form.tag,
        }
    }
}
