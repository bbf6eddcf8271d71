//! Contact page and the HTML form submissions.
//!
//! These pages work without JavaScript: the forms post here and the page is
//! rendered again with the resulting [`FormState`]. `static/forms.js` upgrades
//! them to the JSON endpoints under `/api` when scripts are available.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Form, Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use super::layout::Layout;
use crate::content::contact::{
    BUDGETS, EXPECTATIONS, Expectation, PROJECT_TYPES, SelectOption, TIMELINES,
    preselected_project_type,
};
use crate::domain::forms::{ContactForm, FormState, NewsletterForm};
use crate::seo::PageMeta;
use crate::seo::schema::{Crumb, HOME};
use crate::state::AppState;
use crate::utils::visual::prism_background;

#[derive(Debug, Default, Deserialize)]
pub struct ContactQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// An `<option>` with its selected state resolved.
#[derive(Debug)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

fn choices(options: &'static [SelectOption], current: Option<&str>) -> Vec<Choice> {
    options
        .iter()
        .map(|o| Choice {
            value: o.value,
            label: o.label,
            selected: current == Some(o.value),
        })
        .collect()
}

/// Free-text values echoed back into the form after a failed submission.
#[derive(Debug, Default)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub website: String,
    pub goals: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub form: FormState,
    pub values: ContactValues,
    pub project_types: Vec<Choice>,
    pub budgets: Vec<Choice>,
    pub timelines: Vec<Choice>,
    pub expectations: &'static [Expectation],
    pub background: String,
}

impl ContactTemplate {
    fn new(
        form: FormState,
        values: ContactValues,
        project_type: Option<&str>,
        budget: Option<&str>,
        timeline: Option<&str>,
    ) -> Self {
        let meta = PageMeta::new(
            "Contact",
            "Tell us about your project. Expect a reply within one business day.",
            "/contact",
        );

        Self {
            layout: Layout::new(meta, &[HOME, Crumb::new("Contact", "/contact")]).without_cta(),
            form,
            values,
            project_types: choices(PROJECT_TYPES, project_type),
            budgets: choices(BUDGETS, budget),
            timelines: choices(TIMELINES, timeline),
            expectations: EXPECTATIONS,
            background: prism_background("contact"),
        }
    }
}

/// Renders the empty contact form.
///
/// # Endpoint
///
/// `GET /contact?type=hoa|smb`
///
/// `type` preselects the matching project type.
pub async fn contact_page_handler(Query(query): Query<ContactQuery>) -> impl IntoResponse {
    ContactTemplate::new(
        FormState::idle(),
        ContactValues::default(),
        preselected_project_type(query.kind.as_deref()),
        None,
        None,
    )
}

/// Handles a contact form post and renders the page again with the outcome.
///
/// # Endpoint
///
/// `POST /contact`
///
/// Successful submissions clear the form; failed ones keep what was typed.
pub async fn contact_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> impl IntoResponse {
    let submitted = form.clone();
    let result = state.contact_service.submit(form).await.state;

    if result.is_success() {
        return ContactTemplate::new(result, ContactValues::default(), None, None, None);
    }

    let values = ContactValues {
        name: submitted.name,
        email: submitted.email,
        website: submitted.website.unwrap_or_default(),
        goals: submitted.goals,
    };

    ContactTemplate::new(
        result,
        values,
        Some(&submitted.project_type),
        submitted.budget.as_deref(),
        submitted.timeline.as_deref(),
    )
}

#[derive(Template, WebTemplate)]
#[template(path = "newsletter_result.html")]
pub struct NewsletterResultTemplate {
    pub layout: Layout,
    pub form: FormState,
    pub background: String,
}

/// Handles a newsletter signup from an HTML form.
///
/// # Endpoint
///
/// `POST /newsletter`
pub async fn newsletter_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<NewsletterForm>,
) -> impl IntoResponse {
    let result = state.newsletter_service.subscribe(form).await.state;

    // The result page has no URL of its own; it belongs to the blog.
    let meta = PageMeta::new(
        "Newsletter",
        "Occasional notes on web design, SEO and automation.",
        "/blog",
    );

    NewsletterResultTemplate {
        layout: Layout::new(meta, &[HOME, Crumb::new("Notes", "/blog")]),
        form: result,
        background: prism_background("newsletter"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_marks_selected() {
        let selected: Vec<_> = choices(PROJECT_TYPES, Some("hoa-website"))
            .into_iter()
            .filter(|c| c.selected)
            .map(|c| c.value)
            .collect();
        assert_eq!(selected, vec!["hoa-website"]);

        assert!(choices(BUDGETS, None).iter().all(|c| !c.selected));
    }
}
