//! Case study list and detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Path, response::IntoResponse};

use super::error::PageError;
use super::layout::Layout;
use crate::content::{CASE_STUDIES, CaseStudy, find_case_study};
use crate::seo::PageMeta;
use crate::seo::schema::{Crumb, HOME};
use crate::utils::visual::prism_background;

#[derive(Template, WebTemplate)]
#[template(path = "work.html")]
pub struct WorkTemplate {
    pub layout: Layout,
    pub studies: &'static [CaseStudy],
    pub background: String,
}

/// `GET /work`
pub async fn work_handler() -> impl IntoResponse {
    let meta = PageMeta::new(
        "Work",
        "Case studies from small businesses and community organizations that wanted a site that earns trust and inquiries.",
        "/work",
    );

    WorkTemplate {
        layout: Layout::new(meta, &[HOME, Crumb::new("Work", "/work")]),
        studies: CASE_STUDIES,
        background: prism_background("work"),
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "case_study.html")]
pub struct CaseStudyTemplate {
    pub layout: Layout,
    pub study: &'static CaseStudy,
    pub background: String,
}

/// Renders a single case study.
///
/// # Endpoint
///
/// `GET /work/{slug}`
///
/// # Errors
///
/// Unknown slugs render the 404 page.
pub async fn case_study_handler(
    Path(slug): Path<String>,
) -> Result<CaseStudyTemplate, PageError> {
    let study = find_case_study(&slug)
        .ok_or_else(|| PageError::not_found("Case study", &format!("/work/{slug}")))?;

    let path = study.path();
    let meta = PageMeta::new(study.title, study.summary, &path);
    let layout = Layout::new(
        meta,
        &[HOME, Crumb::new("Work", "/work"), Crumb::new(study.title, &path)],
    );

    Ok(CaseStudyTemplate {
        layout,
        study,
        background: prism_background(study.slug),
    })
}
