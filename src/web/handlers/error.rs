//! HTML error pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use super::layout::Layout;
use crate::error::AppError;
use crate::seo::PageMeta;
use crate::seo::schema::HOME;

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub layout: Layout,
    pub status: u16,
    pub heading: &'static str,
    pub message: String,
}

/// [`AppError`] rendered as an HTML page instead of JSON.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl PageError {
    pub fn not_found(what: &str, path: &str) -> Self {
        Self(AppError::not_found(
            format!("{} not found", what),
            json!({ "path": path }),
        ))
    }
}

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();

        let (heading, message) = match &self.0 {
            AppError::NotFound { .. } => (
                "Page not found",
                "The page you're looking for moved or never existed.".to_string(),
            ),
            AppError::Validation { message, .. } => ("Something's off", message.clone()),
            AppError::Internal { .. } => {
                tracing::error!(error = %self.0, "Page failed to render");
                (
                    "Something went wrong",
                    "We hit a snag loading this page. Please try again shortly.".to_string(),
                )
            }
        };

        let meta = PageMeta::new(heading, message.clone(), "/");
        let template = ErrorTemplate {
            layout: Layout::new(meta, &[HOME]).without_cta(),
            status: status.as_u16(),
            heading,
            message,
        };

        (status, template).into_response()
    }
}

/// Fallback for unknown paths.
pub async fn not_found_handler() -> PageError {
    PageError(AppError::not_found("Page not found", json!({})))
}
