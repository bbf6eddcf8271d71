//! Machine-readable documents: sitemap, robots.txt and the web manifest.

use axum::{Json, extract::State, http::header, response::IntoResponse};

use super::error::PageError;
use crate::seo::sitemap;
use crate::state::AppState;

/// `GET /sitemap.xml`
///
/// # Errors
///
/// Renders a 500 page if the blog posts cannot be listed.
pub async fn sitemap_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PageError> {
    let posts = state.blog_service.list_posts().await?;
    let today = chrono::Utc::now().date_naive();
    let xml = sitemap::render_sitemap(&sitemap::sitemap_entries(&posts, today));

    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml))
}

/// `GET /robots.txt`
pub async fn robots_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        sitemap::robots_txt(),
    )
}

/// `GET /manifest.webmanifest`
pub async fn manifest_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        Json(sitemap::manifest()),
    )
}
