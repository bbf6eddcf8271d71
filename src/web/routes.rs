//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    about_handler, blog_index_handler, blog_post_handler, case_study_handler,
    contact_page_handler, contact_submit_handler, hoa_handler, home_handler, manifest_handler,
    newsletter_submit_handler, pricing_handler, privacy_handler, robots_handler,
    services_handler, sitemap_handler, small_business_handler, terms_handler, work_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only pages and SEO documents.
///
/// # Endpoints
///
/// - `GET /`, `/about`, `/services`, `/pricing` - Marketing pages
/// - `GET /work`, `/work/{slug}` - Case studies
/// - `GET /blog`, `/blog/{slug}` - Notes
/// - `GET /contact` - Contact form
/// - `GET /legal/privacy`, `/legal/terms` - Legal documents
/// - `GET /hoa`, `/small-business` - Audience landing pages
/// - `GET /sitemap.xml`, `/robots.txt`, `/manifest.webmanifest`
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/about", get(about_handler))
        .route("/services", get(services_handler))
        .route("/pricing", get(pricing_handler))
        .route("/work", get(work_handler))
        .route("/work/{slug}", get(case_study_handler))
        .route("/blog", get(blog_index_handler))
        .route("/blog/{slug}", get(blog_post_handler))
        .route("/contact", get(contact_page_handler))
        .route("/legal/privacy", get(privacy_handler))
        .route("/legal/terms", get(terms_handler))
        .route("/hoa", get(hoa_handler))
        .route("/small-business", get(small_business_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/robots.txt", get(robots_handler))
        .route("/manifest.webmanifest", get(manifest_handler))
}

/// HTML form submissions. Kept apart from [`page_routes`] so they can be
/// rate limited on their own.
///
/// # Endpoints
///
/// - `POST /contact` - Contact form, re-renders the contact page
/// - `POST /newsletter` - Newsletter signup, renders the result page
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact_submit_handler))
        .route("/newsletter", post(newsletter_submit_handler))
}
