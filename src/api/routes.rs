//! API route configuration.

use crate::api::handlers::{contact_handler, newsletter_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON form endpoints, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /contact`    - Contact form submission
/// - `POST /newsletter` - Newsletter signup
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact_handler))
        .route("/newsletter", post(newsletter_handler))
}
