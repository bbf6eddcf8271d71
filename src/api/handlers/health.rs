//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Blog content directory is readable
/// - **503 Service Unavailable**: Content directory is missing or unreadable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "content": {
///       "status": "ok",
///       "message": "Blog content readable"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let content_check = check_content(&state).await;
    let healthy = content_check.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            content: content_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_content(state: &AppState) -> CheckStatus {
    match state.blog_service.health_check().await {
        Ok(()) => CheckStatus::ok("Blog content readable"),
        Err(e) => {
            tracing::warn!(error = %e, "Content health check failed");
            CheckStatus::error(format!("Content error: {}", e))
        }
    }
}
