//! HTTP server initialization and runtime setup.
//!
//! Wires the content repository and submission sink into the services and
//! runs Axum until Ctrl+C or SIGTERM.

use crate::config::Config;
use crate::domain::repositories::{PostRepository, SubmissionSink};
use crate::infrastructure::content::FsPostRepository;
use crate::infrastructure::notify::LogSink;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// A missing content directory is logged but not fatal: pages still render
/// and `/health` reports the problem.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address does not parse
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let posts = FsPostRepository::new(&config.content_dir);
    if posts.dir().is_dir() {
        tracing::info!("Serving posts from {}", posts.dir().display());
    } else {
        tracing::warn!(
            "Content directory {} does not exist, blog will be empty",
            posts.dir().display()
        );
    }

    let posts: Arc<dyn PostRepository> = Arc::new(posts);
    let sink: Arc<dyn SubmissionSink> = Arc::new(LogSink::new());
    let state = AppState::new(posts, sink, config.variant);

    let app = app_router(state, &config.static_dir, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
