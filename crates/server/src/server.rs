//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration mapping every path to the review handlers
//! - Middleware stack (request IDs, logging, timeout, body limit)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::error::handle_middleware_error;
use crate::middleware::{log_requests, request_id};
use crate::routes::{method_not_allowed, query, submit};
use crate::state::ServerState;
use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// The review collection is served from every path, so `/` and `/{*path}`
/// share one method router: GET lists, POST creates, anything else is 405.
///
/// Middleware stack (outermost first):
/// 1. Tracing spans
/// 2. Request ID tracking
/// 3. Request logging
/// 4. Timeout handling (`408` with a JSON error body)
/// 5. Body size limit
pub fn build_router(state: Arc<ServerState>) -> Router {
    let reviews = get(query::list_reviews)
        .post(submit::create_review)
        .fallback(method_not_allowed);

    Router::new()
        .route("/", reviews.clone())
        .route("/{*path}", reviews)
        .layer(DefaultBodyLimit::max(state.config.max_body_size()))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(state.config.timeout())),
        )
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Install the global tracing subscriber.
fn init_tracing(config: &ServerConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true);

    if config.log_format.eq_ignore_ascii_case("pretty") {
        builder.pretty().init();
    } else {
        builder.json().init();
    }
}

/// Start the review HTTP server
///
/// Sets up logging, loads the dataset into a fresh review store, binds the
/// configured address and serves until SIGTERM or Ctrl+C.
///
/// # Example
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config);

    let state = Arc::new(ServerState::load(config.clone())?);
    let app = build_router(state);

    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        "Starting review server on {} with dataset {}",
        addr,
        config.dataset_path.display()
    );
    tracing::info!(
        "Timeout: {}s, Max body: {}KB",
        config.timeout_secs,
        config.max_body_size_kb
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on port {}...", addr.port());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
