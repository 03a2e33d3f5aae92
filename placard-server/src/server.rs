//! HTTP routes.

use crate::error::ServerError;
use crate::params::RenderRequest;
use crate::render::Renderer;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub renderer: Renderer,
}

/// Build the application router.
pub fn router(renderer: Renderer) -> Router {
    Router::new()
        .route("/generate", get(generate))
        .route("/health", get(health))
        .with_state(AppState { renderer })
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// `GET /generate?size=W*H&round=N&color=NAME`
///
/// Replies with the base64-encoded PNG as plain text. Malformed parameters
/// fall back to defaults and never produce a client error.
async fn generate(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, ServerError> {
    let request =
        RenderRequest::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    tracing::debug!(
        width = request.width,
        height = request.height,
        round = request.round_percent,
        color = %request.color,
        "generate"
    );

    let renderer = state.renderer.clone();
    let body = tokio::task::spawn_blocking(move || renderer.render_base64(&request)).await??;
    Ok(body)
}

async fn health() -> &'static str {
    "ok"
}

/// Serve `renderer` on `listener` until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, renderer: Renderer) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    tracing::info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        address = %crate::config::display_addr(&addr),
        "Server listening"
    );

    axum::serve(listener, router(renderer))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
