//! Error types for placard-server.

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use placard_canvas::CanvasError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error("render task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to generate image",
        )
            .into_response()
    }
}
