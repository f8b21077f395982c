use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use locker_types::MessageResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Invalid backend address: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Backend unavailable: {0}")]
    Upstream(#[source] reqwest::Error),

    #[error("Request body could not be read: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            ProxyError::InvalidUrl { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ProxyError::Body { .. } => StatusCode::BAD_REQUEST,
        };

        (status, Json(MessageResponse::failure(self.to_string()))).into_response()
    }
}
