use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::{
    spotify::{SpotifyError, auth::AuthExchangeError},
    warning,
};

/// Errors surfaced to HTTP clients.
///
/// Rendered as `{"detail": "<message>"}` with the status from
/// [`ApiError::status`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid or missing access token")]
    InvalidToken,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Upstream(String),

    #[error("Could not obtain an access token: {0}")]
    AuthExchange(String),

    #[error("Malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidToken | ApiError::AuthExchange(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::MalformedUpstreamResponse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Maps an upstream failure, prefixing the message with what was being
    /// attempted (e.g. `"Error fetching artist"`).
    pub fn upstream(context: &str, err: SpotifyError) -> Self {
        match err {
            SpotifyError::Unauthorized => ApiError::InvalidToken,
            SpotifyError::Malformed(msg) => ApiError::MalformedUpstreamResponse(msg),
            other => ApiError::Upstream(format!("{context}: {other}")),
        }
    }
}

impl From<AuthExchangeError> for ApiError {
    fn from(err: AuthExchangeError) -> Self {
        ApiError::AuthExchange(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warning!("Request failed: {}", self);
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
