use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::api::TmdbError;
use crate::proxy::ProxyError;

/// Application-level error type for the JSON routes.
///
/// Implements [`IntoResponse`] to produce `{"error": "<message>"}` bodies.
/// Provider details never reach the client; they are logged instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The caller sent an unusable request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The Provider call failed; `message` is what the client sees
    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: TmdbError,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map a proxy failure, using `message` for anything upstream
    pub fn from_proxy(err: ProxyError, message: &'static str) -> Self {
        match err {
            ProxyError::MissingQuery => AppError::BadRequest(err.to_string()),
            ProxyError::Upstream(source) => AppError::Upstream { message, source },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream { message, source } => {
                tracing::error!(
                    error = %source,
                    provider_status = ?source.status(),
                    "{}", message
                );
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
