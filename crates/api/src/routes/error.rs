//! Domain error to HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use zeitlog_domain::ZeitlogError;

/// Wrapper turning a `ZeitlogError` into an HTTP response.
///
/// The body is the serde-tagged error itself, so clients see
/// `{ "type": "Conflict", "message": "..." }`.
#[derive(Debug)]
pub struct ApiError(pub ZeitlogError);

/// Handler result alias.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<ZeitlogError> for ApiError {
    fn from(err: ZeitlogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ZeitlogError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ZeitlogError::NotFound(_) => StatusCode::NOT_FOUND,
            ZeitlogError::Conflict(_) => StatusCode::CONFLICT,
            ZeitlogError::Network(_) => StatusCode::BAD_GATEWAY,
            ZeitlogError::Database(_) | ZeitlogError::Config(_) | ZeitlogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(self.0)).into_response()
    }
}
