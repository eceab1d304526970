use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folioview_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Upstream failures are reported as a bad gateway
            ApiError::Core(CoreError::HoldingsApi(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!("Request failed with {}: {}", status, self);
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
