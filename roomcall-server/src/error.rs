use crate::token::TokenError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roomcall_core::ErrorResponse;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the HTTP layer. The `Display` text is what the caller
/// sees, so it never carries signing details.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing identity or roomName")]
    MissingField,

    #[error("Failed to generate token")]
    Signing(#[from] TokenError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField => StatusCode::BAD_REQUEST,
            ApiError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Signing(e) = &self {
            error!("Token generation error: {:?}", e);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
