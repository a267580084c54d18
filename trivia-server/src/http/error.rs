//! API error type with IntoResponse
//!
//! Every failure renders the same envelope:
//! `{"success": false, "error": <status code>, "message": <fixed text>}`.
//! The detail carried by each variant is logged, never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::models::ValidationError;

/// Error envelope body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed payload or empty page (400)
    BadRequest { reason: String },

    /// Referenced question, category, or route does not exist (404)
    NotFound { resource: &'static str, id: String },

    /// Well-formed reference but the operation cannot complete (422)
    Unprocessable { reason: String },

    /// Infrastructure failure (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(reason: impl ToString) -> Self {
        Self::BadRequest {
            reason: reason.to_string(),
        }
    }

    pub fn unprocessable(reason: impl ToString) -> Self {
        Self::Unprocessable {
            reason: reason.to_string(),
        }
    }

    pub fn internal(message: impl ToString) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed client-facing message for this error class.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Bad request error",
            Self::NotFound { .. } => "Not found error",
            Self::Unprocessable { .. } => "Unprocessable error",
            Self::Internal { .. } => "Server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest { reason } => tracing::debug!(%reason, "Bad request"),
            Self::NotFound { resource, id } => tracing::debug!(resource, %id, "Not found"),
            Self::Unprocessable { reason } => tracing::warn!(%reason, "Unprocessable request"),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
        }

        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message().to_owned(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::bad_request(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::internal(e),
        }
    }
}
