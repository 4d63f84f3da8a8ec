//! Unified error types for both services.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::customer::CustomerId;

/// Errors raised while composing a bill from the directory lookup.
///
/// Distinguishes the upstream-absent case from transport and decode
/// failures so they are not conflated internally, even though the HTTP
/// boundary collapses the latter two into one status code.
#[derive(Error, Debug)]
pub enum BillingError {
    /// The directory reported no customer for this id.
    #[error("customer {id} not found in directory")]
    CustomerNotFound {
        /// The id that was looked up.
        id: CustomerId,
    },

    /// The request to the directory failed (connect, timeout, transport).
    #[error("directory request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The directory responded but the body did not decode into a record.
    #[error("failed to decode directory response: {0}")]
    Decode(String),
}

/// The two error kinds observable at the HTTP boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Customer id absent. Always a 404 with a fixed message.
    #[error("Customer not found")]
    NotFound,

    /// Anything else. Always a 500 carrying the error message.
    #[error("{0}")]
    Internal(String),
}

/// JSON error payload: `{"error": <message>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl From<BillingError> for ApiError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::CustomerNotFound { .. } => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
