//! HTTP error response mapping.
//!
//! Every failure is answered with a plain-text body. Client errors carry the
//! parser's or decoder's own message; not-found and method errors use fixed
//! text.

use std::num::ParseIntError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use items_core::StoreError;

/// Body sent with every 404.
pub const NOT_FOUND_BODY: &str = "404 page not found";

/// Body sent with every 405.
pub const METHOD_NOT_ALLOWED_BODY: &str = "Method not allowed";

/// Request-scoped failures. None of them touch the store.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// `/items/` with nothing after the slash.
    #[error("missing item id")]
    MissingId,

    /// The id path segment is not an integer.
    #[error("invalid item id {raw:?}: {source}")]
    InvalidId { raw: String, source: ParseIntError },

    /// The request body is not a JSON item.
    #[error("{0}")]
    InvalidBody(#[from] serde_json::Error),

    /// No route matches the path.
    #[error("404 page not found")]
    NotFound,

    /// The path exists but does not support the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// A store lookup failed; unknown ids answer 404.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingId | Self::InvalidId { .. } | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound | Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Store(StoreError::NotFound(id)) => {
                tracing::debug!(item_id = *id, "item not found");
                NOT_FOUND_BODY.to_string()
            }
            other => {
                if status == StatusCode::BAD_REQUEST {
                    tracing::debug!(error = %other, "rejected request");
                }
                other.to_string()
            }
        };

        (status, body).into_response()
    }
}
