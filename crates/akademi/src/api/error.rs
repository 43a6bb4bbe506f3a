//! JSON error responses.

use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use crate::error::Error;

/// What a handler was doing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Listing or reading.
    Fetch,
    /// POST.
    Create,
    /// PUT.
    Update,
    /// DELETE.
    Delete,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// An error response with body `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Build an error response from a status and message.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A 400 response.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// A 404 response.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Translate a storage error raised while performing `action` on `noun`.
    ///
    /// Caller mistakes keep their specific message. Everything else is logged
    /// and reported as a generic 500, e.g. `Failed to create training`.
    #[must_use]
    pub fn from_error(err: Error, action: Action, noun: &str) -> Self {
        match err {
            Error::NotFound { .. } => {
                warn!("{action:?} rejected: {err}");
                Self::not_found(err.to_string())
            }
            Error::MissingId(_) | Error::InvalidInput(_) => {
                warn!("{action:?} rejected: {err}");
                Self::bad_request(err.to_string())
            }
            other => {
                error!("Failed to {} {noun}: {other}", action.verb());
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to {} {noun}", action.verb()),
                )
            }
        }
    }

    /// The HTTP status of this response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The message placed in the `error` field.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        warn!("Request body rejected: {rejection}");
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        warn!("Query string rejected: {rejection}");
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Singular noun for messages: acronyms keep their case, words are lowered.
pub(crate) fn noun(label: &str) -> String {
    if label.chars().all(|c| c.is_ascii_uppercase()) {
        label.to_string()
    } else {
        label.to_lowercase()
    }
}
