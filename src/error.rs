//! Application error type and its HTTP representation.
//!
//! Every fallible operation in the service returns [`AppError`]. Storage errors
//! are translated at the boundary ([`From<sqlx::Error>`]) so that constraint
//! violations reach clients as `Conflict` / `Validation Error` instead of raw
//! database messages.
//!
//! # Response Format
//!
//! ```json
//! { "error": "Validation Error", "message": "Invalid code format" }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// Diagnostic detail attached to unexpected storage failures as a response extension.
///
/// Stripped or rendered by [`crate::api::middleware::error_detail`] depending on
/// whether the deployment exposes internals.
#[derive(Debug, Clone)]
pub struct ErrorDetail {
    pub kind: &'static str,
    pub message: String,
    pub trace: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input (400).
    #[error("{0}")]
    Validation(String),

    /// Short code already taken (409).
    #[error("{0}")]
    Conflict(String),

    /// Unknown short code or route (404).
    #[error("{0}")]
    NotFound(String),

    /// Expected server-side failure such as code generation exhaustion (500).
    #[error("{0}")]
    Server(String),

    /// Unexpected storage failure (500).
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Server(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of the `error` field in the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Validation Error",
            AppError::Conflict(_) => "Conflict",
            AppError::NotFound(_) => "Not Found",
            AppError::Server(_) => "Server Error",
            AppError::Database(_) => "Internal Server Error",
        }
    }

    /// Error chain rendered one cause per line.
    fn trace(&self) -> String {
        let mut trace = format!("{self:?}");
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            trace.push_str("\ncaused by: ");
            trace.push_str(&cause.to_string());
            source = cause.source();
        }
        trace
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict("A link with this code already exists");
            }

            if db.is_check_violation() {
                return match db.constraint() {
                    Some(name) if name.starts_with("links_code") => {
                        AppError::validation("Invalid code format")
                    }
                    _ => AppError::validation("Link data violates a storage constraint"),
                };
            }
        }

        AppError::Database(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

/// A path segment that cannot be extracted (for example, invalid UTF-8 after
/// percent-decoding) is a malformed code.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "Path extraction failed");
        AppError::validation("Invalid code format")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let kind = self.kind();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        // Generation exhaustion is an expected 500 and carries no diagnostics.
        let detail = matches!(self, AppError::Database(_)).then(|| ErrorDetail {
            kind,
            message: message.clone(),
            trace: self.trace(),
        });

        let mut response = (
            status,
            Json(ErrorBody {
                error: kind,
                message,
            }),
        )
            .into_response();

        if let Some(detail) = detail {
            response.extensions_mut().insert(detail);
        }

        response
    }
}
