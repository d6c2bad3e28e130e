//! Catch-all handler for unmatched routes.

use crate::error::AppError;

/// Answers every request that matched no route.
///
/// # Response
///
/// ```json
/// { "error": "Not Found", "message": "The requested resource was not found" }
/// ```
pub async fn not_found_handler() -> AppError {
    AppError::not_found("The requested resource was not found")
}
