//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::services::LinkService;
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::utils::validators::validate_link_input;

/// Body of `POST /api/links`.
///
/// Fields are kept as raw JSON values so that a missing or mistyped field is
/// reported by the validator with its own message rather than as a JSON shape
/// error.
///
/// ```json
/// { "original_url": "https://example.com/page", "custom_code": "mycode1" }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub original_url: Option<Value>,

    #[serde(default)]
    pub custom_code: Option<Value>,
}

impl CreateLinkRequest {
    /// Splits the body into `(original_url, custom_code)` strings.
    ///
    /// `null` and absent fields both become `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field holds a non-string value.
    /// A mistyped custom code is reported only after the URL itself passes.
    pub fn into_input(self) -> Result<(Option<String>, Option<String>), AppError> {
        let original_url = match self.original_url {
            None | Some(Value::Null) => None,
            Some(Value::String(url)) => Some(url),
            Some(_) => return Err(AppError::validation("Original URL must be a string")),
        };

        let custom_code = match self.custom_code {
            None | Some(Value::Null) => None,
            Some(Value::String(code)) => Some(code),
            Some(_) => {
                validate_link_input(original_url.as_deref(), None)?;
                return Err(AppError::validation("Custom code must be a string"));
            }
        };

        Ok((original_url, custom_code))
    }
}

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub short_url: String,
}

impl LinkResponse {
    /// Builds the response, deriving `short_url` from the service base URL.
    pub fn from_link(link: Link, service: &LinkService) -> Self {
        let short_url = service.short_url(&link.code);

        Self {
            code: link.code,
            original_url: link.original_url,
            click_count: link.click_count,
            created_at: link.created_at,
            last_clicked_at: link.last_clicked_at,
            short_url,
        }
    }
}

/// Body of `DELETE /api/links/{code}`.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub message: &'static str,
    pub deleted: LinkResponse,
}

impl DeleteLinkResponse {
    pub fn new(deleted: LinkResponse) -> Self {
        Self {
            message: "Link deleted successfully",
            deleted,
        }
    }
}
