//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

/// Page used when `page` is missing, unparsable or not positive.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when `limit` is missing, unparsable or not positive.
pub const DEFAULT_LIMIT: i64 = 100;

/// Query parameters of `GET /api/links`.
///
/// Uses `serde_with` to parse numbers from the query string. A value that does
/// not parse is read as absent, so listing never fails on its parameters.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListParams {
    /// Converts to database `(offset, limit)`.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `limit`: 100
    ///
    /// Zero and negative values fall back to the default as well. The offset
    /// is `(page - 1) * limit`, saturating instead of overflowing.
    pub fn offset_limit(&self) -> (i64, i64) {
        let page = self.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let limit = self.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT);

        let offset = (page - 1).saturating_mul(limit);

        (offset, limit)
    }
}
