//! Link creation, lookup, deletion and click tracking.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkStats, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};
use crate::utils::validators::{is_valid_code, normalize_url, validate_link_input};

/// Maximum number of generated codes tried before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// A page of links together with the total number of stored links.
#[derive(Debug, Clone)]
pub struct LinkPage {
    pub links: Vec<Link>,
    pub total: i64,
}

/// Service orchestrating every link operation.
///
/// Owns an injected repository handle and the public base URL used to derive
/// short URLs. Handlers share one instance through [`crate::state::AppState`].
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// A trailing `/` on `base_url` is ignored.
    pub fn new(link_repository: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            link_repository,
            base_url,
        }
    }

    /// Creates a short link.
    ///
    /// The URL is stored in its normalized form (see [`normalize_url`]).
    ///
    /// # Code Selection
    ///
    /// - A non-empty `custom_code` is validated and used as-is, unless it is taken
    /// - Otherwise a random 6-character code is generated, retrying on collision
    ///   up to [`MAX_GENERATION_ATTEMPTS`] times
    ///
    /// The existence checks are a fast path only. Two concurrent requests for the
    /// same code can both pass them; the store's primary key then rejects the
    /// second insert, which surfaces as [`AppError::Conflict`] as well.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is invalid.
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    /// Returns [`AppError::Server`] if no free code was found.
    pub async fn create_link(
        &self,
        original_url: Option<String>,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_link_input(original_url.as_deref(), custom_code.as_deref())?;

        let original_url = normalize_url(original_url.as_deref().unwrap_or_default())?;

        let code = match custom_code.filter(|c| !c.is_empty()) {
            Some(custom) => {
                if self.link_repository.code_exists(&custom).await? {
                    return Err(AppError::conflict(
                        "Custom code already exists. Please choose a different code.",
                    ));
                }
                custom
            }
            None => self.generate_unique_code().await?,
        };

        let link = self
            .link_repository
            .create(NewLink { code, original_url })
            .await?;

        tracing::info!(code = %link.code, "Link created");

        Ok(link)
    }

    /// Returns one page of links, newest first, plus the total count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn list_links(&self, limit: i64, offset: i64) -> Result<LinkPage, AppError> {
        let links = self.link_repository.list(limit, offset).await?;
        let total = self.link_repository.count().await?;

        Ok(LinkPage { links, total })
    }

    /// Fetches a link for the management API.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `code` is malformed.
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        ensure_code_format(code)?;

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(link_not_found)
    }

    /// Hard-deletes a link and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `code` is malformed.
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn delete_link(&self, code: &str) -> Result<Link, AppError> {
        ensure_code_format(code)?;

        let link = self
            .link_repository
            .delete(code)
            .await?
            .ok_or_else(link_not_found)?;

        tracing::info!(code = %link.code, "Link deleted");

        Ok(link)
    }

    /// Looks up the destination for a redirect.
    ///
    /// Unlike [`Self::get_link`], a malformed code is reported as
    /// [`AppError::NotFound`]: anonymous redirect traffic gets the same answer
    /// whether the code is malformed or simply unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `code` is malformed or unknown.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        if !is_valid_code(code) {
            return Err(link_not_found());
        }

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(link_not_found)
    }

    /// Records one click on `code`.
    ///
    /// A link deleted between the redirect and this call is not an error; the
    /// click is simply lost.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn record_click(&self, code: &str) -> Result<(), AppError> {
        match self.link_repository.increment_click_count(code).await? {
            Some(link) => {
                tracing::debug!(code, click_count = link.click_count, "Click recorded");
            }
            None => {
                tracing::debug!(code, "Click dropped, link no longer exists");
            }
        }

        Ok(())
    }

    /// Totals across all links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn stats(&self) -> Result<LinkStats, AppError> {
        self.link_repository.stats().await
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Generates a code not yet present in the store.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code(DEFAULT_CODE_LENGTH);

            if !self.link_repository.code_exists(&code).await? {
                return Ok(code);
            }

            tracing::debug!(attempt, code = %code, "Generated code collided");
        }

        tracing::warn!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "Could not generate a unique code"
        );

        Err(AppError::server(
            "Failed to generate unique code. Please try again.",
        ))
    }
}

fn ensure_code_format(code: &str) -> Result<(), AppError> {
    if is_valid_code(code) {
        Ok(())
    } else {
        Err(AppError::validation("Invalid code format"))
    }
}

fn link_not_found() -> AppError {
    AppError::not_found("Link not found")
}
