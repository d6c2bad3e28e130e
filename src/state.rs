//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;

/// State cloned into each request.
///
/// Holds the only shared resource of the service: the link service and,
/// behind it, the pooled store handle. Nothing here is mutable.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// When true, unexpected 500 responses include a `stack` field with the error chain.
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, expose_error_details: bool) -> Self {
        Self {
            link_service,
            expose_error_details,
        }
    }
}
