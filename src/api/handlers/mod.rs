//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod links;
pub mod redirect;
pub mod stats;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use links::{
    X_TOTAL_COUNT, create_link_handler, delete_link_handler, get_link_handler,
    list_links_handler,
};
pub use redirect::redirect_handler;
pub use stats::stats_handler;
