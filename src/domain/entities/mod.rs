//! Core domain entities representing the business data model.
//!
//! - [`Link`] - A shortened URL mapping with its click counter
//! - [`NewLink`] - Input for creating a link
//! - [`LinkStats`] - Aggregate figures across all links

pub mod link;

pub use link::{Link, LinkStats, NewLink};
