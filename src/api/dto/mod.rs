//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Input validation
//! happens in the service layer so the API and the admin CLI share it.

pub mod health;
pub mod link;
pub mod pagination;
pub mod stats;
