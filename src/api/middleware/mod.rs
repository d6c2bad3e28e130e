//! HTTP middleware for request processing.
//!
//! Provides cross-origin policy, error detail rendering, and observability.

pub mod cors;
pub mod error_detail;
pub mod tracing;
