//! Application layer services implementing business logic.
//!
//! Services orchestrate validation, code generation and repository calls, and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! - [`services::link_service::LinkService`] - Link creation, lookup, deletion and click tracking

pub mod services;
