//! PostgreSQL repository implementations.
//!
//! - [`PgLinkRepository`] - Link storage, lookup, click counting and totals

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
