//! Validation and code generation helpers used by the link service.
//!
//! - [`validators`] - URL and short-code validation
//! - [`code_generator`] - Random short code generation

pub mod code_generator;
pub mod validators;
