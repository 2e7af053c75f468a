//! Helpers for short code handling and target URL validation.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Target URL validation
//! - [`like_pattern`] - Escaping user input for SQL `LIKE` patterns

pub mod code_generator;
pub mod like_pattern;
pub mod url_validator;
