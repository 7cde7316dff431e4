//! Utility modules for display formatting and pattern matching.
//!
//! Provides:
//! - [`format_columns`] - Column-major layout for `help`
//! - [`glob_to_regex`] - Wildcard patterns for `find`

mod format;
mod glob;

pub use format::{format_columns, format_size};
pub use glob::glob_to_regex;
