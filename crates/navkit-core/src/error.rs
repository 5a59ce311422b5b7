//! Error types.
//!
//! Navigation itself never fails: unknown paths resolve to the not-found
//! view. The only fallible step is compiling a parameterized route pattern
//! while the route table is built.

use thiserror::Error;

/// Errors raised when compiling a `:param` path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Pattern does not start with `/`.
    #[error("pattern '{0}' must start with '/'")]
    MissingLeadingSlash(String),
    /// A `:` segment without a name, e.g. `/users/:`.
    #[error("pattern '{pattern}' has an unnamed parameter at segment {segment}")]
    EmptyParamName { pattern: String, segment: usize },
    /// The same parameter name bound twice.
    #[error("pattern '{pattern}' binds parameter '{name}' more than once")]
    DuplicateParam { pattern: String, name: String },
}
