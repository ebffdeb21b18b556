//! Error types for syntax tree construction.
//!
//! Library crates use `thiserror` for explicit error enums.

use thiserror::Error;

/// Error types for parsing and dialect resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    /// Grammar could not be loaded into the parser (ABI mismatch).
    #[error("Language error: {0}")]
    Language(String),

    /// Parser produced no tree for the given source.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Language id or extension does not map to a supported dialect.
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),
}
