//! Error types for quote synchronization.
//!
//! Library crates use `thiserror` for explicit error enums. Every variant is
//! recoverable: the dispatcher logs it and answers with fewer (or no)
//! corrections instead of failing the request.

use quote_ast::AstError;
use thiserror::Error;

use crate::types::DelimiterKind;

/// Error types for the correction pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The text window does not parse under the dialect grammar.
    #[error("Parse failure: {0}")]
    ParseFailure(String),

    /// The batch mixes lines, dialects or operations and is discarded whole.
    #[error("Ambiguous batch: {0}")]
    AmbiguousBatch(String),

    /// No literal or attribute boundary sits at the edit offset.
    #[error("No literal boundary at offset {offset}")]
    NoMatch {
        /// Offset of the edit
        offset: usize,
    },

    /// The requested delimiter is not valid where the literal lives.
    #[error("Delimiter {delimiter} is not supported in {context}")]
    UnsupportedDelimiterForContext {
        /// Requested delimiter
        delimiter: DelimiterKind,
        /// Syntactic context that rejects it
        context: &'static str,
    },

    /// Grammar or dialect resolution failed.
    #[error("AST error: {0}")]
    Ast(#[from] AstError),
}
