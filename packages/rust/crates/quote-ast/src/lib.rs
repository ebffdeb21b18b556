//! quote-ast - Dialect-aware syntax trees for quote synchronization
//!
//! This crate owns everything parser-specific: which tree-sitter grammar
//! serves which dialect, how a Vue single-file component splits into
//! regions, and how offsets inside a region map back to the document.
//!
//! ## Architecture
//!
//! ```text
//! quote-ast/src/
//! ├── lib.rs           # Re-exports (entry point)
//! ├── re_exports.rs    # tree-sitter re-exports
//! ├── dialect.rs       # Dialect enum and language id detection
//! ├── grammar.rs       # Grammar enum, SyntaxParser, SyntaxTree
//! ├── sfc.rs           # Vue SFC structural splitter
//! ├── span.rs          # LiteralSpan and OffsetBase
//! ├── walk.rs          # Iterative pre-order traversal
//! └── error.rs         # AstError
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_ast::{Dialect, preorder, parse};
//!
//! let tree = parse(Dialect::Script.grammar(), "console.log('hi');").unwrap();
//! let strings = preorder(tree.root()).filter(|n| n.kind() == "string").count();
//! assert_eq!(strings, 1);
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod dialect;
mod error;
mod grammar;
mod re_exports;
mod sfc;
mod span;
mod walk;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use re_exports::*;

pub use dialect::Dialect;
pub use error::AstError;
pub use grammar::{Grammar, SyntaxParser, SyntaxTree, parse};
pub use sfc::{
    BlockKind, SfcBlock, SfcDescriptor, attribute_name, attribute_value, find_attribute,
    split_sfc,
};
pub use span::{LiteralSpan, OffsetBase};
pub use walk::{Preorder, child_of_kind, node_text, preorder};
