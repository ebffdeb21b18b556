//! Re-exports from tree-sitter
//!
//! Downstream crates reach tree-sitter types through this crate so the whole
//! workspace stays on one tree-sitter version.

pub use tree_sitter::Language;
pub use tree_sitter::Node;
pub use tree_sitter::Tree;
pub use tree_sitter::TreeCursor;
