//! AST locators: find the literal whose delimiter an edit touched.
//!
//! Every dialect gets a [`Locator`]; the dispatcher picks one through
//! [`LocatorTable`]. All locators share the same boundary query,
//! [`find_boundary_match`], run over a pre-order walk of the window's tree.

mod react;
mod script;
mod sfc;

pub use react::ReactLocator;
pub use script::ScriptLocator;
pub use sfc::{CompiledDocument, CompiledRegion, SfcLocator};

use quote_ast::{Dialect, Grammar, LiteralSpan, Node, SyntaxTree, preorder};

use crate::error::SyncError;
use crate::types::{DelimiterKind, OperationKind};

/// Node kinds that are quoted literals in every script grammar.
///
/// String literal types (`literal_type`) and JSX attribute values are
/// `string` nodes too.
pub(crate) const LITERAL_KINDS: [&str; 2] = ["string", "template_string"];

/// Finds the literal span an edit touched inside a text window.
pub trait Locator {
    /// Locate the literal whose boundary sits at byte `offset` of `window`.
    ///
    /// The returned span is relative to `window`.
    fn locate(
        &self,
        window: &str,
        offset: usize,
        delimiter: DelimiterKind,
    ) -> Result<LiteralSpan, SyncError>;
}

/// Parser behaviour shared by all locators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocatorConfig {
    /// Treat trees with recovered syntax errors as parse failures
    pub strict_parse: bool,
}

/// Parse `window` with `grammar`, honouring `strict_parse`.
pub fn parse_window(
    grammar: Grammar,
    window: &str,
    config: LocatorConfig,
) -> Result<SyntaxTree, SyncError> {
    let tree = quote_ast::parse(grammar, window)
        .map_err(|e| SyncError::ParseFailure(e.to_string()))?;
    if config.strict_parse && tree.has_error() {
        return Err(SyncError::ParseFailure(format!(
            "{} tree contains syntax errors",
            grammar.as_str()
        )));
    }
    Ok(tree)
}

/// Whether `span` is the one an edit at `offset` refers to.
///
/// Substitutions hit either delimiter; a pair deletion is reported at the
/// opening delimiter of an empty literal.
#[must_use]
pub fn boundary_hit(span: LiteralSpan, offset: usize, operation: OperationKind) -> bool {
    match operation {
        OperationKind::Substitute => span.touches_boundary(offset),
        OperationKind::DeletePair => span.start == offset && span.len() == 2,
    }
}

/// First node in pre-order accepted by `accepts` whose boundary sits at
/// `offset`.
pub fn find_boundary_node<'tree>(
    root: Node<'tree>,
    offset: usize,
    operation: OperationKind,
    accepts: impl Fn(&Node<'tree>) -> bool,
) -> Option<Node<'tree>> {
    preorder(root).find(|node| {
        accepts(node) && boundary_hit(LiteralSpan::from_node(node), offset, operation)
    })
}

/// Span of the first literal node whose boundary sits at `offset`.
#[must_use]
pub fn find_boundary_match(
    root: Node<'_>,
    offset: usize,
    operation: OperationKind,
) -> Option<LiteralSpan> {
    find_boundary_node(root, offset, operation, |node| {
        LITERAL_KINDS.contains(&node.kind())
    })
    .map(|node| LiteralSpan::from_node(&node))
}

/// Dispatch table: one locator per dialect.
pub struct LocatorTable {
    script: ScriptLocator,
    typed: ScriptLocator,
    jsx: ReactLocator,
    tsx: ReactLocator,
    sfc: SfcLocator,
}

impl LocatorTable {
    /// Build the table for `config`
    #[must_use]
    pub fn new(config: LocatorConfig) -> Self {
        Self {
            script: ScriptLocator::new(Grammar::JavaScript, config),
            typed: ScriptLocator::new(Grammar::TypeScript, config),
            jsx: ReactLocator::new(Grammar::JavaScript, config),
            tsx: ReactLocator::new(Grammar::Tsx, config),
            sfc: SfcLocator::new(config),
        }
    }

    /// Locator registered for `dialect`
    #[must_use]
    pub fn get(&self, dialect: Dialect) -> &dyn Locator {
        match dialect {
            Dialect::Script => &self.script,
            Dialect::TypedScript => &self.typed,
            Dialect::ReactJsx => &self.jsx,
            Dialect::ReactTsx => &self.tsx,
            Dialect::TemplateSfc => &self.sfc,
        }
    }

    /// The multi-region locator, for batch compilation
    #[must_use]
    pub fn sfc(&self) -> &SfcLocator {
        &self.sfc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_hit() {
        let span = LiteralSpan::new(12, 14);
        assert!(boundary_hit(span, 12, OperationKind::Substitute));
        assert!(boundary_hit(span, 13, OperationKind::Substitute));
        assert!(boundary_hit(span, 12, OperationKind::DeletePair));
        assert!(!boundary_hit(span, 13, OperationKind::DeletePair));
        assert!(!boundary_hit(
            LiteralSpan::new(12, 18),
            12,
            OperationKind::DeletePair
        ));
    }

    #[test]
    fn test_strict_parse_rejects_errors() {
        let strict = LocatorConfig { strict_parse: true };
        assert!(parse_window(Grammar::JavaScript, "f('a', );;)", strict).is_err());
        let lenient = LocatorConfig::default();
        assert!(parse_window(Grammar::JavaScript, "f('a', );;)", lenient).is_ok());
    }
}
