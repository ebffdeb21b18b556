//! Locator for JSX and TSX.

use quote_ast::{Grammar, LiteralSpan, Node};

use super::{LITERAL_KINDS, Locator, LocatorConfig, find_boundary_node, parse_window};
use crate::error::SyncError;
use crate::types::DelimiterKind;

const JSX_ATTRIBUTE: &str = "jsx_attribute";

/// Script literals plus JSX attribute string values.
///
/// A JSX attribute value only accepts `'` or `"`: a back-quote there, or
/// collapsing the value away, is rejected.
#[derive(Debug, Clone, Copy)]
pub struct ReactLocator {
    grammar: Grammar,
    config: LocatorConfig,
}

impl ReactLocator {
    /// Create a locator parsing with `grammar`
    #[must_use]
    pub fn new(grammar: Grammar, config: LocatorConfig) -> Self {
        Self { grammar, config }
    }
}

/// Reject delimiters a JSX attribute value cannot carry.
pub(super) fn check_attribute_value(
    node: &Node<'_>,
    delimiter: DelimiterKind,
) -> Result<(), SyncError> {
    let in_attribute = node
        .parent()
        .is_some_and(|parent| parent.kind() == JSX_ATTRIBUTE);
    if in_attribute
        && matches!(
            delimiter,
            DelimiterKind::BackQuote | DelimiterKind::DeleteOperation
        )
    {
        return Err(SyncError::UnsupportedDelimiterForContext {
            delimiter,
            context: "JSX attribute value",
        });
    }
    Ok(())
}

impl Locator for ReactLocator {
    fn locate(
        &self,
        window: &str,
        offset: usize,
        delimiter: DelimiterKind,
    ) -> Result<LiteralSpan, SyncError> {
        let tree = parse_window(self.grammar, window, self.config)?;
        let node = find_boundary_node(tree.root(), offset, delimiter.operation(), |node| {
            LITERAL_KINDS.contains(&node.kind())
        })
        .ok_or(SyncError::NoMatch { offset })?;

        check_attribute_value(&node, delimiter)?;

        let span = LiteralSpan::from_node(&node);
        tracing::debug!(
            grammar = self.grammar.as_str(),
            offset,
            kind = node.kind(),
            start = span.start,
            end = span.end,
            "located literal"
        );
        Ok(span)
    }
}
