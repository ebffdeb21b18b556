//! Locator for plain and typed script.

use quote_ast::{Grammar, LiteralSpan};

use super::{Locator, LocatorConfig, find_boundary_match, parse_window};
use crate::error::SyncError;
use crate::types::DelimiterKind;

/// Matches string and template literals in a JavaScript or TypeScript line.
#[derive(Debug, Clone, Copy)]
pub struct ScriptLocator {
    grammar: Grammar,
    config: LocatorConfig,
}

impl ScriptLocator {
    /// Create a locator parsing with `grammar`
    #[must_use]
    pub fn new(grammar: Grammar, config: LocatorConfig) -> Self {
        Self { grammar, config }
    }
}

impl Locator for ScriptLocator {
    fn locate(
        &self,
        window: &str,
        offset: usize,
        delimiter: DelimiterKind,
    ) -> Result<LiteralSpan, SyncError> {
        let tree = parse_window(self.grammar, window, self.config)?;
        let span = find_boundary_match(tree.root(), offset, delimiter.operation())
            .ok_or(SyncError::NoMatch { offset })?;
        tracing::debug!(
            grammar = self.grammar.as_str(),
            offset,
            start = span.start,
            end = span.end,
            "located literal"
        );
        Ok(span)
    }
}
