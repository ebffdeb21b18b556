//! Locator for Vue single-file components.
//!
//! The document is split into its markup and script regions, each region is
//! parsed once with its own grammar, and edit offsets are translated between
//! document and region coordinates through the region's [`OffsetBase`].

use quote_ast::{
    BlockKind, Grammar, LiteralSpan, Node, OffsetBase, SyntaxTree, attribute_name,
    child_of_kind, preorder, split_sfc,
};

use super::react::check_attribute_value;
use super::{
    LITERAL_KINDS, Locator, LocatorConfig, boundary_hit, find_boundary_node, parse_window,
};
use crate::error::SyncError;
use crate::types::{DelimiterKind, OperationKind};

/// Attribute name prefixes that mark a Vue directive.
const DIRECTIVE_PREFIXES: [&str; 4] = ["v-", ":", "@", "#"];

/// Compiles SFC documents into parsed regions.
#[derive(Debug, Clone, Copy)]
pub struct SfcLocator {
    config: LocatorConfig,
}

/// One parsed region of an SFC document.
pub struct CompiledRegion {
    /// Tree of the region content
    pub tree: SyntaxTree,
    /// Whether this is the `<template>` markup
    pub is_markup_region: bool,
    /// Document offset of the first content byte
    pub region_start_offset: usize,
    /// Document offset one past the last content byte
    pub region_end_offset: usize,
    /// Region-local to document translation
    pub offset_base: OffsetBase,
}

impl CompiledRegion {
    /// Whether a document offset falls inside the region (both ends inclusive)
    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        (self.region_start_offset..=self.region_end_offset).contains(&offset)
    }
}

/// All regions of one document, compiled once per batch.
pub struct CompiledDocument<'src> {
    source: &'src str,
    regions: Vec<CompiledRegion>,
}

impl SfcLocator {
    /// Create a new SFC locator
    #[must_use]
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    /// Split `whole` into regions and parse each one.
    ///
    /// A region that fails to parse is left out; edits inside it find no
    /// match.
    pub fn compile<'src>(&self, whole: &'src str) -> Result<CompiledDocument<'src>, SyncError> {
        let descriptor = split_sfc(whole)?;
        let mut regions = Vec::new();

        for block in descriptor.blocks() {
            let tree = match parse_window(block.grammar(), block.content(whole), self.config) {
                Ok(tree) => tree,
                Err(error) => {
                    tracing::warn!(
                        region = ?block.kind,
                        start = block.content_start,
                        error = %error,
                        "skipping region that failed to parse"
                    );
                    continue;
                }
            };
            regions.push(CompiledRegion {
                tree,
                is_markup_region: block.kind == BlockKind::Template,
                region_start_offset: block.content_start,
                region_end_offset: block.content_end,
                offset_base: block.offset_base(),
            });
        }

        tracing::debug!(regions = regions.len(), "compiled sfc document");
        Ok(CompiledDocument {
            source: whole,
            regions,
        })
    }
}

impl Locator for SfcLocator {
    fn locate(
        &self,
        window: &str,
        offset: usize,
        delimiter: DelimiterKind,
    ) -> Result<LiteralSpan, SyncError> {
        self.compile(window)?.locate(offset, delimiter)
    }
}

impl CompiledDocument<'_> {
    /// Compiled regions in document order
    #[must_use]
    pub fn regions(&self) -> &[CompiledRegion] {
        &self.regions
    }

    /// Region containing a document offset; the last one wins on overlap
    #[must_use]
    pub fn region_at(&self, offset: usize) -> Option<&CompiledRegion> {
        self.regions.iter().rev().find(|region| region.contains(offset))
    }

    /// Locate the literal at document `offset`; the span is in document
    /// coordinates.
    pub fn locate(
        &self,
        offset: usize,
        delimiter: DelimiterKind,
    ) -> Result<LiteralSpan, SyncError> {
        let region = self.region_at(offset).ok_or(SyncError::NoMatch { offset })?;
        let local = region
            .offset_base
            .to_local(offset)
            .ok_or(SyncError::NoMatch { offset })?;
        let content = self
            .source
            .get(region.region_start_offset..region.region_end_offset)
            .unwrap_or("");

        let span = if region.is_markup_region {
            locate_in_markup(region.tree.root(), content, local, delimiter)
        } else {
            locate_in_script(&region.tree, local, delimiter)
        }
        .map_err(|error| match error {
            SyncError::NoMatch { .. } => SyncError::NoMatch { offset },
            other => other,
        })?;

        let span = region.offset_base.span_to_document(span);
        tracing::debug!(
            offset,
            markup = region.is_markup_region,
            start = span.start,
            end = span.end,
            "located sfc literal"
        );
        Ok(span)
    }
}

fn locate_in_script(
    tree: &SyntaxTree,
    offset: usize,
    delimiter: DelimiterKind,
) -> Result<LiteralSpan, SyncError> {
    let node = find_boundary_node(tree.root(), offset, delimiter.operation(), |node| {
        LITERAL_KINDS.contains(&node.kind())
    })
    .ok_or(SyncError::NoMatch { offset })?;
    if tree.grammar() == Grammar::Tsx {
        check_attribute_value(&node, delimiter)?;
    }
    Ok(LiteralSpan::from_node(&node))
}

fn is_directive(name: &str) -> bool {
    DIRECTIVE_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// Match of an attribute value in markup.
///
/// Plain attributes are matched on their quoted value. Directives are matched
/// on the expression inside the quotes, so the delimiters sit one byte
/// outside it; the returned span is widened back over them.
fn attribute_hit(
    attribute: Node<'_>,
    content: &str,
    offset: usize,
    operation: OperationKind,
) -> Option<LiteralSpan> {
    let quoted = child_of_kind(attribute, "quoted_attribute_value")?;
    let quoted_span = LiteralSpan::from_node(&quoted);
    let expression = child_of_kind(quoted, "attribute_value")
        .filter(|_| is_directive(attribute_name(attribute, content)));

    match expression {
        Some(expression) => {
            let span = LiteralSpan::from_node(&expression);
            let hit = operation == OperationKind::Substitute
                && (offset + 1 == span.start || offset == span.end);
            hit.then(|| span.widen(1))
        }
        None => boundary_hit(quoted_span, offset, operation).then_some(quoted_span),
    }
}

fn locate_in_markup(
    root: Node<'_>,
    content: &str,
    offset: usize,
    delimiter: DelimiterKind,
) -> Result<LiteralSpan, SyncError> {
    let operation = delimiter.operation();
    let span = preorder(root)
        .filter(|node| node.kind() == "attribute")
        .find_map(|attribute| attribute_hit(attribute, content, offset, operation))
        .ok_or(SyncError::NoMatch { offset })?;

    if matches!(
        delimiter,
        DelimiterKind::BackQuote | DelimiterKind::DeleteOperation
    ) {
        return Err(SyncError::UnsupportedDelimiterForContext {
            delimiter,
            context: "template attribute value",
        });
    }
    Ok(span)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "<template>\n  <input v-model=\"username\" class='box' />\n</template>\n<script>\nconst a = \"x\";\n</script>\n";

    fn offset_of(needle: &str) -> usize {
        DOC.find(needle).unwrap()
    }

    #[test]
    fn test_directive_value() {
        let locator = SfcLocator::new(LocatorConfig::default());
        let open = offset_of("\"username\"");
        let span = locator.locate(DOC, open, DelimiterKind::Single).unwrap();
        assert_eq!(span, LiteralSpan::new(open, open + 10));
        let close = open + 9;
        assert_eq!(locator.locate(DOC, close, DelimiterKind::Single), Ok(span));
    }

    #[test]
    fn test_plain_attribute_and_script() {
        let locator = SfcLocator::new(LocatorConfig::default());
        let compiled = locator.compile(DOC).unwrap();
        assert_eq!(compiled.regions().len(), 2);

        let class = offset_of("'box'");
        assert_eq!(
            compiled.locate(class + 4, DelimiterKind::Double),
            Ok(LiteralSpan::new(class, class + 5))
        );

        let literal = offset_of("\"x\"");
        assert_eq!(
            compiled.locate(literal, DelimiterKind::BackQuote),
            Ok(LiteralSpan::new(literal, literal + 3))
        );
    }

    #[test]
    fn test_back_quote_in_markup() {
        let locator = SfcLocator::new(LocatorConfig::default());
        let open = offset_of("\"username\"");
        assert!(matches!(
            locator.locate(DOC, open, DelimiterKind::BackQuote),
            Err(SyncError::UnsupportedDelimiterForContext { .. })
        ));
    }

    #[test]
    fn test_outside_regions() {
        let locator = SfcLocator::new(LocatorConfig::default());
        assert_eq!(
            locator.locate(DOC, 2, DelimiterKind::Single),
            Err(SyncError::NoMatch { offset: 2 })
        );
    }
}
