//! Literal spans and offset translation between regions and documents.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// Half-open byte range `[start, end)` of a literal or attribute value,
/// delimiters included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiteralSpan {
    /// Offset of the opening delimiter
    pub start: usize,
    /// Offset one past the closing delimiter
    pub end: usize,
}

impl LiteralSpan {
    /// Create a new span
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering a syntax node
    #[must_use]
    pub fn from_node(node: &Node<'_>) -> Self {
        Self::new(node.start_byte(), node.end_byte())
    }

    /// Width of the span in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `offset` sits on the opening or the closing delimiter.
    #[must_use]
    pub fn touches_boundary(&self, offset: usize) -> bool {
        !self.is_empty() && (offset == self.start || offset == self.end - 1)
    }

    /// Grow the span by `by` bytes on each side.
    #[must_use]
    pub fn widen(self, by: usize) -> Self {
        Self::new(self.start.saturating_sub(by), self.end + by)
    }
}

/// Position of a region's first byte inside the whole document.
///
/// Shared by every sub-locator that works on a region rather than the
/// document itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OffsetBase(pub usize);

impl OffsetBase {
    /// Region-local offset → document offset
    #[must_use]
    pub fn to_document(self, local: usize) -> usize {
        self.0 + local
    }

    /// Document offset → region-local offset, `None` if it precedes the region
    #[must_use]
    pub fn to_local(self, document: usize) -> Option<usize> {
        document.checked_sub(self.0)
    }

    /// Region-local span → document span
    #[must_use]
    pub fn span_to_document(self, span: LiteralSpan) -> LiteralSpan {
        LiteralSpan::new(self.to_document(span.start), self.to_document(span.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary() {
        let span = LiteralSpan::new(12, 18);
        assert!(span.touches_boundary(12));
        assert!(span.touches_boundary(17));
        assert!(!span.touches_boundary(13));
        assert!(!span.touches_boundary(18));
        assert!(!LiteralSpan::new(4, 4).touches_boundary(4));
    }

    #[test]
    fn test_offset_base() {
        let base = OffsetBase(10);
        assert_eq!(base.to_document(3), 13);
        assert_eq!(base.to_local(13), Some(3));
        assert_eq!(base.to_local(9), None);
        assert_eq!(
            base.span_to_document(LiteralSpan::new(1, 4)),
            LiteralSpan::new(11, 14)
        );
    }
}
