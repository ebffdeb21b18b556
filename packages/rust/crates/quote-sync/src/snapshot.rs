//! Last-known text of every tracked document.

use std::collections::HashMap;

use crate::text::{TextLines, char_at};

/// Stores one full-text snapshot per document URI.
///
/// A snapshot always describes the document as it was before the batch that
/// is currently being classified; callers replace it only once that batch's
/// corrections have been computed.
#[derive(Debug, Default)]
pub struct SnapshotTracker {
    snapshots: HashMap<String, String>,
}

impl SnapshotTracker {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` for `uri`, overwriting any previous snapshot.
    pub fn record_snapshot(&mut self, uri: impl Into<String>, text: impl Into<String>) {
        self.snapshots.insert(uri.into(), text.into());
    }

    /// Full snapshot text
    #[must_use]
    pub fn snapshot(&self, uri: &str) -> Option<&str> {
        self.snapshots.get(uri).map(String::as_str)
    }

    /// Character at byte `offset` of the snapshot.
    #[must_use]
    pub fn prior_char_at(&self, uri: &str, offset: usize) -> Option<char> {
        char_at(self.snapshot(uri)?, offset)
    }

    /// Text of one snapshot line, without terminator
    #[must_use]
    pub fn line_text(&self, uri: &str, line: usize) -> Option<&str> {
        TextLines::new(self.snapshot(uri)?).line(line)
    }

    /// Byte offset where a snapshot line starts
    #[must_use]
    pub fn line_start(&self, uri: &str, line: usize) -> Option<usize> {
        TextLines::new(self.snapshot(uri)?).line_start(line)
    }

    /// Forget a document, returning its last snapshot.
    pub fn drop_snapshot(&mut self, uri: &str) -> Option<String> {
        self.snapshots.remove(uri)
    }

    /// Whether `uri` has a snapshot
    #[must_use]
    pub fn is_tracked(&self, uri: &str) -> bool {
        self.snapshots.contains_key(uri)
    }

    /// Number of tracked documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if no document is tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_and_lookup() {
        let mut tracker = SnapshotTracker::new();
        tracker.record_snapshot("file:///a.js", "let a = 1;\nlet b = 'x';");
        tracker.record_snapshot("file:///a.js", "let a = 1;\nlet b = \"x\";");

        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.line_text("file:///a.js", 1), Some("let b = \"x\";"));
        assert_eq!(tracker.line_start("file:///a.js", 1), Some(11));
        assert_eq!(tracker.prior_char_at("file:///a.js", 19), Some('"'));
    }

    #[test]
    fn test_drop() {
        let mut tracker = SnapshotTracker::new();
        tracker.record_snapshot("u", "x");
        assert!(tracker.is_tracked("u"));
        assert_eq!(tracker.drop_snapshot("u").as_deref(), Some("x"));
        assert!(tracker.is_empty());
        assert_eq!(tracker.prior_char_at("u", 0), None);
    }
}
