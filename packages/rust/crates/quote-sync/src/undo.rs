//! Single-slot undo state for the last applied correction.

use crate::text::TextLines;
use crate::types::CorrectionResult;

/// Remembers the last non-empty correction batch so an undo can restore the
/// pre-correction text exactly.
#[derive(Debug, Default)]
pub struct UndoCoordinator {
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    uri: String,
    results: Vec<CorrectionResult>,
}

impl UndoCoordinator {
    /// Create an empty coordinator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `results` for `uri`. Empty batches leave the slot untouched.
    pub fn record(&mut self, uri: impl Into<String>, results: Vec<CorrectionResult>) {
        if results.is_empty() {
            return;
        }
        self.pending = Some(Pending {
            uri: uri.into(),
            results,
        });
    }

    /// Whether a correction can be reversed
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Document the pending correction belongs to
    #[must_use]
    pub fn pending_uri(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.uri.as_str())
    }

    /// Whether every pending correction is present in `text`.
    ///
    /// Line results compare against their line, document results against the
    /// whole text. `false` when nothing is pending.
    #[must_use]
    pub fn is_applied_to(&self, text: &str) -> bool {
        let Some(pending) = &self.pending else {
            return false;
        };
        let lines = TextLines::new(text);
        pending.results.iter().all(|result| match result.line_index {
            Some(line) => lines.line(line) == result.line_text.as_deref(),
            None => result.whole_text.as_deref() == Some(text),
        })
    }

    /// Reverse patch for `uri`, clearing the slot.
    ///
    /// Returns `None` when nothing is pending or the pending batch belongs to
    /// another document; the slot is kept in that case.
    pub fn take_reverse(&mut self, uri: &str) -> Option<Vec<CorrectionResult>> {
        if self.pending_uri() != Some(uri) {
            return None;
        }
        let pending = self.pending.take()?;
        Some(
            pending
                .results
                .iter()
                .map(CorrectionResult::reversed)
                .collect(),
        )
    }

    /// Drop any pending state
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperationKind;

    #[test]
    fn test_reverse_consumes_slot() {
        let mut undo = UndoCoordinator::new();
        undo.record(
            "u",
            vec![CorrectionResult::for_line(
                0,
                "a('x')",
                "a(\"x\")",
                OperationKind::Substitute,
            )],
        );

        let reverse = undo.take_reverse("u").unwrap();
        assert_eq!(reverse[0].line_text.as_deref(), Some("a(\"x\")"));
        assert_eq!(reverse[0].old_line_text.as_deref(), Some("a('x')"));
        assert!(!undo.has_pending());
        assert!(undo.take_reverse("u").is_none());
    }

    #[test]
    fn test_other_document_keeps_slot() {
        let mut undo = UndoCoordinator::new();
        undo.record(
            "a",
            vec![CorrectionResult::for_document(
                "x",
                "y",
                OperationKind::DeletePair,
            )],
        );
        assert!(undo.take_reverse("b").is_none());
        assert_eq!(undo.pending_uri(), Some("a"));

        let reverse = undo.take_reverse("a").unwrap();
        assert!(!reverse[0].is_delete_operation);
    }

    #[test]
    fn test_applied_check() {
        let mut undo = UndoCoordinator::new();
        assert!(!undo.is_applied_to("a('x');"));
        undo.record(
            "u",
            vec![CorrectionResult::for_line(
                1,
                "a('x');",
                "a(\"x\");",
                OperationKind::Substitute,
            )],
        );
        assert!(undo.is_applied_to("let b;\na('x');\n"));
        assert!(!undo.is_applied_to("let b;\nz('x');\n"));
        assert!(!undo.is_applied_to("a('x');"));
    }

    #[test]
    fn test_empty_batch_is_ignored() {
        let mut undo = UndoCoordinator::new();
        undo.record("a", Vec::new());
        assert!(!undo.has_pending());
    }
}
