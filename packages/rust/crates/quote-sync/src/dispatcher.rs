//! Batch routing: validate a batch, run it through the dialect's locator and
//! assemble corrected text.

use std::collections::HashSet;

use quote_ast::LiteralSpan;

use crate::error::SyncError;
use crate::locator::{LocatorConfig, LocatorTable};
use crate::rewriter::{delete_pair, rewrite};
use crate::text::byte_offset;
use crate::types::{CorrectionResult, EditRecord, OperationKind};

/// Routes edit batches to the locator registered for their dialect.
pub struct Dispatcher {
    locators: LocatorTable,
}

impl Dispatcher {
    /// Create a dispatcher whose locators parse with `config`
    #[must_use]
    pub fn new(config: LocatorConfig) -> Self {
        Self {
            locators: LocatorTable::new(config),
        }
    }

    /// Substitute delimiters for every record in the batch.
    #[must_use]
    pub fn correct(&self, records: &[EditRecord]) -> Vec<CorrectionResult> {
        self.dispatch(records, OperationKind::Substitute)
    }

    /// Collapse the empty literal of every record in the batch.
    #[must_use]
    pub fn delete_pair(&self, records: &[EditRecord]) -> Vec<CorrectionResult> {
        self.dispatch(records, OperationKind::DeletePair)
    }

    /// Run a batch, logging and swallowing batch-level errors.
    #[must_use]
    pub fn dispatch(
        &self,
        records: &[EditRecord],
        operation: OperationKind,
    ) -> Vec<CorrectionResult> {
        match self.try_dispatch(records, operation) {
            Ok(results) => results,
            Err(error) => {
                tracing::warn!(
                    records = records.len(),
                    error = %error,
                    "discarding correction batch"
                );
                Vec::new()
            }
        }
    }

    /// Run a batch.
    ///
    /// Fails only for batch-level problems; a record that cannot be located
    /// is logged and skipped.
    pub fn try_dispatch(
        &self,
        records: &[EditRecord],
        operation: OperationKind,
    ) -> Result<Vec<CorrectionResult>, SyncError> {
        let Some(first) = records.first() else {
            return Ok(Vec::new());
        };
        validate(records, operation)?;

        if first.dialect.is_multi_region() {
            self.dispatch_document(records, operation)
        } else {
            Ok(self.dispatch_lines(records, operation))
        }
    }

    fn dispatch_lines(
        &self,
        records: &[EditRecord],
        operation: OperationKind,
    ) -> Vec<CorrectionResult> {
        let mut results: Vec<CorrectionResult> = records
            .iter()
            .filter_map(|record| {
                let locator = self.locators.get(record.dialect);
                let corrected = record_byte_offset(record, &record.line_text)
                    .and_then(|offset| locator.locate(&record.line_text, offset, record.delimiter))
                    .and_then(|span| rewrite(&record.line_text, span, record.delimiter));
                match corrected {
                    Ok(text) => Some(CorrectionResult::for_line(
                        record.line_index,
                        text,
                        record.line_text.clone(),
                        operation,
                    )),
                    Err(error) => {
                        skip_record(record, &error);
                        None
                    }
                }
            })
            .collect();

        results.sort_by_key(|result| result.line_index);
        results
    }

    fn dispatch_document(
        &self,
        records: &[EditRecord],
        operation: OperationKind,
    ) -> Result<Vec<CorrectionResult>, SyncError> {
        let whole = shared_whole_text(records)?;
        let compiled = self.locators.sfc().compile(whole)?;

        let mut spans: Vec<(LiteralSpan, &EditRecord)> = records
            .iter()
            .filter_map(|record| {
                let located = record_byte_offset(record, whole)
                    .and_then(|offset| compiled.locate(offset, record.delimiter));
                match located {
                    Ok(span) => Some((span, record)),
                    Err(error) => {
                        skip_record(record, &error);
                        None
                    }
                }
            })
            .collect();

        // Deleting shifts everything after the span; go back to front so the
        // remaining spans still point at unshifted text.
        spans.sort_by(|a, b| b.0.start.cmp(&a.0.start));
        spans.dedup_by_key(|(span, _)| *span);

        let mut text = whole.to_string();
        let mut applied = 0usize;
        for (span, record) in spans {
            let next = match operation {
                OperationKind::Substitute => rewrite(&text, span, record.delimiter),
                OperationKind::DeletePair => delete_pair(&text, span),
            };
            match next {
                Ok(next) => {
                    text = next;
                    applied += 1;
                }
                Err(error) => skip_record(record, &error),
            }
        }

        if applied == 0 {
            return Ok(Vec::new());
        }
        tracing::debug!(
            applied,
            delete = operation.is_delete(),
            "corrected sfc document"
        );
        Ok(vec![CorrectionResult::for_document(text, whole, operation)])
    }
}

/// Byte offset of a record's UTF-16 offset inside `window`.
fn record_byte_offset(record: &EditRecord, window: &str) -> Result<usize, SyncError> {
    byte_offset(window, record.offset).ok_or(SyncError::NoMatch {
        offset: record.offset,
    })
}

fn skip_record(record: &EditRecord, error: &SyncError) {
    match error {
        SyncError::NoMatch { .. } => tracing::debug!(
            line = record.line_index,
            offset = record.offset,
            "no literal boundary at edit"
        ),
        _ => tracing::warn!(
            line = record.line_index,
            offset = record.offset,
            error = %error,
            "skipping edit record"
        ),
    }
}

/// A batch must share one dialect and one operation. Line results are keyed by
/// line, so single-region batches also allow one record per line.
fn validate(records: &[EditRecord], operation: OperationKind) -> Result<(), SyncError> {
    let Some(first) = records.first() else {
        return Ok(());
    };
    if records.iter().any(|r| r.dialect != first.dialect) {
        return Err(SyncError::AmbiguousBatch("mixed dialects".to_string()));
    }
    if records.iter().any(|r| r.operation() != operation) {
        return Err(SyncError::AmbiguousBatch(format!(
            "records disagree with {operation:?} request"
        )));
    }
    if first.dialect.is_multi_region() {
        return Ok(());
    }
    let mut lines = HashSet::new();
    if let Some(record) = records.iter().find(|r| !lines.insert(r.line_index)) {
        return Err(SyncError::AmbiguousBatch(format!(
            "several edits on line {}",
            record.line_index
        )));
    }
    Ok(())
}

fn shared_whole_text(records: &[EditRecord]) -> Result<&str, SyncError> {
    let mut texts = records.iter().map(|r| r.whole_text.as_deref());
    let Some(Some(whole)) = texts.next() else {
        return Err(SyncError::AmbiguousBatch(
            "document text missing for multi-region dialect".to_string(),
        ));
    };
    if texts.any(|text| text != Some(whole)) {
        return Err(SyncError::AmbiguousBatch(
            "records carry different document text".to_string(),
        ));
    }
    Ok(whole)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DelimiterKind;
    use quote_ast::Dialect;

    #[test]
    fn test_validate_rejects_mixed_operations() {
        let records = vec![
            EditRecord::for_line(0, 0, DelimiterKind::Single, "'a'", Dialect::Script),
            EditRecord::for_line(0, 1, DelimiterKind::DeleteOperation, "''", Dialect::Script),
        ];
        assert!(matches!(
            validate(&records, OperationKind::Substitute),
            Err(SyncError::AmbiguousBatch(_))
        ));
    }

    #[test]
    fn test_missing_whole_text() {
        let records = vec![EditRecord::for_line(
            0,
            0,
            DelimiterKind::Single,
            "x",
            Dialect::TemplateSfc,
        )];
        assert!(shared_whole_text(&records).is_err());
    }
}
