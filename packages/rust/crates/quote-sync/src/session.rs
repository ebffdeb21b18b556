//! Per-connection synchronization state.
//!
//! A [`Session`] owns everything that lives across change batches: document
//! snapshots, the pending undo slot, the active document and the resolved
//! configuration. One session serves one editor connection and handles one
//! request at a time.

use std::collections::HashMap;

use quote_ast::Dialect;

use crate::classifier::classify;
use crate::config::SyncConfig;
use crate::dispatcher::Dispatcher;
use crate::snapshot::SnapshotTracker;
use crate::text::{TextLines, utf16_offset};
use crate::types::{CorrectionResponse, CorrectionResult, EditRecord, OperationKind, RawEdit};
use crate::undo::UndoCoordinator;

/// Engine state for one editor connection.
pub struct Session {
    config: SyncConfig,
    dispatcher: Dispatcher,
    snapshots: SnapshotTracker,
    undo: UndoCoordinator,
    dialects: HashMap<String, Dialect>,
    active: Option<String>,
}

impl Session {
    /// Create a session with `config`
    #[must_use]
    pub fn new(config: SyncConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(config.locator_config()),
            config,
            snapshots: SnapshotTracker::new(),
            undo: UndoCoordinator::new(),
            dialects: HashMap::new(),
            active: None,
        }
    }

    /// Resolved configuration
    #[must_use]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Start tracking a document and make it the active one.
    ///
    /// Documents in an unknown language are tracked but never corrected.
    pub fn open_document(&mut self, uri: &str, language_id: &str, text: impl Into<String>) {
        match Dialect::from_language_id(language_id) {
            Some(dialect) => {
                self.dialects.insert(uri.to_string(), dialect);
            }
            None => {
                self.dialects.remove(uri);
            }
        }
        self.snapshots.record_snapshot(uri, text);
        self.active = Some(uri.to_string());
        tracing::debug!(uri, language_id, "document opened");
    }

    /// Make a tracked document the active one. Untracked URIs are ignored.
    pub fn activate(&mut self, uri: &str) -> bool {
        if !self.snapshots.is_tracked(uri) {
            return false;
        }
        self.active = Some(uri.to_string());
        true
    }

    /// URI of the active document
    #[must_use]
    pub fn active_document(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Stop tracking a document and drop its undo state.
    pub fn close_document(&mut self, uri: &str) {
        self.snapshots.drop_snapshot(uri);
        self.dialects.remove(uri);
        if self.active.as_deref() == Some(uri) {
            self.active = None;
        }
        if self.undo.pending_uri() == Some(uri) {
            self.undo.clear();
        }
        tracing::debug!(uri, "document closed");
    }

    /// Dialect of a tracked document
    #[must_use]
    pub fn dialect_of(&self, uri: &str) -> Option<Dialect> {
        self.dialects.get(uri).copied()
    }

    /// Pre-edit snapshot of a tracked document
    #[must_use]
    pub fn snapshot(&self, uri: &str) -> Option<&str> {
        self.snapshots.snapshot(uri)
    }

    /// Process one change batch reported by the editor.
    ///
    /// `edits` are relative to the current snapshot; `new_text` is the document
    /// after they were applied and becomes the next snapshot whatever the
    /// outcome.
    ///
    /// A pending undo for `uri` survives only changes that leave its corrected
    /// text in place, such as the editor applying the correction itself.
    pub fn handle_change(
        &mut self,
        uri: &str,
        edits: &[RawEdit],
        new_text: impl Into<String>,
    ) -> Option<CorrectionResponse> {
        let new_text = new_text.into();
        let response = self.correction_for(uri, edits);
        if self.undo.pending_uri() == Some(uri) && !self.undo.is_applied_to(&new_text) {
            tracing::debug!(uri, "corrected text changed; dropping pending undo");
            self.undo.clear();
        }
        if self.snapshots.is_tracked(uri) {
            self.snapshots.record_snapshot(uri, new_text);
        }

        let response = response?;
        self.undo.record(uri, response.results.clone());
        Some(response)
    }

    fn correction_for(&self, uri: &str, edits: &[RawEdit]) -> Option<CorrectionResponse> {
        if self.active.as_deref() != Some(uri) {
            return None;
        }
        let dialect = self.dialect_of(uri)?;
        if !self.config.is_enabled(dialect) {
            return None;
        }
        let prior = self.snapshots.snapshot(uri)?;

        let classified = classify(edits, prior);
        if classified.is_empty() {
            return None;
        }

        let lines = TextLines::new(prior);
        let records: Vec<EditRecord> = classified
            .iter()
            .filter_map(|edit| {
                let line_text = lines.line(edit.line_index)?;
                Some(if dialect.is_multi_region() {
                    EditRecord::for_document(
                        utf16_offset(prior, edit.document_offset)?,
                        edit.line_index,
                        edit.delimiter,
                        line_text,
                        prior,
                        dialect,
                    )
                } else {
                    EditRecord::for_line(
                        utf16_offset(line_text, edit.column)?,
                        edit.line_index,
                        edit.delimiter,
                        line_text,
                        dialect,
                    )
                })
            })
            .collect();

        let operation = records.first()?.operation();
        let results = self.dispatcher.dispatch(&records, operation);
        if results.is_empty() {
            return None;
        }
        tracing::debug!(
            uri,
            results = results.len(),
            delete = operation.is_delete(),
            "computed corrections"
        );
        Some(CorrectionResponse {
            uri: uri.to_string(),
            is_delete_operation: operation.is_delete(),
            results,
        })
    }

    /// Reverse the last correction applied to `uri`, if it is still pending.
    ///
    /// The correction must be present in the current snapshot; otherwise the
    /// pending state is stale and is dropped.
    pub fn handle_undo(&mut self, uri: &str) -> Option<CorrectionResponse> {
        if self.undo.pending_uri() != Some(uri) {
            return None;
        }
        let current = self.snapshots.snapshot(uri).unwrap_or_default();
        if !self.undo.is_applied_to(current) {
            tracing::debug!(uri, "correction no longer in document; dropping pending undo");
            self.undo.clear();
            return None;
        }
        let results = self.undo.take_reverse(uri)?;
        tracing::debug!(uri, results = results.len(), "replaying undo");
        Some(CorrectionResponse {
            uri: uri.to_string(),
            is_delete_operation: false,
            results,
        })
    }

    /// Substitute delimiters for explicit records.
    #[must_use]
    pub fn correct(&self, records: &[EditRecord]) -> Vec<CorrectionResult> {
        self.dispatcher.dispatch(records, OperationKind::Substitute)
    }

    /// Collapse empty literals for explicit records.
    #[must_use]
    pub fn delete_pair(&self, records: &[EditRecord]) -> Vec<CorrectionResult> {
        self.dispatcher.dispatch(records, OperationKind::DeletePair)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SyncConfig::default())
    }
}
