//! quote-sync - Paired quotation mark synchronization
//!
//! When one delimiter of a string literal, template literal or attribute
//! value is replaced or deleted, the engine computes the text that brings the
//! other delimiter in line.
//!
//! # Pipeline
//!
//! Raw editor changes are classified against the last snapshot, turned into
//! [`EditRecord`]s, routed by the [`Dispatcher`] to the locator for their
//! dialect, and rewritten into [`CorrectionResult`]s. [`Session`] wires the
//! stages together and keeps the state that outlives a batch.
//!
//! # Architecture
//!
//! ```text
//! quote-sync/src/
//! ├── lib.rs          # Re-exports (this file)
//! ├── error.rs        # SyncError enum (thiserror)
//! ├── types.rs        # EditRecord, CorrectionResult, RawEdit, ...
//! ├── text.rs         # Line and column lookup
//! ├── classifier.rs   # Raw edit → quote edit
//! ├── snapshot.rs     # Per-document pre-edit text
//! ├── locator/        # Script, React and SFC locators
//! ├── rewriter.rs     # Delimiter substitution and pair deletion
//! ├── dispatcher.rs   # Batch validation and routing
//! ├── undo.rs         # Single-slot undo state
//! ├── session.rs      # Session context
//! ├── config.rs       # YAML settings (system + user)
//! └── diff.rs         # Unified diff previews (similar)
//! ```
//!
//! # Example
//!
//! ```rust
//! use quote_ast::Dialect;
//! use quote_sync::{DelimiterKind, Dispatcher, EditRecord, LocatorConfig};
//!
//! let dispatcher = Dispatcher::new(LocatorConfig::default());
//! let record = EditRecord::for_line(
//!     12,
//!     0,
//!     DelimiterKind::Single,
//!     "console.log(\"zzzz\");",
//!     Dialect::Script,
//! );
//! let results = dispatcher.correct(&[record]);
//! assert_eq!(results[0].line_text.as_deref(), Some("console.log('zzzz');"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod classifier;
mod config;
mod diff;
mod dispatcher;
mod error;
pub mod locator;
mod rewriter;
mod session;
mod snapshot;
mod text;
mod types;
mod undo;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use classifier::classify;
pub use config::{
    ActivationSettings, ParserSettings, SyncConfig, SyncSettings, load_sync_settings,
    load_sync_settings_from_paths, set_config_home_override, sync_settings_paths,
};
pub use diff::{generate_unified_diff, render_corrections};
pub use dispatcher::Dispatcher;
pub use error::SyncError;
pub use locator::{Locator, LocatorConfig, LocatorTable, find_boundary_match};
pub use rewriter::{delete_pair, length_delta, rewrite, substitute};
pub use session::Session;
pub use snapshot::SnapshotTracker;
pub use text::{TextLines, byte_offset, char_at, utf16_offset};
pub use types::{
    ClassifiedEdit, CorrectionResponse, CorrectionResult, DelimiterKind, EditRecord,
    OperationKind, Position, RawEdit, TextRange,
};
pub use undo::UndoCoordinator;
