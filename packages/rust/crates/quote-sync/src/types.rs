//! Core types for quote synchronization.
//!
//! Defines the request and response shapes exchanged with the editor
//! integration, plus the raw change events the classifier consumes.

use serde::{Deserialize, Serialize};

use quote_ast::Dialect;

/// Delimiter requested by an edit, or the pair-deletion marker.
///
/// Serialized as the delimiter character itself, `"delete"` for deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelimiterKind {
    /// `'`
    #[serde(rename = "'")]
    Single,
    /// `"`
    #[serde(rename = "\"")]
    Double,
    /// `` ` ``
    #[serde(rename = "`")]
    BackQuote,
    /// Collapse an empty literal
    #[serde(rename = "delete")]
    DeleteOperation,
}

impl DelimiterKind {
    /// The three quoting delimiters.
    pub const QUOTES: [Self; 3] = [Self::Single, Self::Double, Self::BackQuote];

    /// Delimiter for a quote character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Self::Single),
            '"' => Some(Self::Double),
            '`' => Some(Self::BackQuote),
            _ => None,
        }
    }

    /// Delimiter for inserted text that is exactly one quote character
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Quote character, `None` for `DeleteOperation`
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Single => Some('\''),
            Self::Double => Some('"'),
            Self::BackQuote => Some('`'),
            Self::DeleteOperation => None,
        }
    }

    /// Operation implied by this delimiter
    #[must_use]
    pub fn operation(&self) -> OperationKind {
        match self {
            Self::DeleteOperation => OperationKind::DeletePair,
            _ => OperationKind::Substitute,
        }
    }
}

impl std::fmt::Display for DelimiterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_char() {
            Some(c) => write!(f, "{c}"),
            None => f.write_str("delete"),
        }
    }
}

/// What a batch does to the located literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Replace both delimiters
    Substitute,
    /// Remove an empty literal entirely
    DeletePair,
}

impl OperationKind {
    /// Whether this is a pair deletion
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self, Self::DeletePair)
    }
}

/// One observed delimiter change, ready for the dispatcher.
///
/// `line_text` and `whole_text` hold the text *before* the edit. `offset`
/// counts UTF-16 code units, as editor hosts do, into `line_text`, or into
/// `whole_text` for multi-region dialects. The dispatcher converts it to a
/// byte offset before locating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRecord {
    /// UTF-16 offset of the changed delimiter
    pub offset: usize,
    /// Zero-based line of the change
    pub line_index: usize,
    /// Requested delimiter
    #[serde(alias = "quoteMark")]
    pub delimiter: DelimiterKind,
    /// Full text of the changed line
    pub line_text: String,
    /// Dialect of the document
    #[serde(alias = "languageId")]
    pub dialect: Dialect,
    /// Full document text, required for multi-region dialects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whole_text: Option<String>,
}

impl EditRecord {
    /// Record for a single-region dialect
    pub fn for_line(
        offset: usize,
        line_index: usize,
        delimiter: DelimiterKind,
        line_text: impl Into<String>,
        dialect: Dialect,
    ) -> Self {
        Self {
            offset,
            line_index,
            delimiter,
            line_text: line_text.into(),
            dialect,
            whole_text: None,
        }
    }

    /// Record for a multi-region dialect; `offset` is relative to `whole_text`
    pub fn for_document(
        offset: usize,
        line_index: usize,
        delimiter: DelimiterKind,
        line_text: impl Into<String>,
        whole_text: impl Into<String>,
        dialect: Dialect,
    ) -> Self {
        Self {
            offset,
            line_index,
            delimiter,
            line_text: line_text.into(),
            dialect,
            whole_text: Some(whole_text.into()),
        }
    }

    /// Operation implied by the record's delimiter
    #[must_use]
    pub fn operation(&self) -> OperationKind {
        self.delimiter.operation()
    }
}

/// Corrected text for one line, or for a whole multi-region document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionResult {
    /// Line to replace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_index: Option<usize>,
    /// Replacement line text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_text: Option<String>,
    /// Line text before the correction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_line_text: Option<String>,
    /// Replacement document text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whole_text: Option<String>,
    /// Document text before the correction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_whole_text: Option<String>,
    /// Whether the editor must widen the replaced range for a deletion
    #[serde(default)]
    pub is_delete_operation: bool,
}

impl CorrectionResult {
    /// Result for one corrected line
    pub fn for_line(
        line_index: usize,
        line_text: impl Into<String>,
        old_line_text: impl Into<String>,
        operation: OperationKind,
    ) -> Self {
        Self {
            line_index: Some(line_index),
            line_text: Some(line_text.into()),
            old_line_text: Some(old_line_text.into()),
            is_delete_operation: operation.is_delete(),
            ..Self::default()
        }
    }

    /// Result for a corrected document
    pub fn for_document(
        whole_text: impl Into<String>,
        old_whole_text: impl Into<String>,
        operation: OperationKind,
    ) -> Self {
        Self {
            whole_text: Some(whole_text.into()),
            old_whole_text: Some(old_whole_text.into()),
            is_delete_operation: operation.is_delete(),
            ..Self::default()
        }
    }

    /// Text the editor should write
    #[must_use]
    pub fn replacement_text(&self) -> Option<&str> {
        self.line_text.as_deref().or(self.whole_text.as_deref())
    }

    /// Text the correction replaced
    #[must_use]
    pub fn previous_text(&self) -> Option<&str> {
        self.old_line_text
            .as_deref()
            .or(self.old_whole_text.as_deref())
    }

    /// Patch restoring the pre-correction text.
    ///
    /// The reverse patch replaces the corrected text as a whole, so it is
    /// never a deletion.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            line_index: self.line_index,
            line_text: self.old_line_text.clone(),
            old_line_text: self.line_text.clone(),
            whole_text: self.old_whole_text.clone(),
            old_whole_text: self.whole_text.clone(),
            is_delete_operation: false,
        }
    }
}

/// Editor position: zero-based line and UTF-16 column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line
    pub line: usize,
    /// Zero-based column counted in UTF-16 code units
    pub character: usize,
}

impl Position {
    /// Create a new position
    #[must_use]
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// Range replaced by a raw edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextRange {
    /// Inclusive start
    pub start: Position,
    /// Exclusive end
    pub end: Position,
}

impl TextRange {
    /// Create a new range
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Whether start and end are on the same line
    #[must_use]
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Whether the range is a point
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// UTF-16 code units covered, `None` for multi-line or inverted ranges
    #[must_use]
    pub fn char_len(&self) -> Option<usize> {
        if !self.is_single_line() {
            return None;
        }
        self.end.character.checked_sub(self.start.character)
    }
}

/// One content-change event reported by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEdit {
    /// Range replaced in the pre-edit text
    pub range: TextRange,
    /// Inserted text
    pub text: String,
}

impl RawEdit {
    /// Replace one character at `line:character` with `text`
    pub fn replace_char(line: usize, character: usize, text: impl Into<String>) -> Self {
        Self {
            range: TextRange::new(
                Position::new(line, character),
                Position::new(line, character + 1),
            ),
            text: text.into(),
        }
    }

    /// Delete one character at `line:character`
    #[must_use]
    pub fn delete_char(line: usize, character: usize) -> Self {
        Self::replace_char(line, character, "")
    }
}

/// A raw edit accepted by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedEdit {
    /// Zero-based line
    pub line_index: usize,
    /// Byte offset of the affected delimiter within its line
    pub column: usize,
    /// Byte offset of the affected delimiter within the document
    pub document_offset: usize,
    /// Requested delimiter, `DeleteOperation` for pair deletion
    pub delimiter: DelimiterKind,
    /// Whether an empty literal is being collapsed
    pub is_pair_deletion: bool,
}

/// Corrections for one document, ready to send to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionResponse {
    /// Document the corrections apply to
    pub uri: String,
    /// Whether the results are pair deletions
    pub is_delete_operation: bool,
    /// Ordered corrections
    pub results: Vec<CorrectionResult>,
}
