//! Line lookup over a document snapshot.

use std::cmp::Ordering;

/// Byte offsets of line starts in a text.
///
/// Lines are split on `\n`; a trailing `\r` is not part of the line text.
pub struct TextLines<'a> {
    text: &'a str,
    starts: Vec<usize>,
}

impl<'a> TextLines<'a> {
    /// Index the lines of `text`
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, starts }
    }

    /// Number of lines (an empty text has one empty line)
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Byte offset where `line` starts
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.starts.get(line).copied()
    }

    /// Text of `line` without its line terminator
    #[must_use]
    pub fn line(&self, line: usize) -> Option<&'a str> {
        let start = self.line_start(line)?;
        let end = self
            .starts
            .get(line + 1)
            .map_or(self.text.len(), |next| next - 1);
        let raw = self.text.get(start..end)?;
        Some(raw.strip_suffix('\r').unwrap_or(raw))
    }
}

/// Byte offset of UTF-16 code unit `offset` in `text`.
///
/// Editor hosts count columns and offsets in UTF-16 code units. The UTF-16
/// length of `text` maps to `text.len()`; an offset that splits a surrogate
/// pair has no byte offset.
#[must_use]
pub fn byte_offset(text: &str, offset: usize) -> Option<usize> {
    let mut units = 0;
    for (index, c) in text.char_indices() {
        match units.cmp(&offset) {
            Ordering::Equal => return Some(index),
            Ordering::Greater => return None,
            Ordering::Less => units += c.len_utf16(),
        }
    }
    (units == offset).then_some(text.len())
}

/// UTF-16 length of `text[..byte]`, `None` when `byte` is not a char boundary.
#[must_use]
pub fn utf16_offset(text: &str, byte: usize) -> Option<usize> {
    Some(text.get(..byte)?.encode_utf16().count())
}

/// Character at byte `offset`, `None` when out of range or not a boundary.
#[must_use]
pub fn char_at(text: &str, offset: usize) -> Option<char> {
    text.get(offset..)?.chars().next()
}
