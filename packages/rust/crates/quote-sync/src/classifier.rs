//! Change classification.
//!
//! Filters a batch of raw editor changes down to the ones that replace or
//! delete a quote delimiter. Pure function of the batch and the pre-edit
//! snapshot.

use std::collections::HashSet;

use crate::text::{TextLines, byte_offset, char_at};
use crate::types::{ClassifiedEdit, DelimiterKind, RawEdit};

/// Classify `edits` against the document text they were applied to.
///
/// Only single-line edits covering exactly one character qualify:
///
/// - replacing a delimiter with a (possibly different) delimiter is a
///   substitution;
/// - deleting one side of an empty literal (`''`, `""`, ` `` `) is a pair
///   deletion, reported at the literal's opening delimiter.
///
/// A batch with two qualifying edits on the same line is ambiguous and
/// yields nothing.
#[must_use]
pub fn classify(edits: &[RawEdit], prior_text: &str) -> Vec<ClassifiedEdit> {
    let lines = TextLines::new(prior_text);
    let mut seen_lines = HashSet::new();
    let mut accepted = Vec::new();

    for edit in edits {
        let Some(classified) = classify_one(edit, &lines) else {
            continue;
        };
        if !seen_lines.insert(classified.line_index) {
            tracing::debug!(
                line = classified.line_index,
                "several quote edits on one line; discarding batch"
            );
            return Vec::new();
        }
        accepted.push(classified);
    }

    accepted
}

fn classify_one(edit: &RawEdit, lines: &TextLines<'_>) -> Option<ClassifiedEdit> {
    if edit.range.char_len()? != 1 {
        return None;
    }

    let line_index = edit.range.start.line;
    let line = lines.line(line_index)?;
    let line_start = lines.line_start(line_index)?;
    let column = byte_offset(line, edit.range.start.character)?;
    let replaced = char_at(line, column)?;
    let replaced_quote = DelimiterKind::from_char(replaced)?;

    if let Some(delimiter) = DelimiterKind::from_text(&edit.text) {
        return Some(ClassifiedEdit {
            line_index,
            column,
            document_offset: line_start + column,
            delimiter,
            is_pair_deletion: false,
        });
    }

    if !edit.text.is_empty() {
        return None;
    }

    // The deleted delimiter must have an identical neighbour: left means the
    // closing side went away, right means the opening side did.
    let left = line[..column]
        .chars()
        .next_back()
        .and_then(DelimiterKind::from_char);
    let right = char_at(line, column + replaced.len_utf8()).and_then(DelimiterKind::from_char);
    let opening = if left == Some(replaced_quote) {
        column - replaced.len_utf8()
    } else if right == Some(replaced_quote) {
        column
    } else {
        return None;
    };

    Some(ClassifiedEdit {
        line_index,
        column: opening,
        document_offset: line_start + opening,
        delimiter: DelimiterKind::DeleteOperation,
        is_pair_deletion: true,
    })
}
