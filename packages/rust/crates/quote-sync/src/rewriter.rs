//! Text rewriting for a located literal.

use quote_ast::LiteralSpan;

use crate::error::SyncError;
use crate::types::DelimiterKind;

/// Apply `delimiter` to the literal at `span` inside `window`.
///
/// A quote substitutes both delimiters; `DeleteOperation` removes the whole
/// span.
pub fn rewrite(
    window: &str,
    span: LiteralSpan,
    delimiter: DelimiterKind,
) -> Result<String, SyncError> {
    match delimiter.as_char() {
        Some(quote) => substitute(window, span, quote),
        None => delete_pair(window, span),
    }
}

/// Replace both delimiters of `span` with `quote`, leaving the body as is.
///
/// Mismatched delimiters heal to a consistent pair.
pub fn substitute(window: &str, span: LiteralSpan, quote: char) -> Result<String, SyncError> {
    let (head, body, tail) = split(window, span)?;
    let mut out = String::with_capacity(window.len() + 2 * quote.len_utf8());
    out.push_str(head);
    out.push(quote);
    out.push_str(body);
    out.push(quote);
    out.push_str(tail);
    Ok(out)
}

/// Remove the literal at `span`.
pub fn delete_pair(window: &str, span: LiteralSpan) -> Result<String, SyncError> {
    let (head, _, tail) = split(window, span)?;
    Ok([head, tail].concat())
}

/// Byte difference between the input window and its rewrite.
#[must_use]
pub fn length_delta(span: LiteralSpan, delimiter: DelimiterKind) -> usize {
    match delimiter {
        DelimiterKind::DeleteOperation => span.len(),
        _ => 0,
    }
}

/// Split `window` into text before the literal, the literal body and text after it.
fn split(window: &str, span: LiteralSpan) -> Result<(&str, &str, &str), SyncError> {
    let no_match = || SyncError::NoMatch { offset: span.start };
    if span.len() < 2 {
        return Err(no_match());
    }

    let literal = window.get(span.start..span.end).ok_or_else(no_match)?;
    let open_len = literal.chars().next().map_or(0, char::len_utf8);
    let close_len = literal.chars().next_back().map_or(0, char::len_utf8);
    if open_len + close_len > literal.len() {
        return Err(no_match());
    }

    Ok((
        &window[..span.start],
        &literal[open_len..literal.len() - close_len],
        &window[span.end..],
    ))
}
