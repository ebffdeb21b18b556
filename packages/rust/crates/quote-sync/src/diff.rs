//! Diff rendering for correction previews.
//!
//! Used by the `preview` command to show what a correction changes.

use similar::TextDiff;

use crate::types::CorrectionResult;

const CONTEXT_LINES: usize = 3;

/// Unified diff of `before` against `after`, with three lines of context.
///
/// Identical inputs render as an empty string.
#[must_use]
pub fn generate_unified_diff(before: &str, after: &str) -> String {
    unified(before, after, None)
}

/// Render every correction as a diff. Line results carry a `line N` header
/// (one-based), document results a `document` header.
#[must_use]
pub fn render_corrections(results: &[CorrectionResult]) -> String {
    results
        .iter()
        .filter_map(|result| {
            let before = result.previous_text()?;
            let after = result.replacement_text()?;
            let label = result
                .line_index
                .map_or_else(|| "document".to_string(), |line| format!("line {}", line + 1));
            Some(unified(before, after, Some(&label)))
        })
        .collect()
}

fn unified(before: &str, after: &str, label: Option<&str>) -> String {
    let diff = TextDiff::from_lines(before, after);
    let mut output = diff.unified_diff();
    output
        .context_radius(CONTEXT_LINES)
        .missing_newline_hint(false);
    if let Some(label) = label {
        output.header(label, label);
    }
    output.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperationKind;

    #[test]
    fn test_simple_diff() {
        let diff = generate_unified_diff("a\nf(\"x\");\nb", "a\nf('x');\nb");
        assert!(diff.contains("-f(\"x\");"));
        assert!(diff.contains("+f('x');"));
    }

    #[test]
    fn test_no_changes() {
        let diff = generate_unified_diff("same", "same");
        assert!(!diff.contains('-') && !diff.contains('+'));
    }

    #[test]
    fn test_render_line_result() {
        let results = vec![CorrectionResult::for_line(
            4,
            "f();",
            "f('');",
            OperationKind::DeletePair,
        )];
        let rendered = render_corrections(&results);
        assert!(rendered.starts_with("--- line 5\n+++ line 5\n"));
        assert!(rendered.contains("-f('');"));
        assert!(rendered.contains("+f();"));
    }
}
