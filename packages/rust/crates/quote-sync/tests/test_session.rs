//! Tests for the session flow: open, change, undo, close.

use quote_ast::Dialect;
use quote_sync::{Position, RawEdit, Session, SyncConfig, TextRange};

const URI: &str = "file:///src/app.js";
const SOURCE: &str = "import fs from \"fs\";\nconsole.log(\"zzzz\");\nf('');\n";

fn apply(text: &str, line: usize, column: usize, replacement: &str) -> String {
    let start = text
        .split_inclusive('\n')
        .take(line)
        .map(str::len)
        .sum::<usize>()
        + column;
    let width = text[start..].chars().next().map_or(0, char::len_utf8);
    format!("{}{}{}", &text[..start], replacement, &text[start + width..])
}

fn replace_line(line: usize, old: &str, new: &str) -> RawEdit {
    RawEdit {
        range: TextRange::new(
            Position::new(line, 0),
            Position::new(line, old.encode_utf16().count()),
        ),
        text: new.to_string(),
    }
}

#[test]
fn test_substitution_flow() {
    let mut session = Session::default();
    session.open_document(URI, "javascript", SOURCE);

    let edits = vec![RawEdit::replace_char(1, 12, "'")];
    let live = apply(SOURCE, 1, 12, "'");
    let response = session.handle_change(URI, &edits, live.clone()).unwrap();

    assert_eq!(response.uri, URI);
    assert!(!response.is_delete_operation);
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].line_index, Some(1));
    assert_eq!(
        response.results[0].line_text.as_deref(),
        Some("console.log('zzzz');")
    );
    assert_eq!(session.snapshot(URI), Some(live.as_str()));
}

#[test]
fn test_pair_deletion_flow() {
    let mut session = Session::default();
    session.open_document(URI, "javascript", SOURCE);

    let edits = vec![RawEdit::delete_char(2, 3)];
    let live = apply(SOURCE, 2, 3, "");
    let response = session.handle_change(URI, &edits, live).unwrap();

    assert!(response.is_delete_operation);
    let result = &response.results[0];
    assert_eq!(result.line_text.as_deref(), Some("f();"));
    assert_eq!(result.old_line_text.as_deref(), Some("f('');"));
}

#[test]
fn test_undo_replays_previous_text() {
    let mut session = Session::default();
    session.open_document(URI, "javascript", SOURCE);

    let edits = vec![RawEdit::replace_char(0, 15, "`")];
    let live = apply(SOURCE, 0, 15, "`");
    let forward = session.handle_change(URI, &edits, live).unwrap();
    assert_eq!(
        forward.results[0].line_text.as_deref(),
        Some("import fs from `fs`;")
    );

    let applied = SOURCE.replacen("\"fs\"", "`fs`", 1);
    let edit = replace_line(0, "import fs from `fs\";", "import fs from `fs`;");
    assert!(session.handle_change(URI, &[edit], applied).is_none());

    let reverse = session.handle_undo(URI).unwrap();
    assert!(!reverse.is_delete_operation);
    assert_eq!(
        reverse.results[0].line_text.as_deref(),
        Some("import fs from \"fs\";")
    );
    assert_eq!(
        reverse.results[0].old_line_text.as_deref(),
        Some("import fs from `fs`;")
    );
    assert!(session.handle_undo(URI).is_none());
}

#[test]
fn test_irrelevant_change_updates_snapshot_only() {
    let mut session = Session::default();
    session.open_document(URI, "javascript", SOURCE);

    let edits = vec![RawEdit::replace_char(0, 7, "g")];
    let live = apply(SOURCE, 0, 7, "g");
    assert!(session.handle_change(URI, &edits, live.clone()).is_none());
    assert_eq!(session.snapshot(URI), Some(live.as_str()));
    assert!(session.handle_undo(URI).is_none());
}

#[test]
fn test_disabled_dialect() {
    let config = SyncConfig {
        enabled_dialects: [Dialect::TemplateSfc].into_iter().collect(),
        ..SyncConfig::default()
    };
    let mut session = Session::new(config);
    session.open_document(URI, "javascript", SOURCE);

    let edits = vec![RawEdit::replace_char(1, 12, "'")];
    let live = apply(SOURCE, 1, 12, "'");
    assert!(session.handle_change(URI, &edits, live).is_none());
}

#[test]
fn test_activation_switches_documents() {
    let mut session = Session::default();
    session.open_document(URI, "javascript", SOURCE);
    session.open_document("file:///src/other.ts", "typescript", "let x = 1;\n");
    assert_eq!(session.active_document(), Some("file:///src/other.ts"));
    assert!(!session.activate("file:///missing.js"));

    assert!(session.activate(URI));
    let edits = vec![RawEdit::replace_char(1, 12, "'")];
    let live = apply(SOURCE, 1, 12, "'");
    assert!(session.handle_change(URI, &edits, live).is_some());
}

#[test]
fn test_vue_document_returns_whole_text() {
    let uri = "file:///src/Login.vue";
    let doc = "<template>\n  <input v-model=\"name\" />\n</template>\n<script>\nconst a = \"x\";\n</script>\n";
    let mut session = Session::default();
    session.open_document(uri, "vue", doc);

    let edits = vec![RawEdit::replace_char(1, 17, "'")];
    let live = apply(doc, 1, 17, "'");
    let response = session.handle_change(uri, &edits, live).unwrap();

    assert_eq!(response.results.len(), 1);
    let result = &response.results[0];
    assert!(result.line_index.is_none());
    assert_eq!(result.old_whole_text.as_deref(), Some(doc));
    assert_eq!(
        result.whole_text.as_deref(),
        Some(doc.replacen("\"name\"", "'name'", 1).as_str())
    );
}

#[test]
fn test_close_drops_state() {
    let mut session = Session::default();
    session.open_document(URI, "javascript", SOURCE);
    let edits = vec![RawEdit::replace_char(1, 12, "'")];
    let live = apply(SOURCE, 1, 12, "'");
    assert!(session.handle_change(URI, &edits, live).is_some());

    session.close_document(URI);
    assert!(session.snapshot(URI).is_none());
    assert!(session.active_document().is_none());
    assert!(session.handle_undo(URI).is_none());
}

#[test]
fn test_undo_is_dropped_after_later_edit() {
    let source = "a(\"x\");\n";
    let mut session = Session::default();
    session.open_document(URI, "javascript", source);

    let typed = "a('x\");\n";
    let forward = session
        .handle_change(URI, &[RawEdit::replace_char(0, 2, "'")], typed)
        .unwrap();
    assert_eq!(forward.results[0].line_text.as_deref(), Some("a('x');"));

    let corrected = "a('x');\n";
    let edit = replace_line(0, "a('x\");", "a('x');");
    assert!(session.handle_change(URI, &[edit], corrected).is_none());

    let edit = RawEdit::replace_char(0, 0, "z");
    assert!(session.handle_change(URI, &[edit], "z('x');\n").is_none());

    assert!(session.handle_undo(URI).is_none());
}

#[test]
fn test_undo_before_correction_lands() {
    let source = "a(\"x\");\n";
    let mut session = Session::default();
    session.open_document(URI, "javascript", source);
    let edit = RawEdit::replace_char(0, 2, "'");
    assert!(session.handle_change(URI, &[edit], "a('x\");\n").is_some());
    assert!(session.handle_undo(URI).is_none());
}

#[test]
fn test_columns_after_astral_characters() {
    let source = "log(\"😀\", \"x\");\n";
    let mut session = Session::default();
    session.open_document(URI, "javascript", source);

    // The emoji takes two UTF-16 units, so the second literal opens at 10.
    let live = source.replacen("\"x\"", "'x\"", 1);
    let response = session
        .handle_change(URI, &[RawEdit::replace_char(0, 10, "'")], live)
        .unwrap();
    assert_eq!(
        response.results[0].line_text.as_deref(),
        Some("log(\"😀\", 'x');")
    );
}
