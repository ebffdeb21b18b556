//! Tests for JSX and TSX corrections.

use quote_ast::Dialect;
use quote_sync::{DelimiterKind, Dispatcher, EditRecord, LocatorConfig};

fn record(offset: usize, line: usize, delimiter: DelimiterKind, text: &str) -> EditRecord {
    EditRecord::for_line(offset, line, delimiter, text, Dialect::ReactJsx)
}

fn dispatcher() -> Dispatcher {
    Dispatcher::new(LocatorConfig::default())
}

#[test]
fn test_import_source() {
    let line = "import React, {useEffect} from \"react\";";
    let results = dispatcher().correct(&[record(31, 0, DelimiterKind::Single, line)]);
    assert_eq!(
        results[0].line_text.as_deref(),
        Some("import React, {useEffect} from 'react';")
    );

    let line = "import React, {useEffect} from 'react';";
    let results = dispatcher().correct(&[record(31, 0, DelimiterKind::Double, line)]);
    assert_eq!(
        results[0].line_text.as_deref(),
        Some("import React, {useEffect} from \"react\";")
    );
}

#[test]
fn test_attribute_value() {
    let line = "<input type=\"text\" name=\"username\" />";
    let results = dispatcher().correct(&[record(12, 0, DelimiterKind::Single, line)]);
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].line_text.as_deref(),
        Some("<input type='text' name=\"username\" />")
    );
}

#[test]
fn test_attribute_rejects_back_quote() {
    let line = "<input type=\"text\" name=\"username\" />";
    let results = dispatcher().correct(&[record(12, 0, DelimiterKind::BackQuote, line)]);
    assert!(results.is_empty());
}

#[test]
fn test_attribute_rejects_pair_deletion() {
    let line = "<input type=\"\" />";
    let results = dispatcher().delete_pair(&[record(12, 0, DelimiterKind::DeleteOperation, line)]);
    assert!(results.is_empty());
}

#[test]
fn test_several_lines() {
    let records = vec![
        record(12, 0, DelimiterKind::Single, "<input type=\"text\" name=\"username\" />"),
        record(21, 1, DelimiterKind::Single, "<input type=\"password\" name=\"password\" />"),
        record(20, 2, DelimiterKind::Single, "<button type=\"submit\">登录</button>"),
    ];
    let results = dispatcher().correct(&records);

    let texts: Vec<_> = results.iter().filter_map(|r| r.line_text.as_deref()).collect();
    assert_eq!(
        texts,
        vec![
            "<input type='text' name=\"username\" />",
            "<input type='password' name=\"password\" />",
            "<button type='submit'>登录</button>",
        ]
    );
}

#[test]
fn test_tsx_literal_type() {
    let line = "type Size = \"sm\" | \"lg\";";
    let record = EditRecord::for_line(19, 0, DelimiterKind::Single, line, Dialect::ReactTsx);
    let results = dispatcher().correct(&[record]);
    assert_eq!(
        results[0].line_text.as_deref(),
        Some("type Size = \"sm\" | 'lg';")
    );
}

#[test]
fn test_back_quote_in_expression_container() {
    let line = "<div className={\"box\"} />";
    let record = EditRecord::for_line(16, 0, DelimiterKind::BackQuote, line, Dialect::ReactTsx);
    let results = dispatcher().correct(&[record]);
    assert_eq!(
        results[0].line_text.as_deref(),
        Some("<div className={`box`} />")
    );
}

#[test]
fn test_offset_off_boundary_is_dropped() {
    let line = "<input type=\"text\" name=\"username\" />";
    for dialect in [Dialect::ReactJsx, Dialect::ReactTsx] {
        for offset in [11, 14, 19, 30] {
            let record = EditRecord::for_line(offset, 0, DelimiterKind::Single, line, dialect);
            assert!(
                dispatcher().correct(&[record]).is_empty(),
                "{dialect} offset {offset}"
            );
        }
    }
}
