//! Tests for dialect module - dialect detection.

use std::path::Path;

use quote_ast::{Dialect, Grammar};

#[test]
fn test_from_extension() {
    assert_eq!(Dialect::from_extension("js"), Some(Dialect::Script));
    assert_eq!(Dialect::from_extension("mts"), Some(Dialect::TypedScript));
    assert_eq!(Dialect::from_extension("jsx"), Some(Dialect::ReactJsx));
    assert_eq!(Dialect::from_extension("tsx"), Some(Dialect::ReactTsx));
    assert_eq!(Dialect::from_extension("vue"), Some(Dialect::TemplateSfc));
    assert_eq!(Dialect::from_extension("py"), None);
}

#[test]
fn test_from_path() {
    assert_eq!(
        Dialect::from_path(Path::new("src/App.VUE")),
        Some(Dialect::TemplateSfc)
    );
    assert_eq!(Dialect::from_path(Path::new("Makefile")), None);
}

#[test]
fn test_try_from() {
    let dialect: Dialect = "typescriptreact".try_into().unwrap();
    assert_eq!(dialect, Dialect::ReactTsx);
    assert_eq!(dialect.language_id(), "typescriptreact");

    let dialect: Dialect = "TS".try_into().unwrap();
    assert_eq!(dialect, Dialect::TypedScript);

    assert!(Dialect::try_from("java").is_err());
}

#[test]
fn test_serde_uses_language_id() {
    let json = serde_json::to_string(&Dialect::ReactJsx).unwrap();
    assert_eq!(json, "\"javascriptreact\"");
    let back: Dialect = serde_json::from_str("\"vue\"").unwrap();
    assert_eq!(back, Dialect::TemplateSfc);
}

#[test]
fn test_region_flags() {
    assert!(Dialect::TemplateSfc.is_multi_region());
    assert!(!Dialect::Script.is_multi_region());
    assert!(Dialect::ReactTsx.has_markup());
    assert!(!Dialect::TypedScript.has_markup());
    assert_eq!(Dialect::TypedScript.grammar(), Grammar::TypeScript);
}
