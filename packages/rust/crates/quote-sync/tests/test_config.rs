//! Tests for settings loading and merging.

use std::fs;

use quote_ast::Dialect;
use quote_sync::{SyncConfig, load_sync_settings_from_paths};
use tempfile::TempDir;

#[test]
fn test_user_overrides_system() {
    let dir = TempDir::new().unwrap();
    let system = dir.path().join("system.yaml");
    let user = dir.path().join("user.yaml");
    fs::write(
        &system,
        "activation:\n  activation_on_language: [javascript, vue]\nparser:\n  strict_parse: true\n",
    )
    .unwrap();
    fs::write(&user, "parser:\n  strict_parse: false\n").unwrap();

    let config = SyncConfig::from(load_sync_settings_from_paths(&system, &user));
    assert!(!config.strict_parse);
    assert!(config.is_enabled(Dialect::Script));
    assert!(config.is_enabled(Dialect::TemplateSfc));
    assert!(!config.is_enabled(Dialect::TypedScript));
}

#[test]
fn test_camel_case_activation_key() {
    let dir = TempDir::new().unwrap();
    let user = dir.path().join("settings.yaml");
    fs::write(&user, "activation:\n  activationOnLanguage:\n    - typescript\n").unwrap();

    let settings = load_sync_settings_from_paths(&dir.path().join("absent.yaml"), &user);
    let config = SyncConfig::from(settings);
    assert_eq!(
        config.enabled_dialects.into_iter().collect::<Vec<_>>(),
        vec![Dialect::TypedScript]
    );
}

#[test]
fn test_missing_and_invalid_files_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.yaml");
    fs::write(&broken, "activation: [not, a, map").unwrap();
    let empty = dir.path().join("empty.yaml");
    fs::write(&empty, "").unwrap();

    let config = SyncConfig::from(load_sync_settings_from_paths(&broken, &empty));
    assert_eq!(config, SyncConfig::default());
}
