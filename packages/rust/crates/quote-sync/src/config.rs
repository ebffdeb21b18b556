//! Settings loader for quote synchronization.
//!
//! Loads and merges:
//! - System defaults: `<PRJ_ROOT>/packages/conf/quote-sync.yaml`
//! - User overrides:  `<PRJ_CONFIG_HOME>/quote-sync/settings.yaml`
//!
//! Merge precedence is user over system. Missing or invalid files are
//! ignored with a warning.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use quote_ast::Dialect;
use serde::Deserialize;

use crate::locator::LocatorConfig;

const DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH: &str = "packages/conf/quote-sync.yaml";
const DEFAULT_USER_SETTINGS_RELATIVE_PATH: &str = "quote-sync/settings.yaml";
const DEFAULT_CONFIG_HOME_RELATIVE_PATH: &str = ".config";
static CONFIG_HOME_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

/// Settings file contents; every field is optional so files can be layered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncSettings {
    /// Which documents take part
    #[serde(default)]
    pub activation: ActivationSettings,
    /// Parser behaviour
    #[serde(default)]
    pub parser: ParserSettings,
}

/// Language activation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivationSettings {
    /// Editor language ids to synchronize
    #[serde(alias = "activationOnLanguage")]
    pub activation_on_language: Option<Vec<String>>,
}

/// Parser options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParserSettings {
    /// Reject trees that needed error recovery
    pub strict_parse: Option<bool>,
}

impl SyncSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            activation: self.activation.merge(overlay.activation),
            parser: self.parser.merge(overlay.parser),
        }
    }
}

impl ActivationSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            activation_on_language: overlay
                .activation_on_language
                .or(self.activation_on_language),
        }
    }
}

impl ParserSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            strict_parse: overlay.strict_parse.or(self.strict_parse),
        }
    }
}

/// Resolved engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Dialects the session acts on
    pub enabled_dialects: BTreeSet<Dialect>,
    /// Treat recovered syntax errors as parse failures
    pub strict_parse: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled_dialects: Dialect::ALL.into_iter().collect(),
            strict_parse: false,
        }
    }
}

impl SyncConfig {
    /// Whether documents of `dialect` are synchronized
    #[must_use]
    pub fn is_enabled(&self, dialect: Dialect) -> bool {
        self.enabled_dialects.contains(&dialect)
    }

    /// Options handed to the locators
    #[must_use]
    pub fn locator_config(&self) -> LocatorConfig {
        LocatorConfig {
            strict_parse: self.strict_parse,
        }
    }
}

impl From<SyncSettings> for SyncConfig {
    fn from(settings: SyncSettings) -> Self {
        let defaults = Self::default();
        let enabled_dialects = match settings.activation.activation_on_language {
            Some(ids) => ids
                .iter()
                .filter_map(|id| {
                    let dialect = Dialect::from_language_id(id.trim());
                    if dialect.is_none() {
                        tracing::warn!(
                            language = %id,
                            "unknown language id in activation list"
                        );
                    }
                    dialect
                })
                .collect(),
            None => defaults.enabled_dialects,
        };
        Self {
            enabled_dialects,
            strict_parse: settings.parser.strict_parse.unwrap_or(defaults.strict_parse),
        }
    }
}

/// Load settings from the system and user locations.
#[must_use]
pub fn load_sync_settings() -> SyncSettings {
    let (system_path, user_path) = sync_settings_paths();
    load_sync_settings_from_paths(&system_path, &user_path)
}

/// System and user settings paths.
#[must_use]
pub fn sync_settings_paths() -> (PathBuf, PathBuf) {
    let root = project_root();
    let system_path = root.join(DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH);
    let user_path = config_home(&root).join(DEFAULT_USER_SETTINGS_RELATIVE_PATH);
    (system_path, user_path)
}

/// Load and merge two explicit settings files.
#[must_use]
pub fn load_sync_settings_from_paths(system: &Path, user: &Path) -> SyncSettings {
    load_one(system).merge(load_one(user))
}

fn load_one(path: &Path) -> SyncSettings {
    if !path.exists() {
        return SyncSettings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to read settings file; ignoring"
            );
            return SyncSettings::default();
        }
    };
    match serde_yaml::from_str::<Option<SyncSettings>>(&raw) {
        Ok(value) => value.unwrap_or_default(),
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to parse settings yaml; ignoring file"
            );
            SyncSettings::default()
        }
    }
}

/// Non-empty path from an environment variable.
fn env_path(key: &str) -> Option<PathBuf> {
    let value = std::env::var(key).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| PathBuf::from(value))
}

fn project_root() -> PathBuf {
    env_path("PRJ_ROOT")
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Set the settings home used instead of `PRJ_CONFIG_HOME` (CLI `--conf`).
///
/// Relative paths resolve against the project root. Only the first call
/// takes effect.
pub fn set_config_home_override(path: impl Into<PathBuf>) {
    let path = path.into();
    if path.as_os_str().is_empty() {
        return;
    }
    if let Err(ignored) = CONFIG_HOME_OVERRIDE.set(path)
        && CONFIG_HOME_OVERRIDE.get() != Some(&ignored)
    {
        tracing::warn!(
            ignored = %ignored.display(),
            "config home override already set; keeping the first value"
        );
    }
}

/// `--conf` override, then `PRJ_CONFIG_HOME`, then `.config`; relative
/// homes sit under `project_root`.
fn config_home(project_root: &Path) -> PathBuf {
    let home = CONFIG_HOME_OVERRIDE
        .get()
        .cloned()
        .or_else(|| env_path("PRJ_CONFIG_HOME"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_HOME_RELATIVE_PATH));
    if home.is_absolute() {
        home
    } else {
        project_root.join(home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_every_dialect() {
        let config = SyncConfig::from(SyncSettings::default());
        assert_eq!(config, SyncConfig::default());
        assert!(Dialect::ALL.iter().all(|d| config.is_enabled(*d)));
    }

    #[test]
    fn test_activation_list() {
        let settings: SyncSettings = serde_yaml::from_str(
            "activation:\n  activation_on_language: [vue, typescriptreact, cobol]\n",
        )
        .unwrap();
        let config = SyncConfig::from(settings);
        assert!(config.is_enabled(Dialect::TemplateSfc));
        assert!(config.is_enabled(Dialect::ReactTsx));
        assert!(!config.is_enabled(Dialect::Script));
        assert_eq!(config.enabled_dialects.len(), 2);
    }
}
