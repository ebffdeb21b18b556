//! Dialect support for quotation mark synchronization.
//!
//! Provides a `Dialect` enum covering the five supported source dialects
//! with detection from editor language ids and file extensions.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AstError;
use crate::grammar::Grammar;

/// Supported source dialects.
///
/// Serialized with the editor language id of the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// Plain JavaScript
    #[serde(rename = "javascript")]
    Script,
    /// TypeScript
    #[serde(rename = "typescript")]
    TypedScript,
    /// JavaScript with JSX markup
    #[serde(rename = "javascriptreact")]
    ReactJsx,
    /// TypeScript with JSX markup
    #[serde(rename = "typescriptreact")]
    ReactTsx,
    /// Vue single-file component (markup + script regions)
    #[serde(rename = "vue")]
    TemplateSfc,
}

impl Dialect {
    /// Every supported dialect, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Script,
        Self::TypedScript,
        Self::ReactJsx,
        Self::ReactTsx,
        Self::TemplateSfc,
    ];

    /// Get the editor language id
    #[must_use]
    pub fn language_id(&self) -> &'static str {
        match self {
            Self::Script => "javascript",
            Self::TypedScript => "typescript",
            Self::ReactJsx => "javascriptreact",
            Self::ReactTsx => "typescriptreact",
            Self::TemplateSfc => "vue",
        }
    }

    /// Resolve a dialect from an editor language id
    #[must_use]
    pub fn from_language_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.language_id() == id)
    }

    /// Try to detect dialect from file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        Self::from_extension(&ext)
    }

    /// Try to detect dialect from extension string
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" | "mjs" | "cjs" => Some(Self::Script),
            "ts" | "mts" | "cts" => Some(Self::TypedScript),
            "jsx" => Some(Self::ReactJsx),
            "tsx" => Some(Self::ReactTsx),
            "vue" => Some(Self::TemplateSfc),
            _ => None,
        }
    }

    /// Get file extensions for this dialect
    #[must_use]
    pub fn extensions(&self) -> Vec<&'static str> {
        match self {
            Self::Script => vec!["js", "mjs", "cjs"],
            Self::TypedScript => vec!["ts", "mts", "cts"],
            Self::ReactJsx => vec!["jsx"],
            Self::ReactTsx => vec!["tsx"],
            Self::TemplateSfc => vec!["vue"],
        }
    }

    /// Grammar used to parse a window of this dialect.
    ///
    /// For `TemplateSfc` this is the grammar of the structural splitter;
    /// script regions pick their own grammar from the `lang` attribute.
    #[must_use]
    pub fn grammar(&self) -> Grammar {
        match self {
            // tree-sitter-javascript parses JSX natively
            Self::Script | Self::ReactJsx => Grammar::JavaScript,
            Self::TypedScript => Grammar::TypeScript,
            Self::ReactTsx => Grammar::Tsx,
            Self::TemplateSfc => Grammar::Html,
        }
    }

    /// Whether offsets of this dialect are relative to the whole document.
    #[must_use]
    pub fn is_multi_region(&self) -> bool {
        matches!(self, Self::TemplateSfc)
    }

    /// Whether the dialect allows markup attributes inside script code.
    #[must_use]
    pub fn has_markup(&self) -> bool {
        matches!(self, Self::ReactJsx | Self::ReactTsx)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.language_id())
    }
}

impl TryFrom<&str> for Dialect {
    type Error = AstError;

    fn try_from(s: &str) -> Result<Self, AstError> {
        let lowered = s.to_lowercase();
        Self::from_language_id(&lowered)
            .or_else(|| Self::from_extension(&lowered))
            .or(match lowered.as_str() {
                "script" => Some(Self::Script),
                "react" => Some(Self::ReactJsx),
                "sfc" => Some(Self::TemplateSfc),
                _ => None,
            })
            .ok_or(AstError::UnsupportedDialect(s.to_string()))
    }
}
