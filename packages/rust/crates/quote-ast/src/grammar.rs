//! Tree-sitter grammars and parser wrapper.

use tree_sitter::{Language, Node, Parser, Tree};

use crate::error::AstError;

/// Grammars used by the dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// JavaScript (JSX included)
    JavaScript,
    /// TypeScript
    TypeScript,
    /// TypeScript with JSX
    Tsx,
    /// HTML, used for Vue SFC structure and `<template>` markup
    Html,
}

impl Grammar {
    /// Get the short grammar name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::Html => "html",
        }
    }

    /// The tree-sitter language of this grammar.
    #[must_use]
    pub fn language(&self) -> Language {
        match self {
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::Html => tree_sitter_html::LANGUAGE.into(),
        }
    }

    /// Grammar for a `<script lang="...">` block. Missing or unknown → JavaScript.
    #[must_use]
    pub fn from_script_lang(lang: Option<&str>) -> Self {
        match lang.map(str::to_ascii_lowercase).as_deref() {
            Some("ts" | "typescript") => Self::TypeScript,
            Some("tsx") => Self::Tsx,
            _ => Self::JavaScript,
        }
    }
}

/// Parsed syntax tree together with the grammar that produced it.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    tree: Tree,
    grammar: Grammar,
}

impl SyntaxTree {
    /// Root node of the tree
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Grammar used to build the tree
    #[must_use]
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Whether error recovery had to insert ERROR or MISSING nodes
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Borrow the underlying tree-sitter tree
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

/// Reusable parser bound to one grammar.
pub struct SyntaxParser {
    parser: Parser,
    grammar: Grammar,
}

impl SyntaxParser {
    /// Create a parser for `grammar`
    pub fn new(grammar: Grammar) -> Result<Self, AstError> {
        let mut parser = Parser::new();
        parser
            .set_language(&grammar.language())
            .map_err(|e| AstError::Language(format!("{}: {e}", grammar.as_str())))?;
        Ok(Self { parser, grammar })
    }

    /// Grammar this parser is bound to
    #[must_use]
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Parse a source window
    pub fn parse(&mut self, source: &str) -> Result<SyntaxTree, AstError> {
        let tree = self.parser.parse(source, None).ok_or_else(|| {
            AstError::Parse(format!("{} parser returned no tree", self.grammar.as_str()))
        })?;
        Ok(SyntaxTree {
            tree,
            grammar: self.grammar,
        })
    }
}

/// Parse `source` with a fresh parser for `grammar`.
pub fn parse(grammar: Grammar, source: &str) -> Result<SyntaxTree, AstError> {
    SyntaxParser::new(grammar)?.parse(source)
}
