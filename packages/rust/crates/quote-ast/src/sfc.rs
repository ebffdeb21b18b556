//! Structural splitter for Vue single-file components.
//!
//! The document is parsed with the HTML grammar and its top-level
//! `<template>`, `<script>` and `<script setup>` blocks are reported as
//! byte ranges of their content. Nested blocks are not regions.

use tree_sitter::Node;

use crate::error::AstError;
use crate::grammar::{Grammar, parse};
use crate::span::OffsetBase;
use crate::walk::{child_of_kind, node_text};

/// Kind of top-level SFC block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `<template>` markup
    Template,
    /// Primary `<script>`
    Script,
    /// Auxiliary `<script setup>`
    ScriptSetup,
}

/// Content range of one top-level block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfcBlock {
    /// Block kind
    pub kind: BlockKind,
    /// Offset of the first content byte (just after the start tag)
    pub content_start: usize,
    /// Offset one past the last content byte (start of the end tag)
    pub content_end: usize,
    /// Value of the `lang` attribute, if any
    pub lang: Option<String>,
}

impl SfcBlock {
    /// Content of the block inside `source`
    #[must_use]
    pub fn content<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.content_start..self.content_end).unwrap_or("")
    }

    /// Translation base from block-local to document offsets
    #[must_use]
    pub fn offset_base(&self) -> OffsetBase {
        OffsetBase(self.content_start)
    }

    /// Grammar to parse the block content with
    #[must_use]
    pub fn grammar(&self) -> Grammar {
        match self.kind {
            BlockKind::Template => Grammar::Html,
            BlockKind::Script | BlockKind::ScriptSetup => {
                Grammar::from_script_lang(self.lang.as_deref())
            }
        }
    }
}

/// Top-level blocks of an SFC; any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SfcDescriptor {
    /// `<template>` block
    pub template: Option<SfcBlock>,
    /// `<script>` block
    pub script: Option<SfcBlock>,
    /// `<script setup>` block
    pub script_setup: Option<SfcBlock>,
}

impl SfcDescriptor {
    /// Check if no block was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.template.is_none() && self.script.is_none() && self.script_setup.is_none()
    }

    /// Present blocks in template, script, script-setup order
    pub fn blocks(&self) -> impl Iterator<Item = &SfcBlock> {
        [&self.template, &self.script, &self.script_setup]
            .into_iter()
            .flatten()
    }
}

/// Split an SFC document into its top-level blocks.
///
/// The first block of each kind wins; later duplicates are ignored.
pub fn split_sfc(source: &str) -> Result<SfcDescriptor, AstError> {
    let tree = parse(Grammar::Html, source)?;
    let root = tree.root();
    let mut descriptor = SfcDescriptor::default();

    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        let Some(start_tag) = child_of_kind(node, "start_tag") else {
            continue;
        };

        let slot = match node.kind() {
            "element" if tag_name(start_tag, source).eq_ignore_ascii_case("template") => {
                &mut descriptor.template
            }
            "script_element" if find_attribute(start_tag, source, "setup").is_some() => {
                &mut descriptor.script_setup
            }
            "script_element" => &mut descriptor.script,
            _ => continue,
        };

        if slot.is_none() {
            *slot = Some(block_from(node, start_tag, source));
        }
    }

    Ok(descriptor)
}

fn block_from(element: Node<'_>, start_tag: Node<'_>, source: &str) -> SfcBlock {
    let kind = match element.kind() {
        "script_element" if find_attribute(start_tag, source, "setup").is_some() => {
            BlockKind::ScriptSetup
        }
        "script_element" => BlockKind::Script,
        _ => BlockKind::Template,
    };
    let content_start = start_tag.end_byte();
    let content_end = child_of_kind(element, "end_tag")
        .map_or(element.end_byte(), |end_tag| end_tag.start_byte())
        .max(content_start);
    let lang = find_attribute(start_tag, source, "lang")
        .and_then(|attr| attribute_value(attr, source))
        .map(str::to_string);

    SfcBlock {
        kind,
        content_start,
        content_end,
        lang,
    }
}

fn tag_name<'s>(start_tag: Node<'_>, source: &'s str) -> &'s str {
    child_of_kind(start_tag, "tag_name").map_or("", |name| node_text(name, source))
}

/// Attribute node named `name` on a start tag.
#[must_use]
pub fn find_attribute<'tree>(
    start_tag: Node<'tree>,
    source: &str,
    name: &str,
) -> Option<Node<'tree>> {
    let mut cursor = start_tag.walk();
    start_tag
        .children(&mut cursor)
        .filter(|child| child.kind() == "attribute")
        .find(|attr| attribute_name(*attr, source).eq_ignore_ascii_case(name))
}

/// Name of an attribute node
#[must_use]
pub fn attribute_name<'s>(attribute: Node<'_>, source: &'s str) -> &'s str {
    child_of_kind(attribute, "attribute_name").map_or("", |name| node_text(name, source))
}

/// Unquoted value of an attribute node, `None` for a bare attribute.
#[must_use]
pub fn attribute_value<'s>(attribute: Node<'_>, source: &'s str) -> Option<&'s str> {
    if let Some(quoted) = child_of_kind(attribute, "quoted_attribute_value") {
        return Some(
            child_of_kind(quoted, "attribute_value").map_or("", |value| node_text(value, source)),
        );
    }
    child_of_kind(attribute, "attribute_value").map(|value| node_text(value, source))
}
