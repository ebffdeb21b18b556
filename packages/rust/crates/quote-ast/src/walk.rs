//! Iterative traversal helpers over tree-sitter nodes.

use tree_sitter::Node;

/// Pre-order iterator over a subtree, driven by an explicit stack.
///
/// Parents are yielded before their children and siblings in source order,
/// so the first hit for a query is the outermost node at that position.
pub struct Preorder<'tree> {
    stack: Vec<Node<'tree>>,
}

impl<'tree> Preorder<'tree> {
    /// Start a walk at `root` (inclusive)
    #[must_use]
    pub fn new(root: Node<'tree>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'tree> Iterator for Preorder<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let mut cursor = node.walk();
        let children: Vec<Node<'tree>> = node.children(&mut cursor).collect();
        self.stack.extend(children.into_iter().rev());
        Some(node)
    }
}

/// Walk `root` and its descendants in pre-order.
#[must_use]
pub fn preorder(root: Node<'_>) -> Preorder<'_> {
    Preorder::new(root)
}

/// First direct child of `node` with the given kind.
#[must_use]
pub fn child_of_kind<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find(|child| child.kind() == kind)
}

/// Source text covered by `node`, empty if the range is not valid UTF-8.
#[must_use]
pub fn node_text<'src>(node: Node<'_>, source: &'src str) -> &'src str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Grammar, parse};

    #[test]
    fn test_preorder_visits_parent_first() {
        let tree = parse(Grammar::JavaScript, "f(`a${'b'}`);").unwrap();
        let kinds: Vec<&str> = preorder(tree.root())
            .map(|n| n.kind())
            .filter(|k| *k == "template_string" || *k == "string")
            .collect();
        assert_eq!(kinds, vec!["template_string", "string"]);
    }
}
