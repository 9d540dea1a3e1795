//! Views over the parsed theme tree.
//!
//! A `.tmTheme` document is a `<plist>` holding one top-level `<dict>`. That
//! dictionary carries metadata (`name`, `uuid`, `author`, ...) and, under the
//! `settings` key, an array of dictionaries: one editor-wide settings entry
//! followed by the scoped rules. [`ThemeTree`] names the slices of that shape
//! each extractor reads, without checking that the shape is actually there.

use sublime_convert_plist::Node;

/// The top-level nodes of a theme document.
#[derive(Debug, Clone, Copy)]
pub struct ThemeTree<'a> {
    nodes: &'a [Node],
}

impl<'a> ThemeTree<'a> {
    /// Wraps the children of the document root.
    pub fn new(root: &'a Node) -> Self {
        Self {
            nodes: root.children(),
        }
    }

    /// Wraps an explicit list of top-level nodes.
    pub fn from_nodes(nodes: &'a [Node]) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level dictionaries, in document order.
    pub fn dicts(&self) -> impl Iterator<Item = &'a Node> {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Dict(_)))
    }

    /// String values of the color-definition section.
    ///
    /// Only arrays directly under the *first* top-level node are searched.
    /// Within each array entry, every nested dictionary's string values that
    /// start with `#` are yielded, raw, in document order.
    pub fn color_literals(&self) -> impl Iterator<Item = &'a str> {
        self.nodes
            .first()
            .into_iter()
            .flat_map(|node| node.arrays())
            .flat_map(Node::children)
            .flat_map(|entry| entry.dicts())
            .flat_map(Node::children)
            .filter_map(|node| match node {
                Node::Str(Some(text)) if text.starts_with('#') => Some(text.as_str()),
                _ => None,
            })
    }

    /// Entries of every rules array, across all top-level nodes.
    pub fn rule_entries(&self) -> Vec<&'a Node> {
        self.nodes
            .iter()
            .flat_map(|node| node.arrays())
            .flat_map(Node::children)
            .collect()
    }
}
