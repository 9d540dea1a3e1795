//! The tagged tree produced by the reader.

/// One element of a property-list document.
///
/// The four tags a color theme is built from get their own variants. Every
/// other element (the `<plist>` root, `<integer>`, `<true/>`, ...) is kept as
/// [`Node::Other`] so the tree stays faithful to the source, but consumers
/// are free to ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `<dict>`: alternating keys and values, in document order.
    Dict(Vec<Node>),
    /// `<array>`: an ordered sequence of values.
    Array(Vec<Node>),
    /// `<key>`: a dictionary key. Missing text reads as the empty string.
    Key(String),
    /// `<string>`: a string value, `None` when the element has no text.
    Str(Option<String>),
    /// Any other element.
    Other { tag: String, children: Vec<Node> },
}

impl Node {
    /// Builds a node from an element name, its accumulated text and children.
    pub(crate) fn from_element(tag: String, text: Option<String>, children: Vec<Node>) -> Self {
        match tag.as_str() {
            "dict" => Node::Dict(children),
            "array" => Node::Array(children),
            "key" => Node::Key(text.unwrap_or_default()),
            "string" => Node::Str(text),
            _ => Node::Other { tag, children },
        }
    }

    /// The element name this node was read from.
    pub fn tag(&self) -> &str {
        match self {
            Node::Dict(_) => "dict",
            Node::Array(_) => "array",
            Node::Key(_) => "key",
            Node::Str(_) => "string",
            Node::Other { tag, .. } => tag,
        }
    }

    /// Child elements; leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Dict(children) | Node::Array(children) | Node::Other { children, .. } => {
                children
            }
            Node::Key(_) | Node::Str(_) => &[],
        }
    }

    /// Text of a key or string node.
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Key(text) => Some(text),
            Node::Str(text) => text.as_deref(),
            Node::Dict(_) | Node::Array(_) | Node::Other { .. } => None,
        }
    }

    /// Texts of the direct `<key>` children, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children().iter().filter_map(|child| match child {
            Node::Key(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Texts of the direct `<string>` children, in order.
    ///
    /// Empty strings yield `None` but still occupy their slot.
    pub fn strings(&self) -> impl Iterator<Item = Option<&str>> {
        self.children().iter().filter_map(|child| match child {
            Node::Str(text) => Some(text.as_deref()),
            _ => None,
        })
    }

    /// Direct `<dict>` children.
    pub fn dicts(&self) -> impl Iterator<Item = &Node> {
        self.children()
            .iter()
            .filter(|child| matches!(child, Node::Dict(_)))
    }

    /// Direct `<array>` children.
    pub fn arrays(&self) -> impl Iterator<Item = &Node> {
        self.children()
            .iter()
            .filter(|child| matches!(child, Node::Array(_)))
    }
}
