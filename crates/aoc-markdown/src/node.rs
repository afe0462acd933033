//! DOM node structure for HTML to Markdown conversion.
//!
//! A tree of [`Node`]s is built once by an HTML parser (see [`crate::html`]),
//! consumed by the transcoder, then dropped. Any parser can produce this shape.

use indexmap::IndexMap;

/// A parsed HTML node: either a text leaf or an element with children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Raw character data
    Text(String),
    /// Tagged element
    Element(Element),
}

/// An element node with its attributes and ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name as produced by the parser (lowercase for HTML input)
    pub name: String,

    /// Attributes in document order
    pub attributes: IndexMap<String, String>,

    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::new(tag_name);
        for (name, value) in attrs {
            element.set_attr(name, value);
        }
        Node::Element(element)
    }

    /// Builder-style variant of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Add a child node. Text nodes have no children, so this is a no-op for them.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// The element behind this node, if any
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Tag name for elements, `None` for text
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.name.as_str())
    }

    /// Flattened text: every descendant text leaf, concatenated in order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    pub(crate) fn push_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => element.push_text(out),
        }
    }
}

impl Element {
    pub fn new(tag_name: &str) -> Self {
        Self {
            name: tag_name.to_string(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Check whether the space-separated `class` attribute contains `token`.
    /// Elements without a `class` attribute have no classes.
    pub fn has_class(&self, token: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_ascii_whitespace().any(|c| c == token))
            .unwrap_or(false)
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First descendant element named `tag_name`, depth-first in document
    /// order. The element itself is not considered.
    pub fn find(&self, tag_name: &str) -> Option<&Element> {
        for child in self.element_children() {
            if child.name == tag_name {
                return Some(child);
            }
            if let Some(found) = child.find(tag_name) {
                return Some(found);
            }
        }
        None
    }

    /// Flattened text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    pub(crate) fn push_text(&self, out: &mut String) {
        for child in &self.children {
            child.push_text(out);
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}
