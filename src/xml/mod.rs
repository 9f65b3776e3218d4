//! Owned XML tree
//!
//! A small DOM for editing a feed in place: elements own their attributes and
//! an ordered list of child nodes. Names are stored resolved (namespace URI +
//! local name); prefixes are chosen again at write time by a
//! [`NamespaceRegistry`].

mod namespace;
mod parse;
mod write;

pub use namespace::{NamespaceRegistry, SPARKLE_NS, SPARKLE_PREFIX, XML_NS};
pub use parse::{XmlError, parse_document};
pub use write::{XML_DECLARATION, to_string};

/// A namespace-resolved element or attribute name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace URI, if any
    pub namespace: Option<String>,
    /// Local part of the name
    pub local: String,
}

impl QName {
    /// A name in no namespace
    #[must_use]
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
        }
    }

    /// A name in the given namespace
    #[must_use]
    pub fn qualified(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local: local.into(),
        }
    }
}

impl From<&str> for QName {
    fn from(local: &str) -> Self {
        Self::local(local)
    }
}

/// An attribute on an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name
    pub name: QName,
    /// Unescaped value
    pub value: String,
}

/// A child of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Character data (unescaped)
    Text(String),
    /// CDATA section contents
    CData(String),
    /// Comment contents
    Comment(String),
}

/// An element with attributes and ordered children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element name
    pub name: QName,
    /// Attributes in document order
    pub attributes: Vec<Attribute>,
    /// Children in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element
    #[must_use]
    pub fn new(name: impl Into<QName>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style: append a text child
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attribute(&mut self, name: impl Into<QName>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    /// Get an attribute value
    #[must_use]
    pub fn attribute(&self, name: &QName) -> Option<&str> {
        self.attributes.iter().find(|a| &a.name == name).map(|a| a.value.as_str())
    }

    /// Append a child element as the last child
    pub fn push_element(&mut self, child: Self) {
        self.children.push(Node::Element(child));
    }

    /// Iterate over direct child elements
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// First direct child element with the given name
    #[must_use]
    pub fn find(&self, name: &QName) -> Option<&Self> {
        self.elements().find(|e| &e.name == name)
    }

    /// Mutable access to the first direct child element with the given name
    pub fn find_mut(&mut self, name: &QName) -> Option<&mut Self> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(e) if &e.name == name => Some(e),
            _ => None,
        })
    }

    /// All direct child elements with the given name
    pub fn find_all<'a>(&'a self, name: &'a QName) -> impl Iterator<Item = &'a Self> + 'a {
        self.elements().filter(move |e| &e.name == name)
    }

    /// Concatenated text and CDATA of the direct children
    #[must_use]
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) | Node::CData(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}
