//! Namespace prefix registration
//!
//! Parsed names carry namespace URIs, not prefixes. When a tree is written
//! back out, every URI needs a prefix: a registered one if available,
//! otherwise a generated `ns0`, `ns1`, ... alias. Registration must happen
//! before the tree is written for the output to use the expected spelling.

use super::QName;

/// The implicit `xml:` namespace
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Sparkle update framework namespace
pub const SPARKLE_NS: &str = "http://www.andymatuschak.org/xml-namespaces/sparkle";

/// Conventional prefix for [`SPARKLE_NS`]
pub const SPARKLE_PREFIX: &str = "sparkle";

/// Prefixes known without registration
const WELL_KNOWN: &[(&str, &str)] = &[
    ("xml", XML_NS),
    ("html", "http://www.w3.org/1999/xhtml"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("wsdl", "http://schemas.xmlsoap.org/wsdl/"),
    ("xs", "http://www.w3.org/2001/XMLSchema"),
    ("xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
];

/// Mapping between namespace URIs and their preferred prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceRegistry {
    /// (prefix, uri) pairs; each prefix and each uri appears at most once
    bindings: Vec<(String, String)>,
}

impl Default for NamespaceRegistry {
    fn default() -> Self {
        Self {
            bindings: WELL_KNOWN
                .iter()
                .map(|(prefix, uri)| ((*prefix).to_string(), (*uri).to_string()))
                .collect(),
        }
    }
}

impl NamespaceRegistry {
    /// Registry with only the well-known prefixes
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the well-known prefixes plus `sparkle`
    #[must_use]
    pub fn for_appcast() -> Self {
        let mut registry = Self::new();
        registry.register(SPARKLE_PREFIX, SPARKLE_NS);
        registry
    }

    /// Bind `prefix` to `uri`
    ///
    /// Any earlier binding of the same prefix or the same URI is dropped.
    pub fn register(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        let prefix = prefix.into();
        let uri = uri.into();
        self.bindings.retain(|(p, u)| *p != prefix && *u != uri);
        self.bindings.push((prefix, uri));
    }

    /// Registered prefix for a namespace URI
    #[must_use]
    pub fn prefix_for(&self, uri: &str) -> Option<&str> {
        self.bindings.iter().find(|(_, u)| u == uri).map(|(p, _)| p.as_str())
    }

    /// Registered URI for a prefix
    #[must_use]
    pub fn uri_for(&self, prefix: &str) -> Option<&str> {
        self.bindings.iter().find(|(p, _)| p == prefix).map(|(_, u)| u.as_str())
    }

    /// Whether a prefix is taken by a registration
    #[must_use]
    pub fn is_registered_prefix(&self, prefix: &str) -> bool {
        self.uri_for(prefix).is_some()
    }

    /// Resolve a `prefix:local` name written by hand
    ///
    /// Unregistered prefixes are kept verbatim in the local name.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> QName {
        if let Some((prefix, local)) = raw.split_once(':')
            && let Some(uri) = self.uri_for(prefix)
        {
            return QName::qualified(uri, local);
        }
        QName::local(raw)
    }
}
