//! Parsing of `sign_update` output
//!
//! Sparkle's `sign_update` prints a single line of attributes ready to be
//! pasted into an `<enclosure>`:
//!
//! ```text
//! sparkle:edSignature="MC0CFQ...==" length="1234"
//! ```
//!
//! Values may contain `=` (base64 padding), so each token is split on its
//! first `=` only. Tokens are separated by every single space, quoted or not.

use crate::error::UpdateError;

/// Attribute name/value pairs destined for the enclosure element
///
/// Keys are unique. Pairs keep their first-insertion position so the output
/// attribute order is stable; re-inserting a key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

impl AttributeMap {
    /// Create an empty map
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(existing, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Look up a value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse a `key=value key="value" ...` blob into an [`AttributeMap`]
///
/// Tokens are separated by single spaces. Each value is trimmed; a value that
/// then starts with `"` loses exactly one leading and one trailing character.
pub fn parse(blob: &str) -> Result<AttributeMap, UpdateError> {
    let mut attrs = AttributeMap::new();

    for token in blob.split(' ') {
        let (key, value) = token.split_once('=').ok_or_else(|| {
            UpdateError::MalformedSignature {
                token: token.to_string(),
            }
        })?;
        attrs.insert(key, dequote(value.trim()));
    }

    Ok(attrs)
}

/// Strip a surrounding quote pair from `value`
///
/// Only the leading quote is checked. The last character is dropped
/// unconditionally, so `"abc` becomes `ab`.
#[must_use]
pub fn dequote(value: &str) -> String {
    let Some(rest) = value.strip_prefix('"') else {
        return value.to_string();
    };
    let mut chars = rest.chars();
    chars.next_back();
    chars.as_str().to_string()
}
