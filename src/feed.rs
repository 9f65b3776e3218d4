//! The appcast feed document
//!
//! Loads `appcast.xml`, exposes its `<channel>`, and writes the edited tree to
//! a new file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::error::UpdateError;
use crate::xml::{self, Element, NamespaceRegistry, QName};

/// A parsed feed, owned for the duration of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    path: PathBuf,
    root: Element,
}

impl FeedDocument {
    /// Read and parse the feed at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, UpdateError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| UpdateError::MissingFile {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8(bytes)
            .map_err(|e| UpdateError::malformed_feed(path, format!("invalid UTF-8: {e}")))?;
        Self::parse(path, &source)
    }

    /// Parse feed text; `path` is only used in error messages
    pub fn parse(path: impl Into<PathBuf>, source: &str) -> Result<Self, UpdateError> {
        let path = path.into();
        let root = xml::parse_document(source)
            .map_err(|e| UpdateError::malformed_feed(&path, e.to_string()))?;
        debug!("Parsed feed {} with root <{}>", path.display(), root.name.local);
        Ok(Self { path, root })
    }

    /// Root element
    #[must_use]
    pub const fn root(&self) -> &Element {
        &self.root
    }

    /// The `<channel>` element
    pub fn channel(&self) -> Result<&Element, UpdateError> {
        self.root.find(&channel_name()).ok_or_else(|| self.missing_channel())
    }

    /// Mutable access to the `<channel>` element
    pub fn channel_mut(&mut self) -> Result<&mut Element, UpdateError> {
        self.root.find_mut(&channel_name()).ok_or_else(|| UpdateError::MissingChannel {
            path: self.path.clone(),
        })
    }

    /// The `<item>` elements under the channel
    pub fn items(&self) -> Result<Vec<&Element>, UpdateError> {
        let item = QName::local("item");
        Ok(self.channel()?.elements().filter(|e| e.name == item).collect())
    }

    /// Append `item` as the last child of the channel
    pub fn append_item(&mut self, item: Element) -> Result<(), UpdateError> {
        self.channel_mut()?.push_element(item);
        Ok(())
    }

    /// Serialize the document with an XML declaration
    #[must_use]
    pub fn to_xml(&self, registry: &NamespaceRegistry) -> String {
        xml::to_string(&self.root, registry)
    }

    /// Serialize and atomically replace `path`
    ///
    /// The document goes to a temporary file next to `path` first, so `path`
    /// is either the complete new feed or untouched.
    pub fn write(
        &self,
        path: impl AsRef<Path>,
        registry: &NamespaceRegistry,
    ) -> Result<(), UpdateError> {
        let path = path.as_ref();
        let write_error = |source: std::io::Error| UpdateError::WriteError {
            path: path.to_path_buf(),
            source,
        };
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let content = self.to_xml(registry);
        let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
        file.write_all(content.as_bytes()).map_err(write_error)?;
        file.persist(path).map_err(|e| write_error(e.error))?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    fn missing_channel(&self) -> UpdateError {
        UpdateError::MissingChannel {
            path: self.path.clone(),
        }
    }
}

fn channel_name() -> QName {
    QName::local("channel")
}
