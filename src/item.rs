//! Construction of the `<item>` for a tip build

use chrono::{DateTime, Utc};

use crate::config::BuildInfo;
use crate::signature::AttributeMap;
use crate::xml::{Element, NamespaceRegistry};

/// Oldest macOS release tip builds support
pub const MINIMUM_SYSTEM_VERSION: &str = "12.0.0";

/// MIME type of the enclosure
pub const ENCLOSURE_TYPE: &str = "application/octet-stream";

/// RFC 822 date format used for `pubDate`
pub const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Download URL for a build's universal macOS archive
#[must_use]
pub fn enclosure_url(build: &str) -> String {
    format!("https://tip.files.ghostty.dev/{build}/ghostty-macos-universal.zip")
}

/// HTML release notes for a tip build
#[must_use]
pub fn description(commit: &str) -> String {
    format!(
        r#"
<p>Automated build from commit <code>{commit}</code>.</p>
<p>
These are automatic per-commit builds generated from the main Git branch.
We do not generate any release notes for these builds. You can view the full
commit history
<a href="https://github.com/mitchellh/ghostty">on GitHub</a> for all changes.
</p>
"#
    )
}

/// `pubDate` text for a timestamp
#[must_use]
pub fn pub_date(at: DateTime<Utc>) -> String {
    at.format(PUB_DATE_FORMAT).to_string()
}

/// A feed entry for one build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    /// `title`
    pub title: String,
    /// `pubDate`
    pub pub_date: String,
    /// `sparkle:version`
    pub version: String,
    /// `sparkle:shortVersionString`
    pub short_version: String,
    /// `sparkle:minimumSystemVersion`
    pub minimum_system_version: String,
    /// `description`
    pub description: String,
    /// `enclosure@url`
    pub enclosure_url: String,
    /// Extra enclosure attributes, applied after `url` and `type`
    pub enclosure_attributes: AttributeMap,
}

impl NewItem {
    /// Build the entry for `info` published at `at`
    #[must_use]
    pub fn new(info: &BuildInfo, at: DateTime<Utc>, signature: &AttributeMap) -> Self {
        Self {
            title: format!("Build {}", info.build),
            pub_date: pub_date(at),
            version: info.build.clone(),
            short_version: info.commit.clone(),
            minimum_system_version: MINIMUM_SYSTEM_VERSION.to_string(),
            description: description(&info.commit),
            enclosure_url: enclosure_url(&info.build),
            enclosure_attributes: signature.clone(),
        }
    }

    /// Render as an `<item>` element
    ///
    /// Prefixed names such as `sparkle:version` resolve through `registry`.
    #[must_use]
    pub fn to_element(&self, registry: &NamespaceRegistry) -> Element {
        let field = |name: &str, text: &str| Element::new(registry.resolve(name)).with_text(text);

        let mut enclosure = Element::new("enclosure");
        enclosure.set_attribute("url", self.enclosure_url.as_str());
        enclosure.set_attribute("type", ENCLOSURE_TYPE);
        for (key, value) in self.enclosure_attributes.iter() {
            enclosure.set_attribute(registry.resolve(key), value);
        }

        let mut item = Element::new("item");
        item.push_element(field("title", &self.title));
        item.push_element(field("pubDate", &self.pub_date));
        item.push_element(field("sparkle:version", &self.version));
        item.push_element(field("sparkle:shortVersionString", &self.short_version));
        item.push_element(field("sparkle:minimumSystemVersion", &self.minimum_system_version));
        item.push_element(field("description", &self.description));
        item.push_element(enclosure);
        item
    }
}
