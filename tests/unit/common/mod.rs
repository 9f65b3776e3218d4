//! Shared test fixtures and helpers
//!
//! This module provides a throwaway build directory with the files an update
//! run expects.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;
use update_appcast::paths;

/// Sparkle namespace URI
pub const SPARKLE: &str = "http://www.andymatuschak.org/xml-namespaces/sparkle";

/// A feed with no items
pub const EMPTY_FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0" xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle">
  <channel>
    <title>Ghostty</title>
    <link>https://ghostty.org</link>
  </channel>
</rss>
"#;

/// A feed with two existing items
pub const TWO_ITEM_FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0" xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Ghostty</title>
    <item>
      <title>Build 1</title>
      <sparkle:version>1</sparkle:version>
      <enclosure url="https://tip.files.ghostty.dev/1/ghostty-macos-universal.zip" type="application/octet-stream" sparkle:edSignature="one==" length="10"/>
    </item>
    <item>
      <title>Build 2</title>
      <dc:creator>ci</dc:creator>
      <sparkle:version>2</sparkle:version>
    </item>
  </channel>
</rss>
"#;

/// Typical `sign_update` output
pub const SIGNATURE: &str = "sparkle:edSignature=\"MC0CFQ...\" length=\"512\"\n";

/// A build directory containing `sign_update.txt` and `appcast.xml`
pub struct BuildDir {
    dir: TempDir,
}

impl BuildDir {
    /// Create a build directory with the given signature and feed
    pub fn new(signature: &str, feed: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(dir.path().join(paths::SIGN_UPDATE_FILE), signature).unwrap();
        fs::write(dir.path().join(paths::APPCAST_FILE), feed).unwrap();
        Self { dir }
    }

    /// An empty directory
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Directory path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the output feed
    pub fn output(&self) -> PathBuf {
        paths::appcast_new(self.path())
    }

    /// Contents of the output feed
    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output()).expect("output feed should exist")
    }

    /// Replace the input feed with the output of the previous run
    pub fn promote_output(&self) {
        fs::copy(self.output(), paths::appcast(self.path())).unwrap();
    }
}

/// Fixed publication time: Mon, 02 Jan 2006 15:04:05 +0000
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap()
}
