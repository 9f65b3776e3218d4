//! Run configuration
//!
//! The build identity comes from the environment (`GHOSTTY_BUILD`,
//! `GHOSTTY_COMMIT`); file locations come from [`crate::paths`].

use std::path::{Path, PathBuf};

use crate::error::UpdateError;
use crate::paths;

/// Environment variable holding the build identifier
pub const BUILD_ENV: &str = "GHOSTTY_BUILD";

/// Environment variable holding the commit hash
pub const COMMIT_ENV: &str = "GHOSTTY_COMMIT";

/// Identity of the build being published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    /// Build identifier, used verbatim in text and URLs
    pub build: String,
    /// Commit hash, used verbatim in text
    pub commit: String,
}

impl BuildInfo {
    /// Create build info from explicit values
    #[must_use]
    pub fn new(build: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            build: build.into(),
            commit: commit.into(),
        }
    }

    /// Read build info from the process environment
    pub fn from_env() -> Result<Self, UpdateError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read build info through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, UpdateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let build = lookup(BUILD_ENV).ok_or(UpdateError::MissingEnvironment { name: BUILD_ENV })?;
        let commit =
            lookup(COMMIT_ENV).ok_or(UpdateError::MissingEnvironment { name: COMMIT_ENV })?;
        Ok(Self { build, commit })
    }
}

/// File locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    /// Signature file (`sign_update.txt`)
    pub signature_path: PathBuf,
    /// Input feed (`appcast.xml`)
    pub feed_path: PathBuf,
    /// Output feed (`appcast_new.xml`)
    pub output_path: PathBuf,
}

impl UpdaterConfig {
    /// Configuration rooted at `dir`
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            signature_path: paths::sign_update(dir),
            feed_path: paths::appcast(dir),
            output_path: paths::appcast_new(dir),
        }
    }
}

impl Default for UpdaterConfig {
    /// Configuration rooted at the current directory
    fn default() -> Self {
        Self::in_dir(".")
    }
}
