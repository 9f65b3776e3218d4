//! Centralized file names for an update run
//!
//! All three files live in the working directory the tool is invoked from:
//!
//! ```text
//! ./
//! ├── sign_update.txt    # INPUT: output of Sparkle's sign_update
//! ├── appcast.xml        # INPUT: existing feed (never modified)
//! └── appcast_new.xml    # OUTPUT: feed with the new item appended
//! ```

use std::path::{Path, PathBuf};

/// Signature file written by `sign_update`
pub const SIGN_UPDATE_FILE: &str = "sign_update.txt";

/// Existing appcast feed
pub const APPCAST_FILE: &str = "appcast.xml";

/// Output feed
pub const APPCAST_NEW_FILE: &str = "appcast_new.xml";

/// Path to the signature file under `dir`
#[must_use]
pub fn sign_update(dir: &Path) -> PathBuf {
    dir.join(SIGN_UPDATE_FILE)
}

/// Path to the input feed under `dir`
#[must_use]
pub fn appcast(dir: &Path) -> PathBuf {
    dir.join(APPCAST_FILE)
}

/// Path to the output feed under `dir`
#[must_use]
pub fn appcast_new(dir: &Path) -> PathBuf {
    dir.join(APPCAST_NEW_FILE)
}
