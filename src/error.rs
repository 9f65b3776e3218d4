//! Error taxonomy for a feed update run
//!
//! Every variant is fatal: the run stops at the first one and the binary
//! turns it into a non-zero exit status.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an update run
#[derive(Debug, Error)]
pub enum UpdateError {
    /// A required environment variable is unset
    #[error("environment variable {name} is not set")]
    MissingEnvironment {
        /// Variable name
        name: &'static str,
    },

    /// An input file does not exist or cannot be opened
    #[error("cannot read {}: {source}", path.display())]
    MissingFile {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A signature token has no `=` separator
    #[error("malformed signature token {token:?}: expected key=value")]
    MalformedSignature {
        /// The offending token
        token: String,
    },

    /// The feed file is not well-formed XML
    #[error("malformed feed {}: {reason}", path.display())]
    MalformedFeed {
        /// Path of the feed
        path: PathBuf,
        /// What the parser rejected
        reason: String,
    },

    /// The feed parsed but has no `channel` element
    #[error("feed {} has no <channel> element", path.display())]
    MissingChannel {
        /// Path of the feed
        path: PathBuf,
    },

    /// The output file cannot be created or written
    #[error("cannot write {}: {source}", path.display())]
    WriteError {
        /// Output path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl UpdateError {
    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingEnvironment { .. } => 2,
            Self::MissingFile { .. } => 3,
            Self::MalformedSignature { .. } => 4,
            Self::MalformedFeed { .. } => 5,
            Self::MissingChannel { .. } => 6,
            Self::WriteError { .. } => 7,
        }
    }

    /// Short machine-readable name of the error kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingEnvironment { .. } => "MISSING_ENVIRONMENT",
            Self::MissingFile { .. } => "MISSING_FILE",
            Self::MalformedSignature { .. } => "MALFORMED_SIGNATURE",
            Self::MalformedFeed { .. } => "MALFORMED_FEED",
            Self::MissingChannel { .. } => "MISSING_CHANNEL",
            Self::WriteError { .. } => "WRITE_ERROR",
        }
    }

    pub(crate) fn malformed_feed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedFeed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
