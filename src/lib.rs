//! update-appcast - Append a tip build entry to a Sparkle appcast feed
//!
//! This library reads the output of Sparkle's `sign_update` tool and an existing
//! `appcast.xml`, builds one new `<item>` for the current build, and writes the
//! combined feed to `appcast_new.xml`.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod feed;
pub mod item;
pub mod output;
pub mod paths;
pub mod signature;
pub mod updater;
pub mod xml;

pub use config::{BuildInfo, UpdaterConfig};
pub use error::UpdateError;
pub use updater::{run, run_at};
