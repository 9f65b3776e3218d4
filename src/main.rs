//! update-appcast - Append a tip build entry to a Sparkle appcast feed

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

mod cli;

use update_appcast::UpdateError;

/// Main entry point for the update-appcast CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("error: {err}");
        let code = err.downcast_ref::<UpdateError>().map_or(1, UpdateError::exit_code);
        std::process::exit(code);
    }
}
