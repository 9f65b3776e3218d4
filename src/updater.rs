//! The update run
//!
//! One run reads `sign_update.txt` and `appcast.xml`, appends a single
//! `<item>` for the current build to the channel, and writes
//! `appcast_new.xml`. Any failure stops the run before the output is written.

use std::fs;

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::config::{BuildInfo, UpdaterConfig};
use crate::error::UpdateError;
use crate::feed::FeedDocument;
use crate::item::NewItem;
use crate::output::UpdateReport;
use crate::signature;
use crate::xml::{NamespaceRegistry, SPARKLE_NS, SPARKLE_PREFIX};

/// Run with build info from the environment and the current time
pub fn run(config: &UpdaterConfig) -> Result<UpdateReport, UpdateError> {
    let now = Utc::now();
    let info = BuildInfo::from_env()?;
    run_at(config, &info, now)
}

/// Run with explicit build info and publication time
pub fn run_at(
    config: &UpdaterConfig,
    info: &BuildInfo,
    now: DateTime<Utc>,
) -> Result<UpdateReport, UpdateError> {
    debug!("Reading signature from {}", config.signature_path.display());
    let signature_text =
        fs::read_to_string(&config.signature_path).map_err(|source| UpdateError::MissingFile {
            path: config.signature_path.clone(),
            source,
        })?;

    // Prefixes must be known before the feed is parsed or written
    let mut registry = NamespaceRegistry::new();
    registry.register(SPARKLE_PREFIX, SPARKLE_NS);

    let mut feed = FeedDocument::load(&config.feed_path)?;
    let attributes = signature::parse(&signature_text)?;
    debug!("Parsed {} signature attribute(s)", attributes.len());

    let items_before = feed.items()?.len();

    let item = NewItem::new(info, now, &attributes);
    feed.append_item(item.to_element(&registry))?;
    let items_after = feed.items()?.len();

    feed.write(&config.output_path, &registry)?;
    info!(
        "Appended {} to {} ({} item(s))",
        item.title,
        config.output_path.display(),
        items_after
    );

    Ok(UpdateReport {
        output: config.output_path.display().to_string(),
        build: info.build.clone(),
        commit: info.commit.clone(),
        pub_date: item.pub_date,
        enclosure_url: item.enclosure_url,
        items_before,
        items_after,
    })
}
