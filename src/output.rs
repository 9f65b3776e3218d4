//! Output formatting for human and JSON modes
//!
//! The run report and failures can be rendered either as human-readable text
//! or as machine-parseable JSON.

use serde::Serialize;

use crate::error::UpdateError;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    /// Path of the written feed
    pub output: String,
    /// Build identifier
    pub build: String,
    /// Commit hash
    pub commit: String,
    /// `pubDate` of the new item
    pub pub_date: String,
    /// Enclosure download URL
    pub enclosure_url: String,
    /// Items under the channel before the run
    pub items_before: usize,
    /// Items under the channel after the run
    pub items_after: usize,
}

/// Serializable failure for JSON mode
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    /// Error kind (e.g., `MISSING_CHANNEL`)
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl From<&UpdateError> for ErrorReport {
    fn from(err: &UpdateError) -> Self {
        Self {
            code: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

impl UpdateReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.summary()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    /// One-line summary for humans
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Added Build {} ({}) to {}: {} item(s)",
            self.build, self.commit, self.output, self.items_after
        )
    }
}

impl ErrorReport {
    /// Print as JSON on stdout
    pub fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
