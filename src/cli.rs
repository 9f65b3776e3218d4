//! CLI definitions and entry point

use clap::Parser;

use update_appcast::UpdaterConfig;
use update_appcast::output::{ErrorReport, OutputMode};

/// update-appcast - Append a tip build to a Sparkle appcast
#[derive(Parser, Debug)]
#[command(
    name = "update-appcast",
    version,
    about = "Append a tip build to a Sparkle appcast",
    long_about = "Append a tip build to a Sparkle appcast.\n\n\
                  Reads sign_update.txt and appcast.xml from the current directory,\n\
                  takes the build from GHOSTTY_BUILD and GHOSTTY_COMMIT, and writes\n\
                  the feed with one new item to appcast_new.xml."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match update_appcast::run(&UpdaterConfig::default()) {
        Ok(report) => {
            report.render(output_mode);
            Ok(())
        },
        Err(err) => {
            if output_mode == OutputMode::Json {
                ErrorReport::from(&err).render_json();
            }
            Err(err.into())
        },
    }
}
