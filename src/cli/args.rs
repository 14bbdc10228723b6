//! CLI argument definitions.

use chrono::{DateTime, FixedOffset};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Rose and frequency charts from `BirdNET` detection logs.
///
/// With no subcommand, renders the trailing-hour rose chart and publishes
/// it to the dashboard directory.
#[derive(Debug, Parser)]
#[command(name = "birdrose")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Common options for chart rendering.
    #[command(flatten)]
    pub common: CommonArgs,

    /// Rose chart options.
    #[command(flatten)]
    pub rose: RoseArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the top-species frequency bar chart.
    Freq {
        /// Common options for chart rendering.
        #[command(flatten)]
        common: CommonArgs,

        /// Number of species to include.
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Options shared by both chart commands.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Path to the detection log file.
    #[arg(short, long, env = "BIRDROSE_LOG")]
    pub log: Option<PathBuf>,

    /// Minimum confidence threshold (0.0-1.0).
    #[arg(short = 'c', long, value_parser = parse_confidence, env = "BIRDROSE_MIN_CONFIDENCE")]
    pub min_confidence: Option<f32>,

    /// Output PNG path (default: chart-specific filename in the working directory).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress informational output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Options specific to the rose chart.
#[derive(Debug, Args)]
pub struct RoseArgs {
    /// Reference timestamp (RFC 3339) closing the trailing-hour window
    /// (default: current local time).
    #[arg(long, value_parser = parse_reference)]
    pub reference: Option<DateTime<FixedOffset>>,

    /// Dashboard directory to copy the rendered chart into.
    #[arg(long, env = "BIRDROSE_PUBLISH_DIR")]
    pub publish_dir: Option<PathBuf>,

    /// Skip copying the chart to the dashboard directory.
    #[arg(long)]
    pub no_publish: bool,
}

/// Parse and validate confidence value.
fn parse_confidence(s: &str) -> Result<f32, String> {
    use crate::constants::confidence::{MAX, MIN};

    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(MIN..=MAX).contains(&value) {
        return Err(format!(
            "confidence must be between {MIN} and {MAX}, got {value}"
        ));
    }

    Ok(value)
}

/// Parse an RFC 3339 reference timestamp.
fn parse_reference(s: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s)
        .map_err(|e| format!("'{s}' is not an RFC 3339 timestamp: {e}"))
}
