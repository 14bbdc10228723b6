//! Birdrose - chart rendering for `BirdNET` detection logs.
//!
//! Reads a newline-delimited JSON detection log, filters detections by
//! confidence, and renders a trailing-hour rose chart and a top-species
//! frequency bar chart.

#![warn(missing_docs)]

pub mod analysis;
pub mod chart;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod output;

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Local};
use clap::Parser;
use tracing::{info, warn};

use cli::{Cli, Command, CommonArgs, ConfigAction, RoseArgs};
use config::{Config, config_file_path, load_default_config, save_default_config};
use constants::output::{FREQ_FILENAME, ROSE_FILENAME};

pub use error::{Error, Result};

/// Main entry point for the birdrose CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Config { action }) => {
            init_logging(0, false);
            handle_config_command(action)
        }
        Some(Command::Freq { common, top }) => {
            init_logging(common.verbose, common.quiet);
            let config = load_default_config()?;
            render_frequency(&common, top, &config)
        }
        None => {
            init_logging(cli.common.verbose, cli.common.quiet);
            let config = load_default_config()?;
            render_rose(&cli.common, &cli.rose, &config)
        }
    }
}

/// Render the trailing-hour rose chart and publish it to the dashboard.
fn render_rose(common: &CommonArgs, rose: &RoseArgs, config: &Config) -> Result<()> {
    let detections = load_detections(common, config)?;

    let reference: DateTime<FixedOffset> = rose
        .reference
        .unwrap_or_else(|| Local::now().fixed_offset());
    let data = analysis::minute_counts(&detections, reference);
    if data.is_empty() {
        warn!(
            "No detections within the trailing {} minutes of {}",
            constants::window::TRAILING_MINUTES + 1,
            reference
        );
    }

    let output_path = common
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(ROSE_FILENAME));
    chart::render_rose_chart(&data, reference, &output_path)?;
    info!(
        "Wrote rose chart with {} species: {}",
        data.species().len(),
        output_path.display()
    );

    if config.publish.enabled && !rose.no_publish {
        let dashboard_dir = rose
            .publish_dir
            .clone()
            .unwrap_or_else(|| config.publish.dashboard_dir.clone());
        let destination =
            output::publish_chart(&output_path, &dashboard_dir, &config.publish.filename)?;
        info!("Published chart: {}", destination.display());
    }

    Ok(())
}

/// Render the top-species frequency bar chart.
fn render_frequency(common: &CommonArgs, top: Option<usize>, config: &Config) -> Result<()> {
    let detections = load_detections(common, config)?;

    let top = top.unwrap_or(config.defaults.top_species);
    let ranking = analysis::top_species(&detections, top);
    if ranking.is_empty() {
        warn!("No detections to rank");
    }

    let output_path = common
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(FREQ_FILENAME));
    chart::render_bar_chart(&ranking, &output_path)?;
    info!(
        "Wrote frequency chart with {} species: {}",
        ranking.len(),
        output_path.display()
    );

    Ok(())
}

/// Load the detection log once with the resolved confidence threshold.
///
/// Resolution order: CLI flag, config file, built-in default.
fn load_detections(common: &CommonArgs, config: &Config) -> Result<Vec<loader::Detection>> {
    let log_path = common
        .log
        .clone()
        .unwrap_or_else(|| config.defaults.log_path.clone());
    let min_confidence = common
        .min_confidence
        .unwrap_or(config.defaults.min_confidence);

    let detections = loader::load_log(&log_path, min_confidence)?;
    info!(
        "Loaded {} detection(s) above confidence {:.2} from {}",
        detections.len(),
        min_confidence,
        log_path.display()
    );
    Ok(detections)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
