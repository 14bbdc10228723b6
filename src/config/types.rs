//! Configuration type definitions.

use crate::constants::output::{DASHBOARD_DIR, DASHBOARD_FILENAME};
use crate::constants::{DEFAULT_LOG_PATH, DEFAULT_MIN_CONFIDENCE, DEFAULT_TOP_SPECIES};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Chart publishing settings.
    #[serde(default)]
    pub publish: PublishConfig,
}

/// Default analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Detection log path.
    pub log_path: PathBuf,

    /// Minimum confidence threshold, applied once at load time.
    pub min_confidence: f32,

    /// Number of species in the frequency bar chart.
    pub top_species: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            top_species: DEFAULT_TOP_SPECIES,
        }
    }
}

/// Settings for copying the rose chart to an external dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Whether to copy the rendered rose chart at all.
    pub enabled: bool,

    /// Directory the chart is copied into.
    pub dashboard_dir: PathBuf,

    /// Filename of the published copy.
    pub filename: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dashboard_dir: PathBuf::from(DASHBOARD_DIR),
            filename: DASHBOARD_FILENAME.to_string(),
        }
    }
}
