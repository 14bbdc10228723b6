//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "birdrose";

/// Default minimum confidence threshold for detections.
///
/// Applied once, at load time. Historical deployments filtered twice with
/// two different values (0.4 and 0.25); the stricter value is kept as the
/// single default.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.4;

/// Default number of species shown in the frequency bar chart.
pub const DEFAULT_TOP_SPECIES: usize = 20;

/// Default detection log path.
pub const DEFAULT_LOG_PATH: &str = "logs/birdnet.log";

/// The `msg` value marking a successful analysis record in the log.
pub const SUCCESS_MSG: &str = "success";

/// Confidence value bounds.
pub mod confidence {
    /// Minimum valid confidence value.
    pub const MIN: f32 = 0.0;
    /// Maximum valid confidence value.
    pub const MAX: f32 = 1.0;
}

/// Trailing-hour window constants.
pub mod window {
    /// Minutes looked back from the reference timestamp (window is
    /// `[reference - TRAILING_MINUTES, reference]`, inclusive).
    pub const TRAILING_MINUTES: i64 = 59;

    /// Number of angular buckets in the rose chart, one per minute-of-hour.
    pub const MINUTES_PER_HOUR: usize = 60;
}

/// Chart geometry and styling.
pub mod chart {
    /// Rose chart canvas size in pixels (square).
    pub const ROSE_SIZE: u32 = 1000;

    /// Fraction of the canvas used for the wedge radius.
    pub const ROSE_RADIUS_FRACTION: f64 = 0.38;

    /// Bar chart canvas width in pixels.
    pub const BAR_WIDTH: u32 = 1000;

    /// Bar chart canvas height in pixels.
    pub const BAR_HEIGHT: u32 = 700;

    /// Angular labels are drawn every this many minutes.
    pub const MINUTE_LABEL_STEP: usize = 5;

    /// Number of legend columns on the rose chart.
    pub const LEGEND_COLUMNS: usize = 2;

    /// Format of the reference timestamp annotation.
    pub const ANNOTATION_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

    /// Number of interpolation points per wedge arc.
    pub const ARC_STEPS: usize = 8;
}

/// Output file locations.
pub mod output {
    /// Rose chart filename written to the working directory.
    pub const ROSE_FILENAME: &str = "species_by_minute.png";

    /// Frequency bar chart filename written to the working directory.
    pub const FREQ_FILENAME: &str = "species_frequency.png";

    /// Default dashboard directory the rose chart is copied into.
    ///
    /// Consumed by a Home Assistant dashboard; overridable via config file
    /// or `--publish-dir`.
    pub const DASHBOARD_DIR: &str = "/srv/home-assistant/homeassistant/config/www/birdnet";

    /// Filename of the published copy in the dashboard directory.
    pub const DASHBOARD_FILENAME: &str = "roseplot_by_minute.png";
}
