//! Error types for birdrose.

/// Result type alias for birdrose operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for birdrose.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Failed to read detection log file.
    #[error("failed to read log file '{path}'")]
    LogRead {
        /// Path to the log file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A log line was not valid JSON.
    #[error("failed to parse log file '{path}' at line {line}")]
    LogParse {
        /// Path to the log file.
        path: std::path::PathBuf,
        /// 1-based line number of the malformed record.
        line: usize,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A log record carried an unparseable timestamp.
    #[error("invalid timestamp '{value}' in log file '{path}' at line {line}")]
    TimestampParse {
        /// Path to the log file.
        path: std::path::PathBuf,
        /// 1-based line number of the record.
        line: usize,
        /// The timestamp string that failed to parse.
        value: String,
    },

    /// Chart rendering failed.
    #[error("failed to render chart '{path}': {reason}")]
    ChartRender {
        /// Path of the chart being written.
        path: std::path::PathBuf,
        /// Description of the rendering failure.
        reason: String,
    },

    /// Failed to copy a rendered chart to the dashboard directory.
    #[error("failed to publish chart '{from}' to '{to}'")]
    Publish {
        /// Source chart path.
        from: std::path::PathBuf,
        /// Destination path.
        to: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
