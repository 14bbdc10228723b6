//! Wire format of one detection log line.

use serde::Deserialize;

/// A raw record as it appears in the newline-delimited JSON log.
///
/// Only the fields needed downstream are deserialized; bookkeeping fields
/// (`filename`, `oldest`, `skipped`, `hour_of_day`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct LogRecord {
    /// Analysis outcome; detections are only taken from `"success"` records.
    pub msg: String,

    /// ISO-8601 timestamp string of the analysis run.
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Identified species as `("<scientific>_<common>", confidence)` pairs.
    #[serde(default)]
    pub results: Vec<(String, f32)>,
}
