//! Detection log parsing.
//!
//! Reads a newline-delimited JSON log produced by a BirdNET analyzer and
//! flattens it into one [`Detection`] row per identified species. Parsing
//! is strict: any malformed line fails the whole load with its line number
//! (the log is not expected to be corrupt, and partial results would skew
//! the charts).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use tracing::debug;

use crate::constants::SUCCESS_MSG;
use crate::error::{Error, Result};
use crate::loader::{Detection, LogRecord};

/// Load a detection log and flatten it into detection rows.
///
/// Keeps only `"success"` records, expands each record's `results` list
/// into one row per `(label, confidence)` pair, splits the label into
/// scientific and common names, and retains rows with confidence strictly
/// greater than `min_confidence`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a line is not valid JSON,
/// or a success record carries an unparseable timestamp.
pub fn load_log(path: &Path, min_confidence: f32) -> Result<Vec<Detection>> {
    let file = File::open(path).map_err(|e| Error::LogRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut detections = Vec::new();
    let mut records = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::LogRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let record: LogRecord = serde_json::from_str(&line).map_err(|e| Error::LogParse {
            path: path.to_path_buf(),
            line: idx + 1,
            source: e,
        })?;

        if record.msg != SUCCESS_MSG {
            continue;
        }
        records += 1;

        let raw_timestamp = record.timestamp.unwrap_or_default();
        let timestamp =
            parse_timestamp(&raw_timestamp).ok_or_else(|| Error::TimestampParse {
                path: path.to_path_buf(),
                line: idx + 1,
                value: raw_timestamp,
            })?;

        for (label, confidence) in record.results {
            if confidence <= min_confidence {
                continue;
            }
            let (scientific, common) = Detection::split_label(&label);
            detections.push(Detection {
                timestamp,
                scientific,
                common,
                confidence,
            });
        }
    }

    debug!(
        "Loaded {} detection(s) from {} success record(s) in {}",
        detections.len(),
        records,
        path.display()
    );

    Ok(detections)
}

/// Parse a log timestamp.
///
/// RFC 3339 with offset is the primary format; naive timestamps without an
/// offset are accepted and treated as UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_log(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_filters_non_success_records() {
        let file = write_log(&[
            r#"{"msg":"success","timestamp":"2024-05-01T06:10:00+00:00","results":[["turdus_robin",0.5]]}"#,
            r#"{"msg":"no detections","timestamp":"2024-05-01T06:11:00+00:00"}"#,
            r#"{"msg":"error","timestamp":"2024-05-01T06:12:00+00:00"}"#,
        ]);

        let detections = load_log(file.path(), 0.4).unwrap();
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].common, "robin");
    }

    #[test]
    fn test_load_explodes_results() {
        // Two success records with 2 + 1 result pairs expand to 3 rows.
        let file = write_log(&[
            r#"{"msg":"success","timestamp":"2024-05-01T06:10:00+00:00","results":[["turdus_robin",0.5],["corvus_crow",0.6]]}"#,
            r#"{"msg":"success","timestamp":"2024-05-01T06:11:00+00:00","results":[["turdus_robin",0.7]]}"#,
        ]);

        let detections = load_log(file.path(), 0.0).unwrap();
        assert_eq!(detections.len(), 3);
    }

    #[test]
    fn test_load_threshold_is_strict() {
        let file = write_log(&[
            r#"{"msg":"success","timestamp":"2024-05-01T06:10:00+00:00","results":[["a_a",0.4],["b_b",0.41]]}"#,
        ]);

        let detections = load_log(file.path(), 0.4).unwrap();
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].common, "b");
        assert!(detections.iter().all(|d| d.confidence > 0.4));
    }

    #[test]
    fn test_load_splits_label_on_first_underscore() {
        let file = write_log(&[
            r#"{"msg":"success","timestamp":"2024-05-01T06:10:00+00:00","results":[["Turdus merula_Common_Blackbird",0.9]]}"#,
        ]);

        let detections = load_log(file.path(), 0.4).unwrap();
        assert_eq!(detections[0].scientific, "Turdus merula");
        assert_eq!(detections[0].common, "Common_Blackbird");
    }

    #[test]
    fn test_load_malformed_line_is_fatal() {
        let file = write_log(&[
            r#"{"msg":"success","timestamp":"2024-05-01T06:10:00+00:00","results":[["a_a",0.9]]}"#,
            "this is not json",
        ]);

        let result = load_log(file.path(), 0.4);
        assert!(matches!(result, Err(Error::LogParse { line: 2, .. })));
    }

    #[test]
    fn test_load_bad_timestamp_is_fatal() {
        let file = write_log(&[
            r#"{"msg":"success","timestamp":"not a time","results":[["a_a",0.9]]}"#,
        ]);

        let result = load_log(file.path(), 0.4);
        assert!(matches!(result, Err(Error::TimestampParse { line: 1, .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_log(Path::new("/nonexistent/birdnet.log"), 0.4);
        assert!(matches!(result, Err(Error::LogRead { .. })));
    }

    #[test]
    fn test_load_naive_timestamp_accepted() {
        let file = write_log(&[
            r#"{"msg":"success","timestamp":"2024-05-01 06:10:00","results":[["a_a",0.9]]}"#,
        ]);

        let detections = load_log(file.path(), 0.4).unwrap();
        assert_eq!(detections.len(), 1);
    }

    #[test]
    fn test_load_empty_lines_skipped() {
        let file = write_log(&[
            "",
            r#"{"msg":"success","timestamp":"2024-05-01T06:10:00+00:00","results":[["a_a",0.9]]}"#,
            "",
        ]);

        let detections = load_log(file.path(), 0.4).unwrap();
        assert_eq!(detections.len(), 1);
    }
}
