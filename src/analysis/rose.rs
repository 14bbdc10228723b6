//! Trailing-hour per-minute species counts.
//!
//! Detections are bucketed by the clock minute-of-hour of their timestamp,
//! not by elapsed minutes before the reference. Detections from different
//! hours at the same clock minute therefore merge into one wedge; this
//! mirrors the deployed behavior the charts are compared against.

use chrono::{DateTime, Duration, FixedOffset, Timelike};

use crate::constants::window::{MINUTES_PER_HOUR, TRAILING_MINUTES};
use crate::loader::Detection;

/// Per-minute, per-species detection counts for the rose chart.
///
/// The pivot always has exactly [`MINUTES_PER_HOUR`] minute rows with
/// missing species/minute combinations held at zero. Species columns are
/// in sorted name order.
#[derive(Debug, Clone)]
pub struct RoseData {
    species: Vec<String>,
    /// Indexed `[species][minute]`.
    counts: Vec<Vec<u64>>,
}

impl RoseData {
    /// Species column names in stacking order (bottom first).
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /// Detection count for one species at one minute.
    pub fn count(&self, species: usize, minute: usize) -> u64 {
        self.counts[species][minute]
    }

    /// Stacking offset: total count of all species below `species` at `minute`.
    pub fn stack_base(&self, species: usize, minute: usize) -> u64 {
        self.counts[..species].iter().map(|row| row[minute]).sum()
    }

    /// Total stacked height of one minute wedge.
    pub fn wedge_total(&self, minute: usize) -> u64 {
        self.counts.iter().map(|row| row[minute]).sum()
    }

    /// Largest wedge total across all minutes.
    pub fn max_wedge_total(&self) -> u64 {
        (0..MINUTES_PER_HOUR)
            .map(|minute| self.wedge_total(minute))
            .max()
            .unwrap_or(0)
    }

    /// Whether the window contained no detections at all.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

/// Bucket detections from the trailing hour into per-minute species counts.
///
/// The window is `[reference - 59 minutes, reference]`, inclusive on both
/// ends. Species columns are sorted by common name for deterministic
/// stacking order.
pub fn minute_counts(detections: &[Detection], reference: DateTime<FixedOffset>) -> RoseData {
    let window_start = reference - Duration::minutes(TRAILING_MINUTES);
    let in_window: Vec<&Detection> = detections
        .iter()
        .filter(|d| d.timestamp >= window_start && d.timestamp <= reference)
        .collect();

    let mut species: Vec<String> = in_window.iter().map(|d| d.common.clone()).collect();
    species.sort();
    species.dedup();

    let mut counts = vec![vec![0u64; MINUTES_PER_HOUR]; species.len()];
    for detection in &in_window {
        let minute = (detection.timestamp.minute() as usize).min(MINUTES_PER_HOUR - 1);
        if let Ok(idx) = species.binary_search(&detection.common) {
            counts[idx][minute] += 1;
        }
    }

    RoseData { species, counts }
}
