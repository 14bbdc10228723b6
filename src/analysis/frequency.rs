//! Species frequency ranking.

use std::collections::HashMap;

use crate::loader::Detection;

/// Rank species by detection count.
///
/// Counts detections per common name and returns the top `n`, ordered by
/// count descending with ties broken by name ascending.
pub fn top_species(detections: &[Detection], n: usize) -> Vec<(String, u64)> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for detection in detections {
        *counts.entry(detection.common.as_str()).or_insert(0) += 1;
    }

    let mut ranking: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranking.truncate(n);
    ranking
}
