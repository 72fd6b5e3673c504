//! Trial-sample aggregation.
//!
//! The results table aggregates repeated trial durations with the exact
//! median: the middle element when sorted, or the mean of the two middle
//! elements for an even sample count. The median is used instead of the mean
//! specifically to resist outlier trials caused by scheduler noise. The
//! richer [`SampleStats`] summary feeds the optional JSON report only.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Exact median of a sample set.
///
/// Returns `None` for an empty slice. Even-length input yields the mean of
/// the two middle elements.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Convert duration samples to decimal seconds
pub fn durations_to_secs(samples: &[Duration]) -> Vec<f64> {
    samples.iter().map(Duration::as_secs_f64).collect()
}

/// Median of duration samples, in decimal seconds
pub fn median_duration_secs(samples: &[Duration]) -> Option<f64> {
    median(&durations_to_secs(samples))
}

/// Summary statistics over the trial samples of one (algorithm, size) cell.
///
/// Only the median reaches the CSV table; the rest is recorded in the JSON
/// report for anyone investigating measurement variance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleStats {
    pub median_secs: f64,
    pub mean_secs: f64,
    pub min_secs: f64,
    pub max_secs: f64,
    pub std_dev_secs: f64,
    pub samples: usize,
}

impl SampleStats {
    /// Compute statistics from raw duration samples; `None` when empty.
    pub fn from_durations(samples: &[Duration]) -> Option<Self> {
        let secs = durations_to_secs(samples);
        let median_secs = median(&secs)?;

        let count = secs.len() as f64;
        let mean = secs.iter().sum::<f64>() / count;
        let min = secs.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = secs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        // Population standard deviation
        let variance = secs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count;

        Some(Self {
            median_secs,
            mean_secs: mean,
            min_secs: min,
            max_secs: max,
            std_dev_secs: variance.sqrt(),
            samples: secs.len(),
        })
    }
}
