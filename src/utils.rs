//! Formatting and validation helpers.
//!
//! Formatters prioritize human readability in log output; validators reject
//! configurations that would make a run meaningless before any measurement
//! begins.

use anyhow::Result;
use std::time::Duration;

/// Format a duration in a human-readable way, selecting the unit by magnitude.
pub fn format_duration(duration: Duration) -> String {
    let total_ns = duration.as_nanos();

    if total_ns < 1_000 {
        format!("{}ns", total_ns)
    } else if total_ns < 1_000_000 {
        format!("{:.2}μs", total_ns as f64 / 1_000.0)
    } else if total_ns < 1_000_000_000 {
        format!("{:.2}ms", total_ns as f64 / 1_000_000.0)
    } else if total_ns < 60_000_000_000 {
        format!("{:.2}s", total_ns as f64 / 1_000_000_000.0)
    } else {
        let seconds = duration.as_secs();
        format!("{}m {}s", seconds / 60, seconds % 60)
    }
}

/// Join a list of displayable values with ", " for banner output
pub fn format_list<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate that a trial count is usable
///
/// Zero trials would produce an empty sample set for every cell, so it is
/// rejected before measurement. The upper bound guards against run times in
/// the hours for the larger default sizes.
pub fn validate_trials(trials: usize) -> Result<()> {
    if trials == 0 {
        anyhow::bail!("Trial count cannot be zero");
    }
    if trials > 10_000 {
        anyhow::bail!("Trial count {} is too high (maximum 10000)", trials);
    }
    Ok(())
}

/// Validate the configured input sizes
///
/// Size zero is legal (the empty sequence is a required edge case); an empty
/// size list is not, since the results table would have no columns.
pub fn validate_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.is_empty() {
        anyhow::bail!("At least one input size is required");
    }
    if let Some(&size) = sizes.iter().find(|&&s| s > 50_000_000) {
        anyhow::bail!("Input size {} is too large (maximum 50000000)", size);
    }
    Ok(())
}
