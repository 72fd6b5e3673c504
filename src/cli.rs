use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sort Benchmark Suite - measure and compare in-memory sorting algorithms
#[derive(Parser, Debug, Clone)]
#[clap(version, about, long_about = None)]
pub struct Args {
    /// Sorting algorithms to benchmark (space-separated: std, selection, merge, merge-iter, bubble, or all)
    #[clap(short = 'a', long, value_enum, default_values_t = vec![AlgorithmKind::All], help_heading = "Core Options", num_args = 1..)]
    pub algorithms: Vec<AlgorithmKind>,

    /// Input sizes to benchmark (space-separated element counts)
    #[clap(short = 's', long, num_args = 1.., default_values_t = crate::defaults::SIZES.to_vec())]
    pub sizes: Vec<usize>,

    /// Number of timed trials per (algorithm, size) pair
    #[clap(short = 't', long, default_value_t = crate::defaults::TRIALS)]
    pub trials: usize,

    /// Seed for input generation (a fixed seed keeps runs comparable over time)
    #[clap(long, default_value_t = crate::defaults::SEED)]
    pub seed: u64,

    /// Seed input generation from OS entropy instead of --seed
    #[clap(long, default_value_t = false)]
    pub no_seed: bool,

    /// Structural distribution of generated inputs
    #[clap(short = 'd', long, value_enum, default_value_t = InputDistribution::Random)]
    pub distribution: InputDistribution,

    /// Output file for results (CSV format, fully rewritten each run)
    #[clap(short = 'o', long, default_value = crate::defaults::OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Optional JSON report with per-cell statistics and run metadata
    #[clap(long)]
    pub json_output: Option<PathBuf>,

    /// Verbose output
    #[clap(short = 'v', long, default_value_t = false)]
    pub verbose: bool,
}

/// Sorting algorithms available for benchmarking
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum AlgorithmKind {
    /// Standard library unstable sort (baseline)
    #[clap(name = "std")]
    Std,

    /// Selection sort
    #[clap(name = "selection")]
    Selection,

    /// Merge sort, merging with explicit index cursors
    #[clap(name = "merge")]
    Merge,

    /// Merge sort, merging with paired lazy cursors
    #[clap(name = "merge-iter")]
    MergeIter,

    /// Bubble sort with early termination
    #[clap(name = "bubble")]
    Bubble,

    /// All available algorithms
    #[clap(name = "all")]
    All,
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Display names double as CSV row labels, so they match the CLI names.
        match self {
            AlgorithmKind::Std => write!(f, "std"),
            AlgorithmKind::Selection => write!(f, "selection"),
            AlgorithmKind::Merge => write!(f, "merge"),
            AlgorithmKind::MergeIter => write!(f, "merge-iter"),
            AlgorithmKind::Bubble => write!(f, "bubble"),
            AlgorithmKind::All => write!(f, "all"),
        }
    }
}

impl AlgorithmKind {
    /// Expand the "All" variant to all available algorithms
    pub fn expand_all(kinds: Vec<AlgorithmKind>) -> Vec<AlgorithmKind> {
        if kinds.contains(&AlgorithmKind::All) {
            vec![
                AlgorithmKind::Std,
                AlgorithmKind::Selection,
                AlgorithmKind::Merge,
                AlgorithmKind::MergeIter,
                AlgorithmKind::Bubble,
            ]
        } else {
            kinds
        }
    }
}

/// Structural property of generated benchmark inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum InputDistribution {
    /// Uniformly random permutation, fresh per trial
    #[clap(name = "random")]
    Random,

    /// Already ascending, identical for every trial
    #[clap(name = "sorted")]
    Sorted,

    /// Already descending, identical for every trial
    #[clap(name = "reverse-sorted")]
    ReverseSorted,
}

impl std::fmt::Display for InputDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputDistribution::Random => write!(f, "random"),
            InputDistribution::Sorted => write!(f, "sorted"),
            InputDistribution::ReverseSorted => write!(f, "reverse-sorted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_kind_display() {
        assert_eq!(AlgorithmKind::Std.to_string(), "std");
        assert_eq!(AlgorithmKind::Selection.to_string(), "selection");
        assert_eq!(AlgorithmKind::Merge.to_string(), "merge");
        assert_eq!(AlgorithmKind::MergeIter.to_string(), "merge-iter");
        assert_eq!(AlgorithmKind::Bubble.to_string(), "bubble");
        assert_eq!(AlgorithmKind::All.to_string(), "all");
    }

    #[test]
    fn test_algorithm_kind_expand_all() {
        let all_kinds = vec![
            AlgorithmKind::Std,
            AlgorithmKind::Selection,
            AlgorithmKind::Merge,
            AlgorithmKind::MergeIter,
            AlgorithmKind::Bubble,
        ];
        assert_eq!(
            AlgorithmKind::expand_all(vec![AlgorithmKind::All]),
            all_kinds
        );
        assert_eq!(
            AlgorithmKind::expand_all(vec![AlgorithmKind::Bubble]),
            vec![AlgorithmKind::Bubble]
        );
        assert_eq!(
            AlgorithmKind::expand_all(vec![AlgorithmKind::Bubble, AlgorithmKind::All]),
            all_kinds
        );
    }

    #[test]
    fn test_input_distribution_display() {
        assert_eq!(InputDistribution::Random.to_string(), "random");
        assert_eq!(InputDistribution::Sorted.to_string(), "sorted");
        assert_eq!(
            InputDistribution::ReverseSorted.to_string(),
            "reverse-sorted"
        );
    }
}
