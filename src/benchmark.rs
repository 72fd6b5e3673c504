//! # Benchmark Engine Module
//!
//! Core measurement logic: the timer, the trial runner, and the
//! `BenchmarkRunner` that drives the full algorithm x size matrix.
//!
//! ## Measurement Protocol
//!
//! For every (algorithm, size) cell the runner:
//! 1. Builds an input stream for the configured distribution and seed
//! 2. Performs one untimed warm-up invocation on the first stream element
//! 3. Times the configured number of trials, one fresh input each
//! 4. Aggregates the samples (median, plus summary statistics for the
//!    JSON report)
//!
//! Everything runs on one thread with no suspension points: wall-clock
//! measurements of CPU-bound work are only meaningful when uncontended.

use crate::{
    cli::{AlgorithmKind, Args, InputDistribution},
    generator::SequenceStream,
    metrics::SampleStats,
    results::{AlgorithmRow, ResultsTable},
    sort::{SortFn, SortRegistry},
    utils::{format_duration, format_list, validate_sizes, validate_trials},
};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Configuration for benchmark execution
///
/// Immutable for the duration of a run and read-only by every component.
/// The selected input distribution is an explicit field here so it is
/// recorded alongside the results instead of being an implicit choice.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Algorithms to measure, in table row order
    pub algorithms: Vec<AlgorithmKind>,

    /// Input sizes to measure, in table column order
    pub sizes: Vec<usize>,

    /// Timed trials per (algorithm, size) cell
    pub trials: usize,

    /// Seed for input generation; `None` means OS entropy (non-reproducible)
    pub seed: Option<u64>,

    /// Structural distribution of generated inputs
    pub distribution: InputDistribution,
}

impl BenchmarkConfig {
    /// Create benchmark configuration from CLI arguments
    ///
    /// Expands the `all` algorithm selection and validates everything that
    /// must be rejected before measurement begins.
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Self {
            algorithms: AlgorithmKind::expand_all(args.algorithms.clone()),
            sizes: args.sizes.clone(),
            trials: args.trials,
            seed: if args.no_seed { None } else { Some(args.seed) },
            distribution: args.distribution,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make a run meaningless
    pub fn validate(&self) -> Result<()> {
        validate_trials(self.trials)?;
        validate_sizes(&self.sizes)?;
        if self.algorithms.is_empty() {
            bail!("At least one algorithm must be selected");
        }
        Ok(())
    }
}

/// Single source of truth for displaying the run configuration banner
struct BenchmarkConfigDisplay<'a> {
    config: &'a BenchmarkConfig,
}

impl<'a> std::fmt::Display for BenchmarkConfigDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seed_str = match self.config.seed {
            Some(seed) => seed.to_string(),
            None => "OS entropy (not reproducible)".to_string(),
        };

        writeln!(
            f,
            "-----------------------------------------------------------------"
        )?;
        writeln!(f, "Starting Sort Benchmark")?;
        writeln!(
            f,
            "  Algorithms:         {}",
            format_list(&self.config.algorithms)
        )?;
        writeln!(f, "  Sizes:              {}", format_list(&self.config.sizes))?;
        writeln!(f, "  Trials per cell:    {}", self.config.trials)?;
        writeln!(f, "  Distribution:       {}", self.config.distribution)?;
        writeln!(f, "  Seed:               {}", seed_str)?;
        write!(
            f,
            "-----------------------------------------------------------------"
        )
    }
}

/// Measure the wall-clock duration of one invocation of `algorithm`.
///
/// The input and the produced vector both pass through `black_box` so the
/// optimizer cannot specialize on the input or discard the unused result.
/// Timer overhead is two `Instant` reads, negligible against the sizes under
/// test.
pub fn time_sort(algorithm: SortFn, input: &[u64]) -> Duration {
    let start = Instant::now();
    let sorted = algorithm(black_box(input));
    black_box(sorted);
    start.elapsed()
}

/// Run repeated timed trials of one algorithm over a stream of inputs.
///
/// Consumes one stream element for an untimed warm-up, then times up to
/// `trials` invocations, one element each: `trials + 1` elements total when
/// the stream is long enough. The warm-up keeps one-time costs (cold caches,
/// lazy page faults) out of the first sample. A stream that runs dry early
/// yields a short sample list, not an error.
pub fn run_trials<I>(algorithm: SortFn, mut inputs: I, trials: usize) -> Vec<Duration>
where
    I: Iterator<Item = Vec<u64>>,
{
    match inputs.next() {
        Some(input) => {
            let _ = time_sort(algorithm, &input);
        }
        None => return Vec::new(),
    }

    let mut samples = Vec::with_capacity(trials);
    for input in inputs.take(trials) {
        samples.push(time_sort(algorithm, &input));
    }
    samples
}

/// Benchmark runner that drives the full algorithm x size matrix
///
/// Iterates the registry in registration order and, for each algorithm, the
/// configured sizes in order, collecting one aggregated value per cell into
/// the results table. The runner trusts registered algorithms to honor the
/// sort contract; that contract is enforced by the test suite instead of at
/// measurement time.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    registry: SortRegistry,
}

impl BenchmarkRunner {
    /// Create a runner for the algorithms named in the configuration
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        let registry = SortRegistry::from_kinds(&config.algorithms)?;
        Ok(Self { config, registry })
    }

    /// Create a runner with a caller-assembled registry
    ///
    /// Lets library users benchmark custom sorting functions without touching
    /// any other component.
    pub fn with_registry(config: BenchmarkConfig, registry: SortRegistry) -> Self {
        Self { config, registry }
    }

    /// Execute the benchmark matrix and return the finalized results table
    pub fn run(&self) -> Result<ResultsTable> {
        info!(
            "{}",
            BenchmarkConfigDisplay {
                config: &self.config
            }
        );

        let started = Instant::now();
        let mut table = ResultsTable::new(self.config.sizes.clone());

        for (name, algorithm) in self.registry.iter() {
            info!("Benchmarking algorithm: {}", name);

            let mut stats = Vec::with_capacity(self.config.sizes.len());
            for &size in &self.config.sizes {
                let stream = SequenceStream::new(size, self.config.distribution, self.config.seed);
                let samples = run_trials(algorithm, stream, self.config.trials);
                let cell = SampleStats::from_durations(&samples).with_context(|| {
                    format!("no samples measured for '{}' at size {}", name, size)
                })?;

                debug!(
                    "  size {:>8}: median {} over {} trial(s)",
                    size,
                    format_duration(Duration::from_secs_f64(cell.median_secs)),
                    cell.samples
                );
                stats.push(cell);
            }

            table.push_row(AlgorithmRow::new(name.to_string(), stats));
        }

        info!(
            "Benchmark matrix completed in {}",
            format_duration(started.elapsed())
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::std_sort;
    use std::cell::Cell;

    fn sample_config() -> BenchmarkConfig {
        BenchmarkConfig {
            algorithms: vec![AlgorithmKind::Selection],
            sizes: vec![0, 1, 5],
            trials: 1,
            seed: Some(42),
            distribution: InputDistribution::Random,
        }
    }

    #[test]
    fn test_warm_up_consumes_one_extra_element() {
        let pulled = Cell::new(0usize);
        let stream = std::iter::repeat_with(|| {
            pulled.set(pulled.get() + 1);
            vec![3, 1, 2]
        });

        let samples = run_trials(std_sort::<u64>, stream, 4);
        assert_eq!(samples.len(), 4);
        assert_eq!(pulled.get(), 5);
    }

    #[test]
    fn test_short_stream_yields_short_trials() {
        let inputs = vec![vec![2, 1], vec![1, 2], vec![2, 1]];
        // 3 elements: one warm-up, then only 2 of the 5 requested trials.
        let samples = run_trials(std_sort::<u64>, inputs.into_iter(), 5);
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_empty_stream_yields_no_samples() {
        let samples = run_trials(std_sort::<u64>, std::iter::empty(), 3);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_time_sort_executes_work_once() {
        let input: Vec<u64> = (0..512).rev().collect();
        let elapsed = time_sort(std_sort::<u64>, &input);
        // Wall-clock time of real work is positive at this size.
        assert!(elapsed > Duration::ZERO);
    }

    #[test]
    fn test_config_validation() {
        assert!(sample_config().validate().is_ok());

        let mut config = sample_config();
        config.trials = 0;
        assert!(config.validate().is_err());

        let mut config = sample_config();
        config.sizes.clear();
        assert!(config.validate().is_err());

        let mut config = sample_config();
        config.algorithms.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_runner_produces_one_row_per_algorithm() {
        let mut config = sample_config();
        config.algorithms = vec![AlgorithmKind::Selection, AlgorithmKind::Bubble];
        let runner = BenchmarkRunner::new(config).unwrap();
        let table = runner.run().unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].name, "selection");
        assert_eq!(table.rows[1].name, "bubble");
        for row in &table.rows {
            assert_eq!(row.median_secs.len(), 3);
            assert!(row.median_secs.iter().all(|&secs| secs >= 0.0));
        }
    }

    #[test]
    fn test_runner_with_custom_registry() {
        let mut registry = SortRegistry::new();
        registry.register("custom", std_sort::<u64>).unwrap();

        let runner = BenchmarkRunner::with_registry(sample_config(), registry);
        let table = runner.run().unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].name, "custom");
    }
}
