//! Result collection and report writing.
//!
//! The `ResultsTable` is built incrementally by the runner (one row per
//! algorithm, one aggregated value per size) and consumed exactly once by the
//! `ResultsManager`, which owns the output paths. The CSV file is the primary
//! artifact; the optional JSON report adds run metadata and per-cell sample
//! statistics for reproducibility. Both files are fully rewritten on each
//! run, and any write failure is fatal so a partial file is never mistaken
//! for a complete report.

use crate::{benchmark::BenchmarkConfig, metrics::SampleStats};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

/// One results-table row: an algorithm and its aggregated duration per size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmRow {
    pub name: String,
    /// Median duration in decimal seconds, one per configured size, in size order
    pub median_secs: Vec<f64>,
    /// Full per-cell sample statistics, parallel to `median_secs`
    pub stats: Vec<SampleStats>,
}

impl AlgorithmRow {
    pub fn new(name: String, stats: Vec<SampleStats>) -> Self {
        let median_secs = stats.iter().map(|cell| cell.median_secs).collect();
        Self {
            name,
            median_secs,
            stats,
        }
    }
}

/// Aggregated benchmark results: row per algorithm, column per input size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsTable {
    /// Column order of the table, matching the configured size list
    pub sizes: Vec<usize>,
    /// Rows in algorithm registration order
    pub rows: Vec<AlgorithmRow>,
}

impl ResultsTable {
    pub fn new(sizes: Vec<usize>) -> Self {
        Self {
            sizes,
            rows: Vec::new(),
        }
    }

    /// Append a finished row. Rows arrive in registration order.
    pub fn push_row(&mut self, row: AlgorithmRow) {
        debug_assert_eq!(row.median_secs.len(), self.sizes.len());
        self.rows.push(row);
    }

    /// Render the table as CSV.
    ///
    /// Header row is `algorithm_name,<size_1>,...,<size_m>`; each data row is
    /// the algorithm name followed by median durations in decimal seconds.
    /// Durations use `f64` display formatting, which preserves full
    /// round-trip precision.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("algorithm_name");
        for size in &self.sizes {
            let _ = write!(out, ",{}", size);
        }
        out.push('\n');

        for row in &self.rows {
            out.push_str(&row.name);
            for value in &row.median_secs {
                let _ = write!(out, ",{}", value);
            }
            out.push('\n');
        }
        out
    }
}

/// Results manager for handling report output
pub struct ResultsManager {
    output_file: PathBuf,
    json_file: Option<PathBuf>,
    config: BenchmarkConfig,
    table: Option<ResultsTable>,
}

impl ResultsManager {
    /// Create a new results manager writing CSV to `output_file`
    pub fn new(output_file: &Path, config: BenchmarkConfig) -> Self {
        Self {
            output_file: output_file.to_path_buf(),
            json_file: None,
            config,
            table: None,
        }
    }

    /// Also write a structured JSON report to `path` on finalize
    pub fn enable_json_output<P: AsRef<Path>>(&mut self, path: P) {
        self.json_file = Some(path.as_ref().to_path_buf());
    }

    /// Hand the finalized table to the manager
    pub fn set_table(&mut self, table: ResultsTable) {
        self.table = Some(table);
    }

    /// Write all configured reports.
    ///
    /// Output files are rewritten from scratch, never appended. I/O failures
    /// propagate immediately.
    pub fn finalize(&mut self) -> Result<()> {
        let table = self
            .table
            .take()
            .context("no results collected before finalize")?;

        std::fs::write(&self.output_file, table.to_csv())
            .with_context(|| format!("failed to write results to {:?}", self.output_file))?;
        info!("Results written to: {:?}", self.output_file);

        if let Some(ref json_file) = self.json_file {
            let report = FinalReport {
                metadata: ReportMetadata::collect(),
                config: self.config.clone(),
                results: table,
            };
            let json = serde_json::to_string_pretty(&report)?;
            std::fs::write(json_file, json)
                .with_context(|| format!("failed to write JSON report to {:?}", json_file))?;
            info!("JSON report written to: {:?}", json_file);
        }

        Ok(())
    }
}

/// Full benchmark report for the optional JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct FinalReport {
    pub metadata: ReportMetadata,
    pub config: BenchmarkConfig,
    pub results: ResultsTable,
}

/// Run metadata recorded for reproducibility
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub system_info: SystemInfo,
}

impl ReportMetadata {
    fn collect() -> Self {
        Self {
            version: crate::VERSION.to_string(),
            timestamp: chrono::Utc::now(),
            system_info: SystemInfo::collect(),
        }
    }
}

/// Host information recorded alongside the results
#[derive(Debug, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub architecture: String,
    pub cpu_cores: usize,
    pub rust_version: String,
}

impl SystemInfo {
    fn collect() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            architecture: std::env::consts::ARCH.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version: env!("CARGO_PKG_RUST_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{AlgorithmKind, InputDistribution};
    use std::time::Duration;

    fn stats_cell(median_secs: f64) -> SampleStats {
        SampleStats::from_durations(&[Duration::from_secs_f64(median_secs)]).unwrap()
    }

    fn sample_table() -> ResultsTable {
        let mut table = ResultsTable::new(vec![0, 1, 5]);
        table.push_row(AlgorithmRow::new(
            "selection".to_string(),
            vec![stats_cell(0.25), stats_cell(0.5), stats_cell(1.0)],
        ));
        table.push_row(AlgorithmRow::new(
            "bubble".to_string(),
            vec![stats_cell(0.125), stats_cell(0.5), stats_cell(2.0)],
        ));
        table
    }

    fn sample_config() -> BenchmarkConfig {
        BenchmarkConfig {
            algorithms: vec![AlgorithmKind::Selection, AlgorithmKind::Bubble],
            sizes: vec![0, 1, 5],
            trials: 1,
            seed: Some(42),
            distribution: InputDistribution::Random,
        }
    }

    #[test]
    fn test_csv_rendering() {
        let csv = sample_table().to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "algorithm_name,0,1,5");
        assert_eq!(lines[1], "selection,0.25,0.5,1");
        assert_eq!(lines[2], "bubble,0.125,0.5,2");
    }

    #[test]
    fn test_csv_preserves_full_precision() {
        // Bypass AlgorithmRow::new: Duration has nanosecond resolution, and
        // this checks the f64 -> text round trip alone.
        let mut table = ResultsTable::new(vec![10]);
        table.push_row(AlgorithmRow {
            name: "merge".to_string(),
            median_secs: vec![0.000123456789012345],
            stats: vec![stats_cell(0.000123456789012345)],
        });
        let csv = table.to_csv();
        let value: f64 = csv
            .lines()
            .nth(1)
            .and_then(|line| line.split(',').nth(1))
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(value, 0.000123456789012345);
    }

    #[test]
    fn test_finalize_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        let mut manager = ResultsManager::new(&path, sample_config());
        manager.set_table(sample_table());
        manager.finalize().unwrap();

        // A second run with a smaller table must fully replace the file.
        let mut small = ResultsTable::new(vec![1]);
        small.push_row(AlgorithmRow::new("bubble".to_string(), vec![stats_cell(0.5)]));
        let mut manager = ResultsManager::new(&path, sample_config());
        manager.set_table(small.clone());
        manager.finalize().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, small.to_csv());
    }

    #[test]
    fn test_finalize_without_table_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager =
            ResultsManager::new(&dir.path().join("results.csv"), sample_config());
        assert!(manager.finalize().is_err());
    }

    #[test]
    fn test_json_report_shape() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("results.csv");
        let json_path = dir.path().join("report.json");

        let mut manager = ResultsManager::new(&csv_path, sample_config());
        manager.enable_json_output(&json_path);
        manager.set_table(sample_table());
        manager.finalize().unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(report["config"]["trials"], 1);
        assert_eq!(report["config"]["distribution"], "Random");
        assert_eq!(report["results"]["rows"][0]["name"], "selection");
        assert_eq!(report["results"]["sizes"][2], 5);
        assert!(report["metadata"]["system_info"]["cpu_cores"].as_u64().unwrap() > 0);
    }
}
