//! serde model of the benchmark results file.
//!
//! The input is the JSON report emitted by the benchmarking harness: a
//! top-level object whose `benchmarks` field holds one record per run. Only
//! the fields this tool consumes are modeled; everything else in a record is
//! preserved in `extra` and ignored.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ChartError;

/// One benchmark run: a composite name plus its measured CPU time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Composite name, e.g. `testAccess<std::vector<int>>/1024`.
    pub name: String,

    /// Measured CPU time for the run, in the harness's time unit.
    pub cpu_time: f64,

    /// Time unit reported by the harness (typically `"ns"`).
    #[serde(default)]
    pub time_unit: Option<String>,

    /// Any further per-record fields the harness emitted.
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

/// Top-level shape of the results file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsFile {
    /// Machine/build context block, passed through untouched.
    #[serde(default)]
    pub context: Option<serde_json::Value>,

    pub benchmarks: Vec<BenchmarkRecord>,
}

/// Read and decode a results file.
///
/// A missing file or malformed JSON is fatal; per-record problems are dealt
/// with later, during grouping.
pub fn load_results(path: &Path) -> Result<Vec<BenchmarkRecord>, ChartError> {
    let raw = fs::read_to_string(path)?;
    let file: ResultsFile = serde_json::from_str(&raw)?;
    Ok(file.benchmarks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_record() {
        let raw = r#"{
            "context": {"host_name": "box", "num_cpus": 8},
            "benchmarks": [
                {"name": "testAccess<std::vector<int>>/1024", "cpu_time": 50.0, "time_unit": "ns"},
                {"name": "testAccess<std::vector<int>>/2048", "cpu_time": 101.5, "iterations": 9000}
            ]
        }"#;

        let file: ResultsFile = serde_json::from_str(raw).unwrap();
        assert_eq!(file.benchmarks.len(), 2);
        assert_eq!(file.benchmarks[0].name, "testAccess<std::vector<int>>/1024");
        assert_eq!(file.benchmarks[0].cpu_time, 50.0);
        assert_eq!(file.benchmarks[0].time_unit.as_deref(), Some("ns"));
        assert_eq!(file.benchmarks[1].extra["iterations"], 9000);
    }

    #[test]
    fn load_results_missing_file_is_fatal() {
        let err = load_results(Path::new("/nonexistent/results.json")).unwrap_err();
        assert!(matches!(err, ChartError::Io(_)));
    }

    #[test]
    fn load_results_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{\"benchmarks\": [").unwrap();
        let err = load_results(&path).unwrap_err();
        assert!(matches!(err, ChartError::Json(_)));
    }
}
