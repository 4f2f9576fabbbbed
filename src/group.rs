//! Grouping of raw records into the two-level result table.

use std::collections::BTreeMap;

use crate::parse::{decode_size, split_name};
use crate::schema::BenchmarkRecord;

/// One measured data point: (input size, CPU time).
pub type Point = (u64, f64);

/// Test name -> structure name -> points in input order.
///
/// Built once per results file and read-only afterwards. Points keep the
/// order they appeared in the input (the harness emits sizes ascending, but
/// nothing here relies on that); sorting happens in the selector.
#[derive(Debug, Default)]
pub struct ResultTable {
    tests: BTreeMap<String, BTreeMap<String, Vec<Point>>>,
}

impl ResultTable {
    /// Group records by (test, structure), skipping records whose names do
    /// not decode. Each skipped record gets a stderr diagnostic; a malformed
    /// record never aborts the batch.
    pub fn from_records(records: &[BenchmarkRecord]) -> Self {
        let mut table = ResultTable::default();
        for record in records {
            let parsed = match split_name(&record.name) {
                Ok(parsed) => parsed,
                Err(err) => {
                    eprintln!("skipping `{}`: {err}", record.name);
                    continue;
                }
            };
            let size = match decode_size(parsed.size) {
                Ok(size) => size,
                Err(err) => {
                    eprintln!("skipping `{}`: {err}", record.name);
                    continue;
                }
            };
            table
                .tests
                .entry(parsed.test.to_string())
                .or_default()
                .entry(parsed.structure.to_string())
                .or_default()
                .push((size, record.cpu_time));
        }
        table
    }

    /// Structures and their points for one test. A test that never appeared
    /// yields an empty iterator, not an error.
    pub fn structures(&self, test: &str) -> impl Iterator<Item = (&str, &[Point])> {
        self.tests
            .get(test)
            .into_iter()
            .flat_map(|by_structure| by_structure.iter())
            .map(|(structure, points)| (structure.as_str(), points.as_slice()))
    }

    /// Every (test, structure, points) triple in the table.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &[Point])> {
        self.tests.iter().flat_map(|(test, by_structure)| {
            by_structure.iter().map(move |(structure, points)| {
                (test.as_str(), structure.as_str(), points.as_slice())
            })
        })
    }
}
