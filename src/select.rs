//! Series selection: filter, rescale, and order table entries for one report.

use crate::group::{Point, ResultTable};
use crate::parse::template_parameter;

/// Rescaling applied to each point as `f(size, time)`.
pub type ScaleFn = fn(u64, f64) -> f64;

/// A labeled point sequence, rendered as one plotted line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<Point>,
}

/// Filter/transform arguments for one selector call.
///
/// The defaults select everything unchanged; reports override only what they
/// need, mirroring how report definitions are written in the binaries.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    keep: Option<Vec<String>>,
    skip: Option<Vec<String>>,
    prefix: Option<String>,
    size_range: Option<(u64, u64)>,
    scale: Option<ScaleFn>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only series whose structure or test name contains one of `terms`.
    pub fn keep(mut self, terms: &[&str]) -> Self {
        self.keep = Some(terms.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Drop series whose structure or test name contains any of `terms`.
    /// Takes precedence over [`keep`](Self::keep).
    pub fn skip(mut self, terms: &[&str]) -> Self {
        self.skip = Some(terms.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Prepend `prefix` to every series label.
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    /// Keep only points with `lower < size <= upper`.
    pub fn size_range(mut self, lower: u64, upper: u64) -> Self {
        self.size_range = Some((lower, upper));
        self
    }

    /// Rescale each measurement as `f(size, time)`.
    pub fn scale(mut self, f: ScaleFn) -> Self {
        self.scale = Some(f);
        self
    }

    fn satisfies_filter(&self, structure: &str, test: &str) -> bool {
        if let Some(skip) = &self.skip {
            if skip
                .iter()
                .any(|term| structure.contains(term.as_str()) || test.contains(term.as_str()))
            {
                return false;
            }
        }
        match &self.keep {
            None => true,
            Some(keep) => keep
                .iter()
                .any(|term| structure.contains(term.as_str()) || test.contains(term.as_str())),
        }
    }

    fn label_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }

    /// Range-filter, rescale, and sort one structure's points.
    fn transform_points(&self, points: &[Point]) -> Vec<Point> {
        let mut out: Vec<Point> = points
            .iter()
            .filter(|&&(size, _)| match self.size_range {
                Some((lower, upper)) => lower < size && size <= upper,
                None => true,
            })
            .map(|&(size, time)| match self.scale {
                Some(f) => (size, f(size, time)),
                None => (size, time),
            })
            .collect();
        out.sort_by_key(|&(size, _)| size);
        out
    }
}

/// Legend-grouping sort key: the label's lowercased `<`-split, reversed, so
/// series cluster by inner template parameter before outer structure name.
fn series_sort_key(label: &str) -> Vec<String> {
    let mut parts: Vec<String> = label.to_lowercase().split('<').map(str::to_string).collect();
    parts.reverse();
    parts
}

/// All series of one test, filtered by `selection` and labeled with the
/// structure name. A test absent from the table yields an empty list.
pub fn series_for_test(table: &ResultTable, test: &str, selection: &Selection) -> Vec<Series> {
    let mut series: Vec<Series> = table
        .structures(test)
        .filter(|(structure, _)| selection.satisfies_filter(structure, test))
        .map(|(structure, points)| Series {
            label: format!("{}{structure}", selection.label_prefix()),
            points: selection.transform_points(points),
        })
        .collect();
    series.sort_by_key(|s| series_sort_key(&s.label));
    series
}

/// All series whose structure name starts with `query`, across every test.
///
/// Labels carry the test name; when `query` is generic (no `<`) the
/// structure's template parameter is appended to tell instantiations apart.
pub fn series_for_structure(
    table: &ResultTable,
    query: &str,
    selection: &Selection,
) -> Vec<Series> {
    let generic_query = !query.contains('<');
    let mut series: Vec<Series> = table
        .iter()
        .filter(|(test, structure, _)| {
            structure.starts_with(query) && selection.satisfies_filter(structure, test)
        })
        .map(|(test, structure, points)| {
            let label = if generic_query {
                format!(
                    "{}{test}-{}",
                    selection.label_prefix(),
                    template_parameter(structure)
                )
            } else {
                format!("{}{test}", selection.label_prefix())
            };
            Series {
                label,
                points: selection.transform_points(points),
            }
        })
        .collect();
    series.sort_by_key(|s| series_sort_key(&s.label));
    series
}
