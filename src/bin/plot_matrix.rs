use bench_chart::group::ResultTable;
use bench_chart::render::{render_document, AxisLabels, DocumentMeta, Report};
use bench_chart::schema::load_results;
use bench_chart::select::{series_for_test, Selection};
use bench_chart::ChartError;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Fixed output filename for the matrix-traversal report family.
const OUTPUT: &str = "matrixPerformance.html";

const AXES: AxisLabels = AxisLabels {
    x: "Matrix Dimension",
    y: "CPU Time (ns)",
};

#[derive(Parser, Debug)]
#[command(name = "plot-matrix")]
#[command(about = "Square-matrix traversal charts from a benchmark results file")]
struct Args {
    /// Benchmark results JSON file.
    #[arg(value_name = "RESULTS")]
    results: PathBuf,
}

/// CPU time divided by the number of touched elements (n x n matrix).
/// Squared in f64 so huge dimensions cannot overflow.
fn per_element(size: u64, time: f64) -> f64 {
    time / (size as f64 * size as f64)
}

fn main() -> Result<(), ChartError> {
    let args = Args::parse();
    let records = load_results(&args.results)?;
    let table = ResultTable::from_records(&records);

    let reports = vec![
        Report::new(
            "Friendly Order",
            series_for_test(
                &table,
                "testAccess",
                &Selection::new().keep(&["Friendly"]).skip(&["ReadD"]),
            ),
        ),
        Report::new(
            "Friendly Order",
            series_for_test(&table, "testAccess", &Selection::new().keep(&["Friendly"])),
        ),
        Report::new(
            "Unfriendly Order",
            series_for_test(&table, "testAccess", &Selection::new().keep(&["Unfriendly"])),
        ),
        Report::new(
            "Both Orders",
            series_for_test(&table, "testAccess", &Selection::new()),
        ),
        Report::new(
            "Both Orders",
            series_for_test(&table, "testAccess", &Selection::new().size_range(0, 33000)),
        ),
        Report::new(
            "Both Orders",
            series_for_test(&table, "testAccess", &Selection::new().size_range(0, 8200)),
        ),
        Report::new(
            "Both Orders",
            series_for_test(&table, "testAccess", &Selection::new().size_range(0, 4100)),
        ),
        Report::new(
            "Both Orders",
            series_for_test(&table, "testAccess", &Selection::new().size_range(0, 1050)),
        ),
        Report::new(
            "Friendly Order 1/n\u{b2} scaled",
            series_for_test(
                &table,
                "testAccess",
                &Selection::new().scale(per_element).keep(&["Friendly"]),
            ),
        ),
        Report::new(
            "Friendly Order 1/n\u{b2} scaled",
            series_for_test(
                &table,
                "testAccess",
                &Selection::new()
                    .scale(per_element)
                    .keep(&["Friendly"])
                    .skip(&["Dependent"]),
            ),
        ),
        Report::new(
            "Both Orders 1/n\u{b2} scaled",
            series_for_test(&table, "testAccess", &Selection::new().scale(per_element)),
        ),
    ];

    let meta = DocumentMeta {
        title: "Performance Comparison of Square Matrix Traversal".to_string(),
        author: env!("CARGO_PKG_NAME").to_string(),
    };
    render_document(Path::new(OUTPUT), &meta, &AXES, &reports)?;
    eprintln!("Wrote {OUTPUT}");
    Ok(())
}
