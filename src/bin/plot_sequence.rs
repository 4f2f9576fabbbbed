use bench_chart::group::ResultTable;
use bench_chart::render::{render_document, AxisLabels, DocumentMeta, Report};
use bench_chart::schema::load_results;
use bench_chart::select::{series_for_structure, series_for_test, Selection};
use bench_chart::ChartError;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Fixed output filename for the sequence-container report family.
const OUTPUT: &str = "performance.html";

const AXES: AxisLabels = AxisLabels {
    x: "# of Operations",
    y: "CPU Time (ns)",
};

#[derive(Parser, Debug)]
#[command(name = "plot-sequence")]
#[command(about = "Sequence-container performance charts from a benchmark results file")]
struct Args {
    /// Benchmark results JSON file.
    #[arg(value_name = "RESULTS")]
    results: PathBuf,
}

fn main() -> Result<(), ChartError> {
    let args = Args::parse();
    let records = load_results(&args.results)?;
    let table = ResultTable::from_records(&records);

    let reports = vec![
        Report::new(
            "Naive Insert",
            series_for_test(
                &table,
                "testNaiveInsert",
                &Selection::new().keep(&["list"]).skip(&["LargeObject"]),
            ),
        ),
        Report::new(
            "Naive Insert",
            series_for_test(
                &table,
                "testNaiveInsert",
                &Selection::new().keep(&["vector"]).skip(&["LargeObject"]),
            ),
        ),
        Report::new(
            "Naive Insert",
            series_for_test(
                &table,
                "testNaiveInsert",
                &Selection::new().keep(&["list", "vector"]).skip(&["LargeObject"]),
            ),
        ),
        Report::new(
            "Binary Search Insert",
            [
                series_for_test(
                    &table,
                    "testNaiveInsert",
                    &Selection::new()
                        .prefix("naive-")
                        .keep(&["list", "vector"])
                        .skip(&["LargeObject"]),
                ),
                series_for_test(
                    &table,
                    "testInsert",
                    &Selection::new()
                        .prefix("binsearch-")
                        .keep(&["list", "vector"])
                        .skip(&["LargeObject"]),
                ),
            ]
            .concat(),
        ),
        Report::new(
            "Vector<int> Insert",
            series_for_structure(&table, "std::vector<int>", &Selection::new().skip(&["Add"])),
        ),
        Report::new(
            "Vector<int> vs Multiset<int>",
            [
                series_for_structure(
                    &table,
                    "std::vector<int>",
                    &Selection::new().skip(&["Add", "Naive"]),
                ),
                series_for_structure(
                    &table,
                    "std::multiset<int>",
                    &Selection::new().prefix("multiset-").keep(&["int"]),
                ),
            ]
            .concat(),
        ),
        Report::new(
            "Add Then Sort",
            [
                series_for_test(
                    &table,
                    "testPushBack",
                    &Selection::new().prefix("push-").keep(&["vector<int>"]),
                ),
                series_for_test(&table, "testAddThenSort", &Selection::new().keep(&["int"])),
                series_for_structure(
                    &table,
                    "std::multiset<int>",
                    &Selection::new().prefix("multiset<int>").keep(&["int"]),
                ),
            ]
            .concat(),
        ),
    ];

    let meta = DocumentMeta {
        title: "Performance Comparison of Data Structures".to_string(),
        author: env!("CARGO_PKG_NAME").to_string(),
    };
    render_document(Path::new(OUTPUT), &meta, &AXES, &reports)?;
    eprintln!("Wrote {OUTPUT}");
    Ok(())
}
