//! End-to-end pipeline: results file on disk -> grouped table -> selected
//! series -> rendered multi-page document.

use bench_chart::group::ResultTable;
use bench_chart::render::{render_document, AxisLabels, DocumentMeta, Report};
use bench_chart::schema::load_results;
use bench_chart::select::{series_for_test, Selection};

const AXES: AxisLabels = AxisLabels {
    x: "Matrix Dimension",
    y: "CPU Time (ns)",
};

fn write_results(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let raw = serde_json::json!({
        "context": {"host_name": "ci", "num_cpus": 4},
        "benchmarks": [
            {"name": "testAccess<FriendlyReader<int>>/128",   "cpu_time": 100.0, "time_unit": "ns"},
            {"name": "testAccess<FriendlyReader<int>>/256",   "cpu_time": 410.0, "time_unit": "ns"},
            {"name": "testAccess<FriendlyReader<int>>/512",   "cpu_time": 1650.0, "time_unit": "ns"},
            {"name": "testAccess<UnfriendlyReader<int>>/128", "cpu_time": 900.0, "time_unit": "ns"},
            {"name": "testAccess<UnfriendlyReader<int>>/256", "cpu_time": 4100.0, "time_unit": "ns"},
            {"name": "testAccess<UnfriendlyReader<int>>/512", "cpu_time": 18000.0, "time_unit": "ns"},
            {"name": "malformed-no-template/128",             "cpu_time": 1.0},
            {"name": "testAccess<FriendlyReader<int>>/oops",  "cpu_time": 2.0}
        ]
    });
    let path = dir.path().join("results.json");
    std::fs::write(&path, serde_json::to_string_pretty(&raw).unwrap()).unwrap();
    path
}

#[test]
fn results_file_to_document() {
    let dir = tempfile::tempdir().unwrap();
    let results = write_results(&dir);

    let records = load_results(&results).unwrap();
    assert_eq!(records.len(), 8);

    // Malformed records drop out during grouping; the rest survive.
    let table = ResultTable::from_records(&records);
    let structures: Vec<_> = table.structures("testAccess").collect();
    assert_eq!(structures.len(), 2);

    let reports = vec![
        Report::new(
            "Friendly Order",
            series_for_test(&table, "testAccess", &Selection::new().keep(&["Friendly"])),
        ),
        Report::new(
            "Both Orders",
            series_for_test(&table, "testAccess", &Selection::new()),
        ),
        Report::new(
            "Both Orders",
            series_for_test(&table, "testAccess", &Selection::new().size_range(0, 300)),
        ),
    ];
    assert_eq!(reports[0].series.len(), 1);
    assert_eq!(reports[1].series.len(), 2);
    assert_eq!(reports[2].series[0].points.len(), 2);

    let out = dir.path().join("matrixPerformance.html");
    let meta = DocumentMeta {
        title: "Performance Comparison of Square Matrix Traversal".to_string(),
        author: "bench-chart".to_string(),
    };
    render_document(&out, &meta, &AXES, &reports).unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches("<figure class=\"page\">").count(), 3);
    assert!(html.contains("<title>Performance Comparison of Square Matrix Traversal</title>"));
    // Template brackets never appear raw inside the figures.
    assert!(html.contains("FriendlyReader\u{27e8}int\u{27e9}"));
    assert!(html.contains("Matrix Dimension"));
    assert!(html.contains("CPU Time (ns)"));
}

#[test]
fn selection_on_empty_table_renders_empty_pages() {
    let table = ResultTable::from_records(&[]);
    let series = series_for_test(&table, "testAccess", &Selection::new());
    assert!(series.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.html");
    let meta = DocumentMeta {
        title: "Nothing".to_string(),
        author: "bench-chart".to_string(),
    };
    render_document(&out, &meta, &AXES, &[Report::new("Empty", series)]).unwrap();
    let html = std::fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches("<figure class=\"page\">").count(), 1);
}
