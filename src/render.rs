//! Chart rendering: one SVG line chart per report, all pages collected into a
//! single HTML document with document-level metadata.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use plotters::prelude::*;

use crate::error::ChartError;
use crate::select::Series;

/// One titled figure: a page of the output document.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub series: Vec<Series>,
}

impl Report {
    pub fn new(title: &str, series: Vec<Series>) -> Self {
        Self {
            title: title.to_string(),
            series,
        }
    }
}

/// Axis captions for a report family.
#[derive(Debug, Clone, Copy)]
pub struct AxisLabels {
    pub x: &'static str,
    pub y: &'static str,
}

/// Document-level metadata, written once after all pages are rendered.
#[derive(Debug, Clone)]
pub struct DocumentMeta {
    pub title: String,
    pub author: String,
}

/// Pixel size of one figure.
const PAGE_SIZE: (u32, u32) = (900, 540);

/// Marker shapes cycled across the series of a figure.
#[derive(Debug, Clone, Copy)]
enum Marker {
    Circle,
    Triangle,
    Cross,
    Square,
}

const MARKERS: [Marker; 4] = [Marker::Circle, Marker::Triangle, Marker::Cross, Marker::Square];

fn render_err<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}

/// Strip the common namespace prefix and swap template angle brackets for
/// typeset-safe equivalents.
pub fn clean_label(name: &str) -> String {
    let name = name.strip_prefix("std::").unwrap_or(name);
    name.replace('<', "\u{27e8}").replace('>', "\u{27e9}")
}

/// Draw one report into `svg`.
///
/// The x-axis values come from the first series; every series of a report is
/// assumed to share the same size progression. Diverging series are
/// undefined behavior here and get zip-truncated against the first series.
fn plot_report(svg: &mut String, report: &Report, axes: &AxisLabels) -> Result<(), ChartError> {
    let xs: Vec<u64> = report
        .series
        .first()
        .map(|s| s.points.iter().map(|&(size, _)| size).collect())
        .unwrap_or_default();

    let lines: Vec<Vec<(u64, f64)>> = report
        .series
        .iter()
        .map(|s| {
            xs.iter()
                .copied()
                .zip(s.points.iter().map(|&(_, time)| time))
                .collect()
        })
        .collect();

    let x_max = xs.iter().copied().max().unwrap_or(1).max(1);
    let y_max = lines
        .iter()
        .flatten()
        .map(|&(_, time)| time)
        .fold(f64::NAN, f64::max);
    let y_max = if y_max.is_finite() && y_max > 0.0 {
        y_max * 1.05
    } else {
        1.0
    };

    let root = SVGBackend::with_string(svg, PAGE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(clean_label(&report.title), ("serif", 28))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(0u64..x_max, 0f64..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(axes.x)
        .y_desc(axes.y)
        .draw()
        .map_err(render_err)?;

    for (idx, (series, points)) in report.series.iter().zip(lines.iter()).enumerate() {
        let color = Palette99::pick(idx).mix(1.0);
        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(render_err)?
            .label(clean_label(&series.label))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        match MARKERS[idx % MARKERS.len()] {
            Marker::Circle => {
                chart
                    .draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))
                    .map_err(render_err)?;
            }
            Marker::Triangle => {
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&p| TriangleMarker::new(p, 5, color.filled())),
                    )
                    .map_err(render_err)?;
            }
            Marker::Cross => {
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&p| Cross::new(p, 4, color.stroke_width(2))),
                    )
                    .map_err(render_err)?;
            }
            Marker::Square => {
                chart
                    .draw_series(points.iter().map(|&p| {
                        EmptyElement::at(p) + Rectangle::new([(-3, -3), (3, 3)], color.filled())
                    }))
                    .map_err(render_err)?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

// Avoid a chrono dependency; this is good enough for document metadata.
// Format: unix:<seconds>
fn now_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("unix:{secs}")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn assemble_document(meta: &DocumentMeta, timestamp: &str, pages: &[String]) -> String {
    let mut out = String::new();
    let title = escape_html(&meta.title);
    let author = escape_html(&meta.author);

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{title}</title>");
    let _ = writeln!(out, "<meta name=\"author\" content=\"{author}\">");
    let _ = writeln!(out, "<meta name=\"created\" content=\"{timestamp}\">");
    let _ = writeln!(out, "<meta name=\"modified\" content=\"{timestamp}\">");
    let _ = writeln!(
        out,
        "<style>body{{margin:0}}figure.page{{margin:1em auto;text-align:center;page-break-after:always}}</style>"
    );
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    for page in pages {
        let _ = writeln!(out, "<figure class=\"page\">");
        let _ = writeln!(out, "{page}");
        let _ = writeln!(out, "</figure>");
    }
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

/// Render every report, in definition order, into one document at `path`.
///
/// All pages are drawn before anything is written, so a rendering failure
/// leaves no partial document behind.
pub fn render_document(
    path: &Path,
    meta: &DocumentMeta,
    axes: &AxisLabels,
    reports: &[Report],
) -> Result<(), ChartError> {
    let mut pages = Vec::with_capacity(reports.len());
    for report in reports {
        let mut svg = String::new();
        plot_report(&mut svg, report, axes)?;
        pages.push(svg);
    }

    let html = assemble_document(meta, &now_timestamp(), &pages);
    fs::write(path, html)?;
    Ok(())
}
