//! jqPlot renderer options for report charts.
//!
//! Renderer and plugin names are emitted as strings; the page script maps
//! them onto `$.jqplot` objects. Tick formatting is described by a `unitKind`
//! entry so the page formats ticks the same way [`format_magnitude`] does.
//!
//! [`format_magnitude`]: crate::format::format_magnitude

use crate::format::{format_magnitude, UnitKind};
use crate::series::{Chart, ChartKind, DataPoint, XValue};
use serde_json::{json, Value};

/// Series colors of line charts
pub const LINE_PALETTE: &[&str] = &[
    "#6e9dc9", "#f4ab3a", "#ac7fa8", "#8dbd0f", "#958c12", "#953579", "#4b5de4", "#d8b83f",
    "#ff5800", "#0085cc",
];

/// Slice colors of pie charts
pub const PIE_PALETTE: &[&str] = &[
    "#6e9dc9", "#f4ab3a", "#ac7fa8", "#8dbd0f", "#958c12", "#953579", "#4b5de4", "#d8b83f",
    "#ff5800", "#0085cc", "#4bb2c5", "#c5b47f", "#EAA228", "#579575", "#839557", "#498991",
    "#C08840", "#9F9274", "#546D61", "#646C4A", "#6F6621", "#6E3F5F", "#4F64B0", "#A89050",
    "#C45923", "#187399", "#945381", "#959E5C", "#C7AF7B", "#478396", "#907294",
];

/// Series colors of bar charts; the secondary line series is green
pub const BAR_PALETTE: &[&str] = &[
    "#6e9dc9", "#8dbd0f", "#f4ab3a", "#ac7fa8", "#958c12", "#953579", "#4b5de4", "#d8b83f",
    "#ff5800", "#0085cc",
];

const TICK_COLOR: &str = "#333";
const AXIS_FONT_FAMILY: &str = "Helvetica";
const AXIS_FONT_SIZE: &str = "8pt";

fn grid() -> Value {
    json!({ "borderWidth": 1, "background": "#ffffff" })
}

fn unit_kind(label: Option<&str>) -> Value {
    json!(UnitKind::from_label(label))
}

/// Renderer options for a chart
pub fn renderer_options(chart: &Chart) -> Value {
    match chart.kind {
        ChartKind::Line => line_options(chart),
        ChartKind::Pie => pie_options(chart),
        ChartKind::Bar => bar_options(chart),
    }
}

fn line_options(chart: &Chart) -> Value {
    let y_label = chart.y_label.as_deref();
    let series: Vec<Value> = chart
        .series
        .iter()
        .map(|s| json!({ "label": s.label }))
        .collect();

    json!({
        "seriesColors": LINE_PALETTE,
        "seriesDefaults": { "markerOptions": { "show": false }, "lineWidth": 1 },
        "grid": grid(),
        "title": chart.title,
        "series": series,
        "axes": {
            "xaxis": {
                "renderer": "DateAxisRenderer",
                "tickOptions": { "angle": -30, "textColor": TICK_COLOR }
            },
            "yaxis": {
                "label": y_label,
                "renderer": "LogAxisRenderer",
                "labelRenderer": "CanvasAxisLabelRenderer",
                "tickRenderer": "CanvasAxisTickRenderer",
                "tickOptions": { "textColor": TICK_COLOR, "unitKind": unit_kind(y_label) }
            }
        },
        "legend": { "show": true, "placement": "outside", "location": "e" },
        "cursor": {
            "show": true,
            "zoom": true,
            "showTooltip": false,
            "looseZoom": true,
            "followMouse": true
        },
        "highlighter": { "show": true }
    })
}

fn pie_options(chart: &Chart) -> Value {
    json!({
        "seriesColors": PIE_PALETTE,
        "grid": grid(),
        "title": chart.title,
        "seriesDefaults": {
            "renderer": "PieRenderer",
            "rendererOptions": { "showDataLabels": true }
        },
        "legend": { "show": true, "location": "e" },
        "highlighter": { "show": true, "tooltipLocation": "sw", "useAxesFormatters": false }
    })
}

fn bar_options(chart: &Chart) -> Value {
    let y_label = chart.y_label.as_deref();
    let y2_label = chart.y2_label.as_deref();

    let mut series = vec![json!({ "renderer": "BarRenderer", "label": y_label })];
    let mut axes = json!({
        "xaxis": {
            "renderer": "CategoryAxisRenderer",
            "drawMajorGridlines": false,
            "drawMajorTickMarks": false,
            "tickRenderer": "CanvasAxisTickRenderer",
            "tickOptions": {
                "angle": -30,
                "textColor": TICK_COLOR,
                "formatString": "%H:%M",
                "fontFamily": AXIS_FONT_FAMILY,
                "fontSize": AXIS_FONT_SIZE
            }
        },
        "yaxis": {
            "autoscale": true,
            "label": y_label,
            "labelRenderer": "CanvasAxisLabelRenderer",
            "tickRenderer": "CanvasAxisTickRenderer",
            "tickOptions": {
                "textColor": TICK_COLOR,
                "unitKind": unit_kind(y_label),
                "fontFamily": AXIS_FONT_FAMILY,
                "fontSize": AXIS_FONT_SIZE
            }
        }
    });

    if let Some(y2) = y2_label {
        series.push(json!({
            "yaxis": "y2axis",
            "label": y2,
            "markerOptions": { "show": false },
            "lineWidth": 1
        }));
        axes["y2axis"] = json!({
            "autoscale": true,
            "label": y2,
            "labelRenderer": "CanvasAxisLabelRenderer",
            "tickRenderer": "CanvasAxisTickRenderer",
            "tickOptions": {
                "textColor": BAR_PALETTE[1],
                "unitKind": unit_kind(Some(y2)),
                "fontFamily": AXIS_FONT_FAMILY,
                "fontSize": AXIS_FONT_SIZE
            },
            "rendererOptions": { "alignTicks": true }
        });
    }

    json!({
        "grid": grid(),
        "title": chart.title,
        "seriesDefaults": { "rendererOptions": { "barPadding": 4, "barMargin": 5 } },
        "seriesColors": BAR_PALETTE,
        "series": series,
        "axes": axes,
        "highlighter": { "show": true, "tooltipLocation": "ne", "useAxesFormatters": false }
    })
}

/// Series data in the nested-array layout the renderer expects
///
/// Line and bar charts get one `[x, y]` array per series; pie charts get the
/// first series only, as `[[label, value], ...]`.
pub fn series_data(chart: &Chart) -> Value {
    let pairs = |points: &[DataPoint]| -> Vec<Value> {
        points
            .iter()
            .map(|p| match &p.x {
                XValue::Epoch(millis) => json!([millis, p.y]),
                XValue::Category(name) => json!([name, p.y]),
            })
            .collect()
    };

    match chart.kind {
        ChartKind::Pie => json!([chart.series.first().map(|s| pairs(&s.points)).unwrap_or_default()]),
        ChartKind::Line | ChartKind::Bar => {
            Value::Array(chart.series.iter().map(|s| json!(pairs(&s.points))).collect())
        }
    }
}

/// Tick labels for an axis, formatted by the axis label's unit kind
pub fn tick_labels(axis_label: Option<&str>, ticks: &[f64]) -> Vec<String> {
    let unit = UnitKind::from_label(axis_label);
    ticks
        .iter()
        .map(|&tick| format_magnitude(tick, 0, unit))
        .collect()
}
