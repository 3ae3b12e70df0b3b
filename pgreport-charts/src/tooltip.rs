//! Tooltip markup for a highlighted data point.

use crate::format::{format_magnitude, format_number, UnitKind};
use crate::series::{Chart, ChartKind, XValue};
use chrono::DateTime;
use pgreport_common::escape_html;

/// Decimals shown for series values in tooltips
const TOOLTIP_PRECISION: u32 = 2;

fn figure(value: &str, label: &str) -> String {
    format!(
        "<span class=\"mfigure\">{} <small>{}</small></span>",
        escape_html(value),
        escape_html(label)
    )
}

fn epoch_text(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(at) => at.format("%a %b %d %Y %H:%M:%S UTC").to_string(),
        None => millis.to_string(),
    }
}

/// Append every series' value at `index`, each on its own line
fn push_series_values(html: &mut String, chart: &Chart, index: usize) {
    for series in &chart.series {
        if let Some(point) = series.points.get(index) {
            let unit = UnitKind::from_label(Some(&series.label));
            html.push_str("<br>");
            html.push_str(&figure(
                &format_magnitude(point.y, TOOLTIP_PRECISION, unit),
                &series.label,
            ));
        }
    }
}

/// Tooltip HTML for the point at `index`, or `None` past the first series' end
pub fn tooltip_html(chart: &Chart, index: usize) -> Option<String> {
    let first = chart.series.first()?;
    let anchor = first.points.get(index)?;

    let html = match chart.kind {
        ChartKind::Line => {
            let mut html = String::from("<div>On ");
            match &anchor.x {
                XValue::Epoch(millis) => html.push_str(&epoch_text(*millis)),
                XValue::Category(name) => html.push_str(&escape_html(name)),
            }
            push_series_values(&mut html, chart, index);
            html.push_str("</div>");
            html
        }
        ChartKind::Bar => {
            let mut html = format!(
                "<div style=\"z-index: 99;\">At {}",
                escape_html(&anchor.x.to_string())
            );
            push_series_values(&mut html, chart, index);
            html.push_str("</div>");
            html
        }
        ChartKind::Pie => format!(
            "<div>{}</div>",
            figure(&format_number(anchor.y), &anchor.x.to_string())
        ),
    };

    Some(html)
}
