//! Chart data model shared by the exporter, renderer options and tooltips.

use pgreport_common::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Chart types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Pie,
    Bar,
}

/// Horizontal coordinate of a data point
///
/// Deserializes from a JSON number (epoch milliseconds) or a string (category).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Epoch(i64),
    Category(String),
}

impl fmt::Display for XValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XValue::Epoch(millis) => write!(f, "{}", millis),
            XValue::Category(name) => write!(f, "{}", name),
        }
    }
}

/// Data point for charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: XValue,
    pub y: f64,
}

impl DataPoint {
    pub fn at_epoch(millis: i64, y: f64) -> Self {
        Self {
            x: XValue::Epoch(millis),
            y,
        }
    }

    pub fn in_category(category: impl Into<String>, y: f64) -> Self {
        Self {
            x: XValue::Category(category.into()),
            y,
        }
    }
}

/// A labelled sequence of points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    #[serde(default)]
    pub points: Vec<DataPoint>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

/// A chart as handed to the renderer and the CSV exporter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub kind: ChartKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default)]
    pub y2_label: Option<String>,
    #[serde(default)]
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            y_label: None,
            y2_label: None,
            series: Vec::new(),
        }
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn with_y2_label(mut self, label: impl Into<String>) -> Self {
        self.y2_label = Some(label.into());
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Line charts plot epoch timestamps; pie and bar charts plot categories
    pub fn is_time_series(&self) -> bool {
        self.kind == ChartKind::Line
    }

    /// Number of points in the first series, which drives exports and tooltips
    pub fn point_count(&self) -> usize {
        self.series.first().map_or(0, |s| s.points.len())
    }

    /// Check that x values match the chart kind
    pub fn validate(&self) -> Result<()> {
        let time_series = self.is_time_series();
        for series in &self.series {
            for point in &series.points {
                let epoch = matches!(point.x, XValue::Epoch(_));
                if epoch != time_series {
                    return Err(ReportError::InvalidInput(format!(
                        "Series '{}' has {} x value {} in a {:?} chart",
                        series.label,
                        if epoch { "an epoch" } else { "a category" },
                        point.x,
                        self.kind
                    )));
                }
            }
        }
        Ok(())
    }

    /// Parse and validate a chart from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let chart: Chart = serde_json::from_str(text)?;
        chart.validate()?;
        debug!(
            kind = ?chart.kind,
            series = chart.series.len(),
            points = chart.point_count(),
            "loaded chart"
        );
        Ok(chart)
    }

    /// Load a chart from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_line_chart() {
        let chart = Chart::from_json(
            r#"{
                "kind": "line",
                "title": "Database size",
                "y_label": "Size",
                "series": [
                    {"label": "postgres", "points": [{"x": 1577836800000, "y": 7340032}]}
                ]
            }"#,
        )
        .unwrap();

        assert!(chart.is_time_series());
        assert_eq!(chart.point_count(), 1);
        assert_eq!(chart.series[0].points[0], DataPoint::at_epoch(1577836800000, 7340032.0));
        assert_eq!(chart.y2_label, None);
    }

    #[test]
    fn test_deserialize_category_points() {
        let chart = Chart::from_json(
            r#"{"kind": "bar", "series": [{"label": "commits", "points": [{"x": "00:00", "y": 3}]}]}"#,
        )
        .unwrap();
        assert!(!chart.is_time_series());
        assert_eq!(chart.series[0].points[0].x, XValue::Category("00:00".to_string()));
    }

    #[test]
    fn test_mismatched_x_values_are_rejected() {
        let err = Chart::from_json(
            r#"{"kind": "line", "series": [{"label": "a", "points": [{"x": "noon", "y": 1}]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::InvalidInput(_)));

        let err = Chart::from_json(r#"{"kind": "pie", "series": [{"label": "a", "points": [{"x": 5, "y": 1}]}]}"#)
            .unwrap_err();
        assert!(matches!(err, ReportError::InvalidInput(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Chart::from_json("{\"kind\": \"radar\"}"),
            Err(ReportError::Serialization(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        let chart = Chart::new(ChartKind::Pie, "Connections")
            .with_series(Series::new("state", vec![DataPoint::in_category("idle", 4.0)]));
        std::fs::write(&path, serde_json::to_string(&chart).unwrap()).unwrap();

        assert_eq!(Chart::from_path(&path).unwrap(), chart);
    }

    #[test]
    fn test_empty_chart() {
        let chart = Chart::new(ChartKind::Bar, "empty");
        assert_eq!(chart.point_count(), 0);
        assert!(chart.validate().is_ok());
    }
}
