use crate::series::Chart;
use tracing::debug;

/// Export chart data as CSV text
///
/// Time-series charts produce `"serie","epoch","value"` rows, category charts
/// `"serie","value"` rows. Points are visited index by index across all
/// series; series shorter than the first one are skipped for missing indexes.
/// Values are written as-is.
pub fn export_csv(chart: &Chart) -> String {
    let mut csv_content = String::new();
    let time_series = chart.is_time_series();

    if time_series {
        csv_content.push_str("\"serie\",\"epoch\",\"value\"\n");
    } else {
        csv_content.push_str("\"serie\",\"value\"\n");
    }

    for index in 0..chart.point_count() {
        for series in &chart.series {
            let Some(point) = series.points.get(index) else {
                continue;
            };
            if time_series {
                csv_content.push_str(&format!(
                    "\"{}\",{},{}\n",
                    series.label, point.x, point.y
                ));
            } else {
                csv_content.push_str(&format!("\"{}\",{}\n", point.x, point.y));
            }
        }
    }

    debug!(
        series = chart.series.len(),
        bytes = csv_content.len(),
        "exported chart as CSV"
    );
    csv_content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{ChartKind, DataPoint, Series};

    #[test]
    fn test_time_series_export() {
        let chart = Chart::new(ChartKind::Line, "Size")
            .with_series(Series::new(
                "postgres",
                vec![DataPoint::at_epoch(1000, 1.5), DataPoint::at_epoch(2000, 2.0)],
            ))
            .with_series(Series::new(
                "pgbench",
                vec![DataPoint::at_epoch(1000, 10.0), DataPoint::at_epoch(2000, 12.25)],
            ));

        assert_eq!(
            export_csv(&chart),
            "\"serie\",\"epoch\",\"value\"\n\
             \"postgres\",1000,1.5\n\
             \"pgbench\",1000,10\n\
             \"postgres\",2000,2\n\
             \"pgbench\",2000,12.25\n"
        );
    }

    #[test]
    fn test_category_export() {
        let chart = Chart::new(ChartKind::Pie, "States").with_series(Series::new(
            "state",
            vec![
                DataPoint::in_category("active", 3.0),
                DataPoint::in_category("idle", 14.0),
            ],
        ));

        assert_eq!(
            export_csv(&chart),
            "\"serie\",\"value\"\n\"active\",3\n\"idle\",14\n"
        );
    }

    #[test]
    fn test_short_series_and_empty_chart() {
        let chart = Chart::new(ChartKind::Line, "gaps")
            .with_series(Series::new(
                "full",
                vec![DataPoint::at_epoch(1, 1.0), DataPoint::at_epoch(2, 2.0)],
            ))
            .with_series(Series::new("short", vec![DataPoint::at_epoch(1, 5.0)]));
        assert_eq!(
            export_csv(&chart),
            "\"serie\",\"epoch\",\"value\"\n\"full\",1,1\n\"short\",1,5\n\"full\",2,2\n"
        );

        let empty = Chart::new(ChartKind::Bar, "empty");
        assert_eq!(export_csv(&empty), "\"serie\",\"value\"\n");
    }
}
