use crate::models::{ActivityLog, ChartDataset, ChartSeries, Metric};

const BORDER_COLOR: &str = "#3b82f6";
const BACKGROUND_COLOR: &str = "rgba(59, 130, 246, 0.5)";

/// One point per logged date, in the log's key order. Unset values plot as 0.
pub fn build_series(log: &ActivityLog, metric: Metric) -> ChartSeries {
    let labels = log.keys().cloned().collect();
    let data = log.values().map(|entry| entry.value_or_zero(metric)).collect();

    ChartSeries {
        labels,
        datasets: vec![ChartDataset {
            label: metric.as_str().to_string(),
            data,
            border_color: BORDER_COLOR.to_string(),
            background_color: BACKGROUND_COLOR.to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyEntry;

    fn sample_log() -> ActivityLog {
        let mut log = ActivityLog::new();
        log.insert(
            "2026-01-03".to_string(),
            DailyEntry {
                steps: Some(4000.0),
                running: None,
                sleep: Some(7.0),
            },
        );
        log.insert(
            "2026-01-01".to_string(),
            DailyEntry {
                steps: None,
                running: Some(2.5),
                sleep: None,
            },
        );
        log
    }

    #[test]
    fn series_has_one_point_per_logged_date() {
        let log = sample_log();
        for metric in Metric::ALL {
            let series = build_series(&log, metric);
            assert_eq!(series.labels.len(), log.len());
            assert_eq!(series.datasets.len(), 1);
            assert_eq!(series.datasets[0].data.len(), log.len());
            assert_eq!(series.datasets[0].label, metric.as_str());
        }
    }

    #[test]
    fn series_follows_log_key_order_with_zero_defaults() {
        let series = build_series(&sample_log(), Metric::Steps);
        assert_eq!(series.labels, vec!["2026-01-01", "2026-01-03"]);
        assert_eq!(series.datasets[0].data, vec![0.0, 4000.0]);
    }

    #[test]
    fn empty_log_gives_empty_series() {
        let series = build_series(&ActivityLog::new(), Metric::Sleep);
        assert!(series.labels.is_empty());
        assert!(series.datasets[0].data.is_empty());
    }
}
