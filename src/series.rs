use serde::Serialize;

use crate::sample::SampleWindow;

/// One chart point: the sample's time-of-day label plus the three series
/// values. The label is the timestamp's embedded local representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub time: String,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

pub fn to_series(window: &SampleWindow) -> Vec<SeriesPoint> {
    window
        .samples()
        .iter()
        .map(|sample| SeriesPoint {
            time: sample.timestamp.format("%H:%M:%S").to_string(),
            temperature: sample.temperature,
            humidity: sample.humidity,
            pressure: sample.pressure,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::TelemetryRecord;

    fn record(created_at: &str, temp: f64) -> TelemetryRecord {
        TelemetryRecord {
            created_at: created_at.to_string(),
            temp,
            hum: 60.0,
            pres: 1013.0,
        }
    }

    #[test]
    fn formats_time_of_day_labels() {
        let records = vec![record("2024-01-01 10:00:05", 26.0)];
        let window = SampleWindow::from_records(&records, 10, None).expect("window");
        let series = to_series(&window);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].time, "10:00:05");
        assert_eq!(series[0].temperature, 26.0);
        assert_eq!(series[0].humidity, 60.0);
        assert_eq!(series[0].pressure, 1013.0);
    }

    #[test]
    fn preserves_window_order() {
        let records = vec![
            record("2024-01-01 10:02:00", 27.0),
            record("2024-01-01 10:00:00", 26.0),
            record("2024-01-01 10:01:00", 28.0),
        ];
        let window = SampleWindow::from_records(&records, 10, None).expect("window");
        let labels: Vec<String> = to_series(&window).into_iter().map(|p| p.time).collect();
        assert_eq!(labels, vec!["10:00:00", "10:01:00", "10:02:00"]);
    }

    #[test]
    fn empty_window_yields_empty_series() {
        let window = SampleWindow::from_records(&[], 10, None).expect("window");
        assert!(to_series(&window).is_empty());
    }
}
