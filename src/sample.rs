use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Fixed upstream timestamp format. Values are the station's embedded local
/// representation and are never timezone-converted.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One raw record as the device API serves it. Extra fields in the payload
/// are ignored; a missing or mistyped required field fails the decode.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryRecord {
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub temp: f64,
    pub hum: f64,
    pub pres: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

impl Sample {
    pub fn from_record(record: &TelemetryRecord) -> Result<Self, FetchError> {
        let timestamp = NaiveDateTime::parse_from_str(&record.created_at, TIMESTAMP_FORMAT)
            .map_err(|source| FetchError::Format {
                raw: record.created_at.clone(),
                source,
            })?;
        Ok(Self {
            timestamp,
            temperature: record.temp,
            humidity: record.hum,
            pressure: record.pres,
        })
    }
}

/// The bounded recent-history slice used for display: at most `window_size`
/// of the most recent samples, ordered ascending (oldest first). An empty
/// window is a valid value, distinct from a fetch failure.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SampleWindow {
    samples: Vec<Sample>,
}

impl SampleWindow {
    /// Sort newest-first, optionally drop samples at or below the
    /// temperature threshold, keep the most recent `window_size`, then
    /// reverse into chronological order.
    pub fn from_records(
        records: &[TelemetryRecord],
        window_size: usize,
        filter_threshold_c: Option<f64>,
    ) -> Result<Self, FetchError> {
        let mut samples = records
            .iter()
            .map(Sample::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        samples.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        if let Some(threshold) = filter_threshold_c {
            samples.retain(|sample| sample.temperature > threshold);
        }
        samples.truncate(window_size);
        samples.reverse();
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
