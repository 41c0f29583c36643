use std::thread::sleep;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::warn;

use crate::config::Config;
use crate::error::FetchError;
use crate::sample::{SampleWindow, TelemetryRecord};

/// Single-shot synchronous fetcher for the station's record list. Network
/// failures retry up to the configured attempt count with a linearly
/// growing delay; HTTP status and decode failures never retry.
pub struct Fetcher {
    client: Client,
    source_url: String,
    window_size: usize,
    filter_threshold_c: Option<f64>,
    retry_max_attempts: usize,
    retry_delay: Duration,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.http_timeout())
            .build()
            .map_err(FetchError::Network)?;
        Ok(Self {
            client,
            source_url: config.source_url.clone(),
            window_size: config.window_size,
            filter_threshold_c: config.filter_threshold_c,
            retry_max_attempts: config.retry_max_attempts.max(1),
            retry_delay: config.retry_delay(),
        })
    }

    pub fn fetch(&self) -> Result<SampleWindow, FetchError> {
        let body = self.get_with_retry()?;
        let records = decode_records(&body)?;
        SampleWindow::from_records(&records, self.window_size, self.filter_threshold_c)
    }

    fn get_with_retry(&self) -> Result<String, FetchError> {
        let mut attempt = 1;
        loop {
            match self.get_once() {
                Ok(body) => return Ok(body),
                Err(FetchError::Network(err)) if attempt < self.retry_max_attempts => {
                    warn!(attempt, error = %err, "telemetry fetch failed; retrying");
                    sleep(self.retry_delay.saturating_mul(attempt as u32));
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn get_once(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.source_url)
            .send()
            .map_err(FetchError::Network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        response.text().map_err(FetchError::Network)
    }
}

pub fn decode_records(body: &str) -> Result<Vec<TelemetryRecord>, FetchError> {
    serde_json::from_str(body).map_err(|err| FetchError::Parse(err.to_string()))
}
