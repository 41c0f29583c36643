use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::indices::Coefficients;

pub const DEFAULT_WINDOW_SIZE: usize = 10;
pub const DEFAULT_FILTER_THRESHOLD_C: f64 = 25.0;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_RETRY_MAX_ATTEMPTS: usize = 3;
const DEFAULT_RETRY_DELAY_MS: u64 = 250;

#[derive(Debug, Clone)]
pub struct Config {
    pub source_url: String,
    pub window_size: usize,
    /// Samples at or below this temperature are dropped before windowing.
    /// `None` windows over all records.
    pub filter_threshold_c: Option<f64>,
    pub http_timeout_secs: u64,
    pub retry_max_attempts: usize,
    pub retry_delay_ms: u64,
    pub coefficients: Coefficients,
}

impl Config {
    pub fn from_env(source_url_override: Option<String>) -> Result<Self> {
        dotenv().ok();

        let source_url = source_url_override
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .or_else(|| {
                env::var("CROPWATCH_SOURCE_URL")
                    .ok()
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            })
            .context("CROPWATCH_SOURCE_URL is required (or pass --source-url)")?;

        let window_size = env::var("CROPWATCH_WINDOW_SIZE")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|v| *v != 0)
            .unwrap_or(DEFAULT_WINDOW_SIZE);
        let filter_threshold_c =
            parse_filter_threshold(env::var("CROPWATCH_FILTER_THRESHOLD_C").ok().as_deref());
        let http_timeout_secs = env::var("CROPWATCH_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v != 0)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
        let retry_max_attempts = env::var("CROPWATCH_RETRY_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|v| *v != 0)
            .unwrap_or(DEFAULT_RETRY_MAX_ATTEMPTS);
        let retry_delay_ms = env::var("CROPWATCH_RETRY_DELAY_MS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_DELAY_MS);

        let defaults = Coefficients::default();
        let coefficients = Coefficients {
            intercept_dev: env_f64("CROPWATCH_INTERCEPT_DEV").unwrap_or(defaults.intercept_dev),
            slope_dev: env_f64("CROPWATCH_SLOPE_DEV").unwrap_or(defaults.slope_dev),
            alpha: env_f64("CROPWATCH_ALPHA").unwrap_or(defaults.alpha),
            beta: env_f64("CROPWATCH_BETA").unwrap_or(defaults.beta),
            gamma: env_f64("CROPWATCH_GAMMA").unwrap_or(defaults.gamma),
            delta: env_f64("CROPWATCH_DELTA").unwrap_or(defaults.delta),
        };

        Ok(Self {
            source_url,
            window_size,
            filter_threshold_c,
            http_timeout_secs,
            retry_max_attempts,
            retry_delay_ms,
            coefficients,
        })
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

fn env_f64(key: &str) -> Option<f64> {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
}

/// "off"/"none" disables the temperature filter; anything unparseable falls
/// back to the default threshold.
pub fn parse_filter_threshold(raw: Option<&str>) -> Option<f64> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Some(DEFAULT_FILTER_THRESHOLD_C);
    };
    if value.eq_ignore_ascii_case("off") || value.eq_ignore_ascii_case("none") {
        return None;
    }
    match value.parse::<f64>() {
        Ok(threshold) => Some(threshold),
        Err(_) => {
            tracing::warn!(value, "unparseable filter threshold; using default");
            Some(DEFAULT_FILTER_THRESHOLD_C)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_threshold_uses_default() {
        assert_eq!(parse_filter_threshold(None), Some(DEFAULT_FILTER_THRESHOLD_C));
        assert_eq!(
            parse_filter_threshold(Some("  ")),
            Some(DEFAULT_FILTER_THRESHOLD_C)
        );
    }

    #[test]
    fn off_disables_the_filter() {
        assert_eq!(parse_filter_threshold(Some("off")), None);
        assert_eq!(parse_filter_threshold(Some("NONE")), None);
    }

    #[test]
    fn numeric_threshold_is_parsed() {
        assert_eq!(parse_filter_threshold(Some("18.5")), Some(18.5));
        assert_eq!(parse_filter_threshold(Some(" 30 ")), Some(30.0));
    }

    #[test]
    fn garbage_threshold_falls_back_to_default() {
        assert_eq!(
            parse_filter_threshold(Some("warm")),
            Some(DEFAULT_FILTER_THRESHOLD_C)
        );
    }
}
