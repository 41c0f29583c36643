use serde::Serialize;

use crate::config::Config;
use crate::error::{FetchError, IndexError};
use crate::fetch::Fetcher;
use crate::indices::{compute_indices, Coefficients, DerivedIndices};
use crate::sample::{Sample, SampleWindow};

/// One refresh's hand-off to the presentation layer: the window for the
/// chart, the latest sample for the metric cards, the derived indices for
/// the formula panels. A failed index derivation (degenerate coefficients)
/// leaves `indices` empty while the raw telemetry still renders.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub window: SampleWindow,
    pub latest: Sample,
    pub indices: Option<DerivedIndices>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Refresh {
    NoData,
    Ready(Snapshot),
}

impl Snapshot {
    pub fn from_window(
        window: SampleWindow,
        coefficients: &Coefficients,
    ) -> Result<Self, IndexError> {
        let latest = *window.latest().ok_or(IndexError::EmptyWindow)?;
        let indices = match compute_indices(&latest, coefficients) {
            Ok(indices) => Some(indices),
            Err(err) => {
                tracing::warn!(error = %err, "index derivation failed; rendering telemetry only");
                None
            }
        };
        Ok(Self {
            window,
            latest,
            indices,
        })
    }
}

/// One full pipeline pass: fetch, window, derive. Idempotent given the same
/// upstream data; holds no state across invocations.
pub fn run_refresh(config: &Config) -> Result<Refresh, FetchError> {
    let fetcher = Fetcher::new(config)?;
    let window = fetcher.fetch()?;
    match Snapshot::from_window(window, &config.coefficients) {
        Ok(snapshot) => Ok(Refresh::Ready(snapshot)),
        Err(_) => Ok(Refresh::NoData),
    }
}
