use thiserror::Error;

/// Failures while retrieving and decoding telemetry. Any of these aborts the
/// refresh before index derivation; the caller renders the no-data state.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error contacting telemetry source: {0}")]
    Network(#[source] reqwest::Error),
    #[error("telemetry source returned {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid telemetry payload: {0}")]
    Parse(String),
    #[error("unparseable timestamp {raw:?}: {source}")]
    Format {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    #[error("development slope coefficient is zero")]
    ZeroSlope,
    #[error("pressure reading is zero")]
    ZeroPressure,
    #[error("no samples in window")]
    EmptyWindow,
}
