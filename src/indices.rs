use serde::Serialize;

use crate::error::IndexError;
use crate::sample::Sample;

/// IPPO values above this signal elevated infestation probability.
pub const INFESTATION_THRESHOLD: f64 = 1.5;

/// Fixed model coefficients. These are station configuration, not fitted
/// from data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub intercept_dev: f64,
    pub slope_dev: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            intercept_dev: 1.2,
            slope_dev: 0.5,
            alpha: 0.01,
            beta: 0.005,
            gamma: 0.02,
            delta: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedIndices {
    /// Y: daily larval development rate, `intercept_dev + slope_dev * T`.
    pub development_rate: f64,
    /// K: reciprocal of the regression slope.
    pub thermal_constant: f64,
    /// tMin: x-intercept of the development-rate line.
    pub min_threshold: f64,
    /// IPPO/PLI: `alpha*T + beta*H + gamma/P + delta`.
    pub infestation_index: f64,
}

/// Derive all indices from the most recent sample. Fails atomically on a
/// zero slope or zero pressure; never produces Infinity/NaN from the guards.
pub fn compute_indices(
    latest: &Sample,
    coefficients: &Coefficients,
) -> Result<DerivedIndices, IndexError> {
    if coefficients.slope_dev == 0.0 {
        return Err(IndexError::ZeroSlope);
    }
    if latest.pressure == 0.0 {
        return Err(IndexError::ZeroPressure);
    }
    Ok(DerivedIndices {
        development_rate: coefficients.intercept_dev + coefficients.slope_dev * latest.temperature,
        thermal_constant: 1.0 / coefficients.slope_dev,
        min_threshold: -coefficients.intercept_dev / coefficients.slope_dev,
        infestation_index: coefficients.alpha * latest.temperature
            + coefficients.beta * latest.humidity
            + coefficients.gamma / latest.pressure
            + coefficients.delta,
    })
}

pub fn is_infestation_likely(index: f64) -> bool {
    index > INFESTATION_THRESHOLD
}
