/// Sales demand module
/// Gaussian density of sales volume over a +/- 4 sigma window

use log::debug;
use statrs::distribution::{Continuous, Normal};

use crate::error::{require_finite, require_positive, AnalysisError, Result};
use crate::models::{DensityPoint, NormalParams, NormalResult};

/// Half-width of the evaluated window, in standard deviations
pub const WINDOW_SIGMAS: f64 = 4.0;

/// `count` evenly spaced values over `[start, end]`, both ends included
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Evaluate the sales density across the window around the mean
pub fn sales_density(params: &NormalParams) -> Result<NormalResult> {
    let mean = require_finite("mean", params.mean)?;
    let std_dev = require_positive("std_dev", params.std_dev)?;
    if params.point_count < 2 {
        return Err(AnalysisError::invalid(
            "point_count",
            format!("must be >= 2, got {}", params.point_count),
        ));
    }

    let normal = Normal::new(mean, std_dev).map_err(|e| AnalysisError::invalid("std_dev", e.to_string()))?;

    let lower = mean - WINDOW_SIGMAS * std_dev;
    let upper = mean + WINDOW_SIGMAS * std_dev;
    let density: Vec<DensityPoint> = linspace(lower, upper, params.point_count)
        .into_iter()
        .map(|value| DensityPoint {
            value,
            density: normal.pdf(value),
        })
        .collect();

    debug!("Sales density: N({}, {}) on [{:.2}, {:.2}] with {} points", mean, std_dev, lower, upper, density.len());

    Ok(NormalResult { density })
}
