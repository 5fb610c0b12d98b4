/// Sample statistics for simulated outcomes: histogram, empirical CDF and
/// percentile summary

use crate::demand::linspace;
use crate::models::{CdfPoint, HistogramBin, RoiSummary};

/// Equal-width histogram over the realized `[min, max]` of `samples`.
///
/// Bins are half-open except the last, which also holds `max`. A constant
/// sample is spread over `[value - 0.5, value + 0.5]`.
pub fn histogram(samples: &[f64], num_bins: usize) -> Vec<HistogramBin> {
    if samples.is_empty() || num_bins == 0 {
        return Vec::new();
    }

    let mut min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        min -= 0.5;
        max += 0.5;
    }

    let edges = linspace(min, max, num_bins + 1);
    let scale = num_bins as f64 / (max - min);
    let mut counts = vec![0usize; num_bins];

    for &x in samples {
        let mut idx = (((x - min) * scale) as usize).min(num_bins - 1);
        // Snap to the edge array so rounding in `scale` never misplaces a sample
        if idx > 0 && x < edges[idx] {
            idx -= 1;
        } else if idx < num_bins - 1 && x >= edges[idx + 1] {
            idx += 1;
        }
        counts[idx] += 1;
    }

    edges
        .iter()
        .zip(counts)
        .map(|(&bin_start, frequency)| HistogramBin { bin_start, frequency })
        .collect()
}

/// Empirical CDF: ascending samples paired with `(rank + 1) / n`
pub fn empirical_cdf(samples: &[f64]) -> Vec<CdfPoint> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len() as f64;
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, roi_value)| CdfPoint {
            roi_value,
            cumulative_probability: (i + 1) as f64 / n,
        })
        .collect()
}

/// Fraction of samples strictly below zero
pub fn fraction_negative(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().filter(|&&x| x < 0.0).count() as f64 / samples.len() as f64
}

pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Mean, spread and percentiles of a sample
pub fn summarize(samples: &[f64]) -> RoiSummary {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mean = mean(&sorted);
    let variance = if sorted.is_empty() {
        0.0
    } else {
        sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / sorted.len() as f64
    };

    // Nearest-rank percentile on the sorted sample
    let percentile = |p: f64| {
        if sorted.is_empty() {
            return 0.0;
        }
        let index = ((p / 100.0) * (sorted.len() as f64 - 1.0)).round() as usize;
        sorted[index.min(sorted.len() - 1)]
    };

    RoiSummary {
        mean,
        std_dev: variance.sqrt(),
        min: sorted.first().copied().unwrap_or(0.0),
        max: sorted.last().copied().unwrap_or(0.0),
        percentile_10: percentile(10.0),
        percentile_25: percentile(25.0),
        percentile_50: percentile(50.0),
        percentile_75: percentile(75.0),
        percentile_90: percentile(90.0),
    }
}
