/// Monte Carlo ROI simulation and statistical analysis module

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{AnalysisError, Result};
use crate::models::{Decision, RoiParams, RoiResult};
use crate::simulation::RevenueModel;
use crate::statistics::{empirical_cdf, fraction_negative, histogram, mean, summarize};

/// Run the ROI simulation with the RNG implied by `params.seed`
pub fn simulate_roi(params: &RoiParams) -> Result<RoiResult> {
    let mut rng = match params.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    simulate_roi_with_rng(params, &mut rng)
}

/// Run the ROI simulation drawing from a caller-supplied random source.
///
/// Parameters are validated before the first draw, so a failed call never
/// advances `rng`.
pub fn simulate_roi_with_rng<R: Rng + ?Sized>(params: &RoiParams, rng: &mut R) -> Result<RoiResult> {
    if params.simulation_count == 0 {
        return Err(AnalysisError::invalid("simulation_count", "must be > 0"));
    }
    if params.histogram_bins == 0 {
        return Err(AnalysisError::invalid("histogram_bins", "must be > 0"));
    }
    let model = RevenueModel::new(params)?;

    let simulated_roi: Vec<f64> = (0..params.simulation_count)
        .map(|_| model.sample_roi(&mut *rng))
        .collect();

    let mean_roi = mean(&simulated_roi);
    // Plain threshold on the sample mean, no confidence bound
    let decision = if mean_roi > 0.0 {
        Decision::Invest
    } else {
        Decision::Reevaluate
    };

    let result = RoiResult {
        expected_roi_percent: model.expected_roi(),
        histogram: histogram(&simulated_roi, params.histogram_bins),
        cdf: empirical_cdf(&simulated_roi),
        probability_negative: fraction_negative(&simulated_roi),
        decision,
        summary: summarize(&simulated_roi),
        simulated_roi,
    };

    debug!(
        "ROI: {} draws, mean {:.2}%, P(ROI < 0) = {:.4}",
        params.simulation_count, mean_roi, result.probability_negative
    );
    info!(
        "ROI decision {:?} (expected {:.2}%, simulated mean {:.2}%)",
        result.decision, result.expected_roi_percent, mean_roi
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> RoiParams {
        RoiParams {
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_expected_roi_is_closed_form() {
        let result = simulate_roi(&seeded(1)).unwrap();
        assert_eq!(result.expected_roi_percent, 140.0);
    }

    #[test]
    fn test_result_shapes() {
        let result = simulate_roi(&seeded(2)).unwrap();
        assert_eq!(result.simulated_roi.len(), 1000);
        assert_eq!(result.cdf.len(), 1000);
        assert_eq!(result.histogram.len(), 40);
        assert_eq!(result.histogram.iter().map(|b| b.frequency).sum::<usize>(), 1000);
        assert_eq!(result.cdf.last().unwrap().cumulative_probability, 1.0);
        for pair in result.cdf.windows(2) {
            assert!(pair[1].roi_value >= pair[0].roi_value);
            assert!(pair[1].cumulative_probability > pair[0].cumulative_probability);
        }
    }

    #[test]
    fn test_reference_scenario_invests() {
        let result = simulate_roi(&seeded(3)).unwrap();
        assert_eq!(result.decision, Decision::Invest);
        // Revenue sd is 16 000, i.e. 32 ROI points; mean sits near 140
        assert!((result.summary.mean - 140.0).abs() < 5.0);
        assert!((result.summary.std_dev - 32.0).abs() < 4.0);
        assert!(result.probability_negative < 0.01);
    }

    #[test]
    fn test_losing_project_reevaluates() {
        let params = RoiParams {
            expected_revenue: 5_000.0,
            seed: Some(4),
            ..Default::default()
        };
        let result = simulate_roi(&params).unwrap();
        assert_eq!(result.decision, Decision::Reevaluate);
        assert!(result.probability_negative > 0.99);
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = simulate_roi(&seeded(42)).unwrap();
        let b = simulate_roi(&seeded(42)).unwrap();
        assert_eq!(a.simulated_roi, b.simulated_roi);
        assert_eq!(a.histogram, b.histogram);
        assert_eq!(a.summary, b.summary);

        let c = simulate_roi(&seeded(43)).unwrap();
        assert_ne!(a.simulated_roi, c.simulated_roi);
    }

    #[test]
    fn test_injected_rng_matches_seed() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let injected = simulate_roi_with_rng(&RoiParams::default(), &mut rng).unwrap();
        let from_seed = simulate_roi(&seeded(9)).unwrap();
        assert_eq!(injected.simulated_roi, from_seed.simulated_roi);
    }

    #[test]
    fn test_zero_investment_fails() {
        let params = RoiParams {
            investment: 0.0,
            ..seeded(5)
        };
        assert!(matches!(
            simulate_roi(&params),
            Err(AnalysisError::InvalidParameter { name: "investment", .. })
        ));
    }

    #[test]
    fn test_zero_counts_fail() {
        let no_runs = RoiParams {
            simulation_count: 0,
            ..seeded(6)
        };
        assert!(simulate_roi(&no_runs).is_err());

        let no_bins = RoiParams {
            histogram_bins: 0,
            ..seeded(6)
        };
        assert!(simulate_roi(&no_bins).is_err());
    }

    #[test]
    fn test_configurable_bins() {
        let params = RoiParams {
            histogram_bins: 12,
            ..seeded(8)
        };
        let result = simulate_roi(&params).unwrap();
        assert_eq!(result.histogram.len(), 12);
    }
}
