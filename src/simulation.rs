/// Single-draw ROI simulation
/// Samples one year of revenue and converts it into a return on the investment

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{require_finite, require_non_negative, require_positive, AnalysisError, Result};
use crate::models::RoiParams;

/// Closed-form ROI percentage for a given revenue
pub fn roi_percent(revenue: f64, operating_cost: f64, investment: f64) -> f64 {
    (revenue - operating_cost) / investment * 100.0
}

/// Revenue distribution and cost structure of one investment scenario
#[derive(Debug, Clone)]
pub struct RevenueModel {
    expected_revenue: f64,
    revenue: Normal<f64>,
    operating_cost: f64,
    investment: f64,
}

impl RevenueModel {
    pub fn new(params: &RoiParams) -> Result<Self> {
        let expected_revenue = require_finite("expected_revenue", params.expected_revenue)?;
        let operating_cost = require_finite("operating_cost", params.operating_cost)?;
        let investment = require_positive("investment", params.investment)?;
        let volatility = require_non_negative("revenue_volatility_fraction", params.revenue_volatility_fraction)?;

        let std_dev = volatility * expected_revenue;
        if std_dev < 0.0 {
            return Err(AnalysisError::invalid(
                "expected_revenue",
                format!("revenue spread {} is negative; revenue must be >= 0 when volatile", std_dev),
            ));
        }

        let revenue = Normal::new(expected_revenue, std_dev)
            .map_err(|e| AnalysisError::invalid("revenue_volatility_fraction", e.to_string()))?;

        Ok(Self {
            expected_revenue,
            revenue,
            operating_cost,
            investment,
        })
    }

    pub fn expected_roi(&self) -> f64 {
        roi_percent(self.expected_revenue, self.operating_cost, self.investment)
    }

    /// Draw one revenue outcome and return its ROI percentage
    pub fn sample_roi<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let revenue = self.revenue.sample(rng);
        roi_percent(revenue, self.operating_cost, self.investment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_roi_percent() {
        assert_eq!(roi_percent(80_000.0, 10_000.0, 50_000.0), 140.0);
        assert_eq!(roi_percent(10_000.0, 10_000.0, 50_000.0), 0.0);
        assert!(roi_percent(5_000.0, 10_000.0, 50_000.0) < 0.0);
    }

    #[test]
    fn test_zero_volatility_is_deterministic() {
        let params = RoiParams {
            revenue_volatility_fraction: 0.0,
            ..Default::default()
        };
        let model = RevenueModel::new(&params).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(model.sample_roi(&mut rng), 140.0);
        }
    }

    #[test]
    fn test_rejects_zero_investment() {
        let params = RoiParams {
            investment: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            RevenueModel::new(&params),
            Err(AnalysisError::InvalidParameter { name: "investment", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_spread() {
        let params = RoiParams {
            expected_revenue: -1_000.0,
            ..Default::default()
        };
        assert!(RevenueModel::new(&params).is_err());

        let flat_negative = RoiParams {
            expected_revenue: -1_000.0,
            revenue_volatility_fraction: 0.0,
            ..Default::default()
        };
        assert!(RevenueModel::new(&flat_negative).is_ok());
    }
}
