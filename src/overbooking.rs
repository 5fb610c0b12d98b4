/// Overbooking analysis module
/// Binomial show-up model for a flight sold beyond its seat capacity

use log::{debug, warn};
use statrs::distribution::{Binomial, Discrete, DiscreteCDF};

use crate::error::{require_non_negative, require_probability, AnalysisError, Result};
use crate::models::{CountProbability, OverbookingParams, OverbookingResult};
use crate::optimizer::{find_max_safe_sold_count, risk_curve};

/// Build the show-up distribution for `sold` tickets
pub(crate) fn attendance_distribution(sold: u32, show_up_probability: f64) -> Result<Binomial> {
    Binomial::new(show_up_probability, sold as u64)
        .map_err(|e| AnalysisError::invalid("show_up_probability", e.to_string()))
}

/// Probability that strictly more than `capacity` passengers show up
/// when `sold` tickets were sold.
pub fn overbooking_risk(capacity: u32, sold: u32, show_up_probability: f64) -> Result<f64> {
    let attendance = attendance_distribution(sold, show_up_probability)?;
    // sf(x) = 1 - cdf(x), evaluated without cancellation near 1.0
    Ok(attendance.sf(capacity as u64))
}

pub fn validate_overbooking_params(params: &OverbookingParams) -> Result<()> {
    require_probability("show_up_probability", params.show_up_probability)?;
    if params.capacity == 0 {
        return Err(AnalysisError::invalid("capacity", "must be > 0"));
    }
    require_non_negative("indemnity_cost", params.indemnity_cost)?;
    require_non_negative("avg_ticket_price", params.avg_ticket_price)?;
    require_probability("risk_cap", params.risk_cap)?;
    Ok(())
}

/// Run the full overbooking analysis: attendance PMF, overbooking
/// probability, risk curve, safe-sales threshold and the cost of
/// selling extra seats.
pub fn analyze_overbooking(params: &OverbookingParams) -> Result<OverbookingResult> {
    validate_overbooking_params(params)?;

    let attendance = attendance_distribution(params.tickets_sold, params.show_up_probability)?;
    let attendance_pmf: Vec<CountProbability> = (0..=params.tickets_sold)
        .map(|count| CountProbability {
            count,
            probability: attendance.pmf(count as u64),
        })
        .collect();

    let overbooking_probability = attendance.sf(params.capacity as u64);

    let curve = risk_curve(params.capacity, params.tickets_sold, params.show_up_probability)?;
    let max_safe_sold_count = find_max_safe_sold_count(&curve, params.risk_cap);
    if max_safe_sold_count.is_none() {
        warn!(
            "No sold count in [{}, {}] keeps overbooking risk <= {:.2}%",
            params.capacity,
            params.tickets_sold.saturating_mul(2),
            params.risk_cap * 100.0
        );
    }

    let expected_profit_extra = params.extra_seats as f64 * params.avg_ticket_price;
    // Signed excess: selling under capacity is still computed, not clamped
    let seat_excess = params.tickets_sold as f64 - params.capacity as f64;
    let expected_indemnity_cost = overbooking_probability * params.indemnity_cost * seat_excess;

    debug!(
        "Overbooking: sold={} capacity={} p={} -> P(over)={:.6}, safe={:?}",
        params.tickets_sold,
        params.capacity,
        params.show_up_probability,
        overbooking_probability,
        max_safe_sold_count
    );

    Ok(OverbookingResult {
        attendance_pmf,
        overbooking_probability,
        risk_curve: curve,
        max_safe_sold_count,
        expected_profit_extra,
        expected_indemnity_cost,
        net_expected_gain: expected_profit_extra - expected_indemnity_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_flight() {
        let result = analyze_overbooking(&OverbookingParams::default()).unwrap();

        assert_eq!(result.attendance_pmf.len(), 131);
        assert!((result.overbooking_probability - 0.0426).abs() < 1e-3);
        assert_eq!(result.expected_profit_extra, 5000.0);
        let expected_cost = result.overbooking_probability * 500.0 * 10.0;
        assert!((result.expected_indemnity_cost - expected_cost).abs() < 1e-9);
        assert_eq!(result.max_safe_sold_count, Some(130));
        assert_eq!(result.risk_curve.first().unwrap().sold_count, 120);
        assert_eq!(result.risk_curve.last().unwrap().sold_count, 260);
    }

    #[test]
    fn test_pmf_sums_to_one() {
        let result = analyze_overbooking(&OverbookingParams::default()).unwrap();
        let total: f64 = result.attendance_pmf.iter().map(|p| p.probability).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_show_up_probabilities() {
        let never = OverbookingParams {
            show_up_probability: 0.0,
            ..Default::default()
        };
        let result = analyze_overbooking(&never).unwrap();
        assert_eq!(result.attendance_pmf[0].probability, 1.0);
        assert_eq!(result.overbooking_probability, 0.0);
        assert_eq!(result.max_safe_sold_count, Some(260));

        let always = OverbookingParams {
            show_up_probability: 1.0,
            ..Default::default()
        };
        let result = analyze_overbooking(&always).unwrap();
        assert_eq!(result.attendance_pmf.last().unwrap().probability, 1.0);
        assert_eq!(result.overbooking_probability, 1.0);
        // Only sold == capacity keeps everyone seated
        assert_eq!(result.max_safe_sold_count, Some(120));
    }

    #[test]
    fn test_sold_equal_to_capacity_cannot_overbook() {
        let params = OverbookingParams {
            tickets_sold: 120,
            ..Default::default()
        };
        let result = analyze_overbooking(&params).unwrap();
        assert_eq!(result.overbooking_probability, 0.0);
        assert_eq!(result.expected_indemnity_cost, 0.0);
    }

    #[test]
    fn test_undersold_flight_still_computes() {
        let params = OverbookingParams {
            tickets_sold: 50,
            ..Default::default()
        };
        let result = analyze_overbooking(&params).unwrap();
        assert_eq!(result.overbooking_probability, 0.0);
        // Scan range [120, 100] is empty
        assert!(result.risk_curve.is_empty());
        assert_eq!(result.max_safe_sold_count, None);
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let bad_p = OverbookingParams {
            show_up_probability: 1.2,
            ..Default::default()
        };
        assert!(matches!(
            analyze_overbooking(&bad_p),
            Err(AnalysisError::InvalidParameter { name: "show_up_probability", .. })
        ));

        let no_seats = OverbookingParams {
            capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            analyze_overbooking(&no_seats),
            Err(AnalysisError::InvalidParameter { name: "capacity", .. })
        ));

        let negative_cost = OverbookingParams {
            indemnity_cost: -1.0,
            ..Default::default()
        };
        assert!(analyze_overbooking(&negative_cost).is_err());
    }

    #[test]
    fn test_overbooking_risk_matches_result() {
        let risk = overbooking_risk(120, 130, 0.88).unwrap();
        let result = analyze_overbooking(&OverbookingParams::default()).unwrap();
        assert_eq!(risk, result.overbooking_probability);
    }
}
