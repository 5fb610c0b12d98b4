/// Safe-sales search over the overbooking risk curve
/// Sweeps candidate ticket sales and keeps the largest one under the risk cap

use statrs::distribution::DiscreteCDF;

use crate::error::Result;
use crate::models::RiskPoint;
use crate::overbooking::attendance_distribution;

/// Overbooking risk for every sold count in `capacity..=2 * tickets_sold`.
///
/// Each point uses its own Binomial(sold_count, p); the scan is bounded and
/// empty when `2 * tickets_sold < capacity`.
pub fn risk_curve(capacity: u32, tickets_sold: u32, show_up_probability: f64) -> Result<Vec<RiskPoint>> {
    let upper = tickets_sold.saturating_mul(2);

    (capacity..=upper)
        .map(|sold_count| {
            let attendance = attendance_distribution(sold_count, show_up_probability)?;
            Ok(RiskPoint {
                sold_count,
                risk: attendance.sf(capacity as u64),
            })
        })
        .collect()
}

/// Largest sold count in the curve whose risk is at or below `risk_cap`
pub fn find_max_safe_sold_count(curve: &[RiskPoint], risk_cap: f64) -> Option<u32> {
    curve
        .iter()
        .filter(|point| point.risk <= risk_cap)
        .map(|point| point.sold_count)
        .max()
}
