use serde::{Deserialize, Serialize};

/// Overbooking scenario for a single flight
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OverbookingParams {
    pub tickets_sold: u32,
    pub show_up_probability: f64,
    pub capacity: u32,
    pub indemnity_cost: f64,      // Paid per bumped passenger
    pub avg_ticket_price: f64,
    pub extra_seats: u32,         // Seats sold beyond capacity in the viability check
    pub risk_cap: f64,            // Highest acceptable overbooking probability
}

impl Default for OverbookingParams {
    fn default() -> Self {
        Self {
            tickets_sold: 130,
            show_up_probability: 0.88,
            capacity: 120,
            indemnity_cost: 500.0,
            avg_ticket_price: 500.0,
            extra_seats: 10,
            risk_cap: 0.07,
        }
    }
}

/// Probability of a single discrete outcome
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CountProbability {
    pub count: u32,
    pub probability: f64,
}

/// Overbooking risk for one candidate number of tickets sold
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RiskPoint {
    pub sold_count: u32,
    pub risk: f64,
}

/// Complete overbooking analysis for one parameter set
#[derive(Clone, Debug, Serialize)]
pub struct OverbookingResult {
    pub attendance_pmf: Vec<CountProbability>,
    pub overbooking_probability: f64,
    pub risk_curve: Vec<RiskPoint>,
    /// Largest sold count whose risk stays under the cap; `None` when no
    /// point of the scanned range qualifies.
    pub max_safe_sold_count: Option<u32>,
    pub expected_profit_extra: f64,
    pub expected_indemnity_cost: f64,
    pub net_expected_gain: f64,
}

/// Poisson arrival model (arrivals per hour)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoissonParams {
    pub rate: f64,
    pub max_count: u32,
}

impl Default for PoissonParams {
    fn default() -> Self {
        Self {
            rate: 5.0,
            max_count: 14,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PoissonResult {
    pub pmf: Vec<CountProbability>,
}

/// Gaussian sales model
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NormalParams {
    pub mean: f64,
    pub std_dev: f64,
    pub point_count: usize,
}

impl Default for NormalParams {
    fn default() -> Self {
        Self {
            mean: 100.0,
            std_dev: 15.0,
            point_count: 200,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DensityPoint {
    pub value: f64,
    pub density: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct NormalResult {
    pub density: Vec<DensityPoint>,
}

/// Investment scenario for the ROI simulator
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoiParams {
    pub expected_revenue: f64,
    pub operating_cost: f64,
    pub investment: f64,
    pub simulation_count: usize,
    pub revenue_volatility_fraction: f64, // Std dev of revenue as a fraction of its mean
    pub histogram_bins: usize,
    /// Fixed seed for reproducible runs; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for RoiParams {
    fn default() -> Self {
        Self {
            expected_revenue: 80_000.0,
            operating_cost: 10_000.0,
            investment: 50_000.0,
            simulation_count: 1_000,
            revenue_volatility_fraction: 0.2,
            histogram_bins: 40,
            seed: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HistogramBin {
    pub bin_start: f64,
    pub frequency: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CdfPoint {
    pub roi_value: f64,
    pub cumulative_probability: f64,
}

/// Outcome of the mean-ROI threshold rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Decision {
    Invest,
    Reevaluate,
}

/// Descriptive statistics of the simulated ROI sample
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoiSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub percentile_10: f64,
    pub percentile_25: f64,
    pub percentile_50: f64,  // Median
    pub percentile_75: f64,
    pub percentile_90: f64,
}

/// Complete ROI simulation result
#[derive(Clone, Debug, Serialize)]
pub struct RoiResult {
    pub expected_roi_percent: f64,
    pub simulated_roi: Vec<f64>,
    pub histogram: Vec<HistogramBin>,
    pub cdf: Vec<CdfPoint>,
    pub probability_negative: f64,
    pub decision: Decision,
    pub summary: RoiSummary,
}
