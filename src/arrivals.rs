/// Customer arrival model (Poisson counts per hour)

use log::debug;
use statrs::distribution::{Discrete, Poisson};

use crate::error::{require_positive, AnalysisError, Result};
use crate::models::{CountProbability, PoissonParams, PoissonResult};

/// Evaluate the Poisson PMF at every count in `0..=max_count`
pub fn arrival_distribution(params: &PoissonParams) -> Result<PoissonResult> {
    let rate = require_positive("rate", params.rate)?;
    let poisson = Poisson::new(rate).map_err(|e| AnalysisError::invalid("rate", e.to_string()))?;

    let pmf: Vec<CountProbability> = (0..=params.max_count)
        .map(|count| CountProbability {
            count,
            probability: poisson.pmf(count as u64),
        })
        .collect();

    debug!(
        "Arrivals: lambda={} over [0, {}] covers {:.4} of the mass",
        rate,
        params.max_count,
        pmf.iter().map(|p| p.probability).sum::<f64>()
    );

    Ok(PoissonResult { pmf })
}
