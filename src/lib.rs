//! Overbooking risk and investment ROI decision support.
//!
//! Four independent analyses, each a pure function from a parameter record to
//! a result record:
//!
//! - [`analyze_overbooking`]: binomial show-up model, risk curve and the
//!   largest ticket sale that keeps overbooking risk under a cap
//! - [`arrival_distribution`]: Poisson arrival counts
//! - [`sales_density`]: Gaussian sales density over +/- 4 sigma
//! - [`simulate_roi`]: Monte Carlo ROI with histogram, empirical CDF and an
//!   invest/reevaluate call
//!
//! Presentation lives behind [`reporting::ReportSink`].

pub mod arrivals;
pub mod config;
pub mod demand;
pub mod error;
pub mod models;
pub mod monte_carlo;
pub mod optimizer;
pub mod overbooking;
pub mod reporting;
pub mod simulation;
pub mod statistics;

pub use arrivals::arrival_distribution;
pub use demand::sales_density;
pub use error::{AnalysisError, Result};
pub use models::*;
pub use monte_carlo::{simulate_roi, simulate_roi_with_rng};
pub use overbooking::analyze_overbooking;

use anyhow::Context;
use config::{Cli, Command};
use reporting::ReportSink;

/// Evaluate the analyses selected on the command line and hand each result
/// to `sink`.
pub fn run(cli: &Cli, sink: &mut dyn ReportSink) -> anyhow::Result<()> {
    match &cli.command {
        Command::Overbooking(args) => {
            let params = OverbookingParams::from(args);
            let result = analyze_overbooking(&params).context("overbooking analysis failed")?;
            sink.overbooking(&params, &result)?;
        }
        Command::Arrivals(args) => {
            let result = arrival_distribution(&args.into()).context("arrival distribution failed")?;
            sink.arrivals(&result)?;
        }
        Command::Sales(args) => {
            let result = sales_density(&args.into()).context("sales density failed")?;
            sink.sales(&result)?;
        }
        Command::Roi(args) => {
            let result = simulate_roi(&args.to_params(cli.seed)).context("ROI simulation failed")?;
            sink.roi(&result)?;
        }
        Command::All(args) => {
            let params = OverbookingParams::from(&args.overbooking);
            let overbooking = analyze_overbooking(&params).context("overbooking analysis failed")?;
            let arrivals = arrival_distribution(&(&args.arrivals).into()).context("arrival distribution failed")?;
            let sales = sales_density(&(&args.sales).into()).context("sales density failed")?;
            let roi = simulate_roi(&args.roi.to_params(cli.seed)).context("ROI simulation failed")?;

            sink.overbooking(&params, &overbooking)?;
            sink.arrivals(&arrivals)?;
            sink.sales(&sales)?;
            sink.roi(&roi)?;
        }
    }
    Ok(())
}
