/// Command-line configuration
/// Every flag defaults to the reference scenario and is range-checked to the
/// bounds the interactive front end offers.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::models::{NormalParams, OverbookingParams, PoissonParams, RoiParams};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Overbooking risk and ROI decision support", long_about = None)]
pub struct Cli {
    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Seed for the ROI simulation (entropy-seeded when omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log this crate at debug level
    #[arg(short, long, default_value_t = false, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Binomial overbooking risk and safe-sales threshold
    Overbooking(OverbookingArgs),
    /// Poisson customer arrivals
    Arrivals(ArrivalArgs),
    /// Gaussian sales density
    Sales(SalesArgs),
    /// Monte Carlo ROI simulation
    Roi(RoiArgs),
    /// Run all four analyses
    All(AllArgs),
}

#[derive(Args, Debug, Clone)]
pub struct OverbookingArgs {
    #[arg(long, default_value_t = 130, value_parser = clap::value_parser!(u32).range(1..=200))]
    pub tickets_sold: u32,

    /// Probability that a ticket holder shows up
    #[arg(long, default_value_t = 0.88, value_parser = probability)]
    pub show_up: f64,

    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u32).range(1..=500))]
    pub capacity: u32,

    /// Indemnity paid per bumped passenger
    #[arg(long, default_value_t = 500.0, value_parser = bounded(100.0, 5000.0))]
    pub indemnity_cost: f64,

    #[arg(long, default_value_t = 500.0, value_parser = bounded(100.0, 5000.0))]
    pub ticket_price: f64,

    #[arg(long, default_value_t = 10)]
    pub extra_seats: u32,

    /// Highest acceptable overbooking probability
    #[arg(long, default_value_t = 0.07, value_parser = probability)]
    pub risk_cap: f64,
}

impl From<&OverbookingArgs> for OverbookingParams {
    fn from(args: &OverbookingArgs) -> Self {
        OverbookingParams {
            tickets_sold: args.tickets_sold,
            show_up_probability: args.show_up,
            capacity: args.capacity,
            indemnity_cost: args.indemnity_cost,
            avg_ticket_price: args.ticket_price,
            extra_seats: args.extra_seats,
            risk_cap: args.risk_cap,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ArrivalArgs {
    /// Mean arrivals per hour
    #[arg(long, default_value_t = 5.0, value_parser = bounded(1.0, 20.0))]
    pub rate: f64,

    #[arg(long, default_value_t = 14)]
    pub max_count: u32,
}

impl From<&ArrivalArgs> for PoissonParams {
    fn from(args: &ArrivalArgs) -> Self {
        PoissonParams {
            rate: args.rate,
            max_count: args.max_count,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SalesArgs {
    #[arg(long, default_value_t = 100.0, value_parser = bounded(0.0, 200.0))]
    pub mean: f64,

    #[arg(long, default_value_t = 15.0, value_parser = bounded(1.0, 50.0))]
    pub std_dev: f64,

    #[arg(long, default_value_t = 200)]
    pub points: usize,
}

impl From<&SalesArgs> for NormalParams {
    fn from(args: &SalesArgs) -> Self {
        NormalParams {
            mean: args.mean,
            std_dev: args.std_dev,
            point_count: args.points,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct RoiArgs {
    /// Additional yearly revenue
    #[arg(long, default_value_t = 80_000.0, value_parser = bounded(0.0, 200_000.0))]
    pub revenue: f64,

    /// Yearly operating cost
    #[arg(long, default_value_t = 10_000.0, value_parser = bounded(0.0, 50_000.0))]
    pub operating_cost: f64,

    /// Initial investment
    #[arg(long, default_value_t = 50_000.0, value_parser = bounded(0.0, 200_000.0))]
    pub investment: f64,

    #[arg(long, default_value_t = 1_000, value_parser = clap::value_parser!(u64).range(100..=5000))]
    pub simulations: u64,

    /// Revenue standard deviation as a fraction of expected revenue
    #[arg(long, default_value_t = 0.2, value_parser = bounded(0.0, 1.0))]
    pub volatility: f64,

    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u64).range(1..))]
    pub bins: u64,
}

impl RoiArgs {
    pub fn to_params(&self, seed: Option<u64>) -> RoiParams {
        RoiParams {
            expected_revenue: self.revenue,
            operating_cost: self.operating_cost,
            investment: self.investment,
            simulation_count: self.simulations as usize,
            revenue_volatility_fraction: self.volatility,
            histogram_bins: self.bins as usize,
            seed,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct AllArgs {
    #[command(flatten)]
    pub overbooking: OverbookingArgs,
    #[command(flatten)]
    pub arrivals: ArrivalArgs,
    #[command(flatten)]
    pub sales: SalesArgs,
    #[command(flatten)]
    pub roi: RoiArgs,
}

fn probability(s: &str) -> Result<f64, String> {
    bounded(0.0, 1.0)(s)
}

/// Parser for a float restricted to `[min, max]`
fn bounded(min: f64, max: f64) -> impl Fn(&str) -> Result<f64, String> + Clone + Send + Sync + 'static {
    move |s: &str| {
        let value: f64 = s.parse().map_err(|_| format!("`{}` is not a number", s))?;
        if value.is_finite() && (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(format!("{} is not in {}..={}", value, min, max))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_scenario() {
        let cli = Cli::try_parse_from(["decision-sim", "all"]).unwrap();
        let Command::All(args) = cli.command else {
            panic!("expected the all command");
        };

        let overbooking = OverbookingParams::from(&args.overbooking);
        let reference = OverbookingParams::default();
        assert_eq!(overbooking.tickets_sold, reference.tickets_sold);
        assert_eq!(overbooking.show_up_probability, reference.show_up_probability);
        assert_eq!(overbooking.capacity, reference.capacity);
        assert_eq!(overbooking.risk_cap, reference.risk_cap);

        let roi = args.roi.to_params(None);
        let reference = RoiParams::default();
        assert_eq!(roi.simulation_count, reference.simulation_count);
        assert_eq!(roi.histogram_bins, reference.histogram_bins);
        assert_eq!(roi.investment, reference.investment);

        assert_eq!(PoissonParams::from(&args.arrivals).max_count, 14);
        assert_eq!(NormalParams::from(&args.sales).point_count, 200);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["decision-sim", "roi", "--seed", "7", "--format", "json"]).unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        assert!(Cli::try_parse_from(["decision-sim", "overbooking", "--show-up", "1.5"]).is_err());
        assert!(Cli::try_parse_from(["decision-sim", "overbooking", "--tickets-sold", "250"]).is_err());
        assert!(Cli::try_parse_from(["decision-sim", "roi", "--simulations", "50"]).is_err());
        assert!(Cli::try_parse_from(["decision-sim", "arrivals", "--rate", "abc"]).is_err());
    }
}
