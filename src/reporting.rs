/// Reporting and output formatting module
/// Report sinks receive finished result records and present them; they never
/// compute anything themselves.

use std::io::{self, Write};

use serde::Serialize;

use crate::models::{
    CountProbability, Decision, NormalResult, OverbookingParams, OverbookingResult, PoissonResult,
    RoiResult,
};

/// Consumer of analysis results
pub trait ReportSink {
    fn overbooking(&mut self, params: &OverbookingParams, result: &OverbookingResult) -> io::Result<()>;
    fn arrivals(&mut self, result: &PoissonResult) -> io::Result<()>;
    fn sales(&mut self, result: &NormalResult) -> io::Result<()>;
    fn roi(&mut self, result: &RoiResult) -> io::Result<()>;
}

/// Format a probability as a percentage with two decimals
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Format an amount as `R$ 12,345.67`
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}R$ {}.{}", sign, grouped, cents)
}

fn bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    "█".repeat(filled)
}

/// Human-readable report written to any `Write` target (stdout in the CLI)
pub struct ConsoleReport<W: Write> {
    out: W,
    bar_width: usize,
    min_probability: f64,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            bar_width: 40,
            min_probability: 0.001,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn header(&mut self, title: &str) -> io::Result<()> {
        let line = "═".repeat(78);
        writeln!(self.out, "\n╔{}╗", line)?;
        writeln!(self.out, "║ {:<76} ║", title)?;
        writeln!(self.out, "╚{}╝\n", line)
    }

    /// Bar rows for a PMF, skipping outcomes too unlikely to show
    fn pmf_rows(&mut self, pmf: &[CountProbability]) -> io::Result<()> {
        let peak = pmf.iter().map(|p| p.probability).fold(0.0, f64::max);
        if peak <= 0.0 {
            return Ok(());
        }
        let floor = self.min_probability;
        for point in pmf.iter().filter(|p| p.probability >= floor) {
            writeln!(
                self.out,
                "  {:>4} | {:>7} {}",
                point.count,
                format_percent(point.probability),
                bar(point.probability / peak, self.bar_width)
            )?;
        }
        Ok(())
    }
}

impl<W: Write> ReportSink for ConsoleReport<W> {
    fn overbooking(&mut self, params: &OverbookingParams, result: &OverbookingResult) -> io::Result<()> {
        self.header("OVERBOOKING ANALYSIS")?;
        writeln!(
            self.out,
            "Tickets sold: {} | Seats: {} | Show-up probability: {}",
            params.tickets_sold,
            params.capacity,
            format_percent(params.show_up_probability)
        )?;

        writeln!(self.out, "\nAttendance distribution:")?;
        self.pmf_rows(&result.attendance_pmf)?;

        writeln!(
            self.out,
            "\nP(attendance > capacity): {}",
            format_percent(result.overbooking_probability)
        )?;

        writeln!(self.out, "\nRisk by tickets sold (cap {}):", format_percent(params.risk_cap))?;
        // Only the transition zone; both tails are flat at 0% and 100%
        let floor = self.min_probability;
        for point in result
            .risk_curve
            .iter()
            .filter(|p| p.risk >= floor && p.risk <= 1.0 - floor)
        {
            let marker = if point.risk <= params.risk_cap { "" } else { "  over cap" };
            writeln!(
                self.out,
                "  {:>4} | {:>7} {}{}",
                point.sold_count,
                format_percent(point.risk),
                bar(point.risk, self.bar_width),
                marker
            )?;
        }

        match result.max_safe_sold_count {
            Some(sold) => writeln!(self.out, "\n-> Safe sales up to: {} tickets", sold)?,
            None => writeln!(
                self.out,
                "\n-> No safe sales level within {} to {} tickets",
                params.capacity,
                params.tickets_sold.saturating_mul(2)
            )?,
        }

        writeln!(self.out, "\nSelling +{} seats:", params.extra_seats)?;
        writeln!(self.out, "  Extra profit:              {}", format_currency(result.expected_profit_extra))?;
        writeln!(self.out, "  Expected indemnity cost:   {}", format_currency(result.expected_indemnity_cost))?;
        writeln!(self.out, "  Net expected gain:         {}", format_currency(result.net_expected_gain))
    }

    fn arrivals(&mut self, result: &PoissonResult) -> io::Result<()> {
        self.header("CUSTOMER ARRIVALS (POISSON)")?;
        self.pmf_rows(&result.pmf)
    }

    fn sales(&mut self, result: &NormalResult) -> io::Result<()> {
        self.header("SALES DENSITY (NORMAL)")?;
        let peak = result.density.iter().map(|p| p.density).fold(0.0, f64::max);
        // Twenty evenly strided rows are enough to show the shape
        let stride = (result.density.len() / 20).max(1);
        for point in result.density.iter().step_by(stride) {
            let scaled = if peak > 0.0 { point.density / peak } else { 0.0 };
            writeln!(
                self.out,
                "  {:>9.2} | {:.6} {}",
                point.value,
                point.density,
                bar(scaled, self.bar_width)
            )?;
        }
        Ok(())
    }

    fn roi(&mut self, result: &RoiResult) -> io::Result<()> {
        self.header("ROI SIMULATION (MONTE CARLO)")?;
        writeln!(self.out, "Expected ROI: {:.2}%", result.expected_roi_percent)?;

        writeln!(self.out, "\nSimulated ROI histogram:")?;
        let peak = result.histogram.iter().map(|b| b.frequency).max().unwrap_or(0);
        for bin in &result.histogram {
            let scaled = if peak > 0 { bin.frequency as f64 / peak as f64 } else { 0.0 };
            writeln!(
                self.out,
                "  {:>9.2}% | {:>5} {}",
                bin.bin_start,
                bin.frequency,
                bar(scaled, self.bar_width)
            )?;
        }

        let s = &result.summary;
        writeln!(self.out, "\nROI distribution:")?;
        writeln!(self.out, "  Mean:             {:.2}% ± {:.2}%", s.mean, s.std_dev)?;
        writeln!(self.out, "  Minimum:          {:.2}%", s.min)?;
        writeln!(self.out, "  10th Percentile:  {:.2}%", s.percentile_10)?;
        writeln!(self.out, "  25th Percentile:  {:.2}%", s.percentile_25)?;
        writeln!(self.out, "  Median (50th):    {:.2}%", s.percentile_50)?;
        writeln!(self.out, "  75th Percentile:  {:.2}%", s.percentile_75)?;
        writeln!(self.out, "  90th Percentile:  {:.2}%", s.percentile_90)?;
        writeln!(self.out, "  Maximum:          {:.2}%", s.max)?;

        writeln!(self.out, "\nP(ROI < 0): {}", format_percent(result.probability_negative))?;
        let verdict = match result.decision {
            Decision::Invest => "Invest, simulated ROI is positive on average.",
            Decision::Reevaluate => "Reevaluate the project.",
        };
        writeln!(self.out, "Decision: {}", verdict)
    }
}

#[derive(Serialize)]
struct JsonEnvelope<'a, P: Serialize, T: Serialize> {
    component: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'a P>,
    result: &'a T,
}

/// Machine-readable report: one pretty-printed JSON document per component
pub struct JsonReport<W: Write> {
    out: W,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit<P: Serialize, T: Serialize>(
        &mut self,
        component: &'static str,
        params: Option<&P>,
        result: &T,
    ) -> io::Result<()> {
        let envelope = JsonEnvelope {
            component,
            params,
            result,
        };
        serde_json::to_writer_pretty(&mut self.out, &envelope)?;
        writeln!(self.out)
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn overbooking(&mut self, params: &OverbookingParams, result: &OverbookingResult) -> io::Result<()> {
        self.emit("overbooking", Some(params), result)
    }

    fn arrivals(&mut self, result: &PoissonResult) -> io::Result<()> {
        self.emit::<(), _>("arrivals", None, result)
    }

    fn sales(&mut self, result: &NormalResult) -> io::Result<()> {
        self.emit::<(), _>("sales", None, result)
    }

    fn roi(&mut self, result: &RoiResult) -> io::Result<()> {
        self.emit::<(), _>("roi", None, result)
    }
}
