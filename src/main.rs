use std::io;

use clap::Parser;
use decision_sim::config::{Cli, OutputFormat};
use decision_sim::reporting::{ConsoleReport, JsonReport};
use decision_sim::run;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        builder.filter(Some("decision_sim"), log::LevelFilter::Debug);
    }
    builder.init();

    let stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Text => run(&cli, &mut ConsoleReport::new(stdout)),
        OutputFormat::Json => run(&cli, &mut JsonReport::new(stdout)),
    }
}
