//! tagscope-plot - stereo capture channel plotter

use clap::Parser;
use env_logger::Env;
use log::info;

use tagscope::cli::{commands, failure_context, log_filter, PlotCli};
use tagscope::config::PlotConfig;

fn main() -> anyhow::Result<()> {
    let cli = PlotCli::parse();

    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or(log_filter(cli.verbose))).init();

    info!("Tagscope plotter v{}", env!("CARGO_PKG_VERSION"));

    let config = PlotConfig::from(cli);
    commands::run_plot(&config)
        .map_err(|e| failure_context(e, format!("plotting {}", config.input.display())))
}
