//! tagscope-align - NFC reader/tag trace aligner

use std::io;

use clap::Parser;
use env_logger::Env;
use log::info;

use tagscope::cli::{commands, failure_context, log_filter, AlignCli};
use tagscope::config::AlignConfig;

fn main() -> anyhow::Result<()> {
    let cli = AlignCli::parse();

    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or(log_filter(cli.verbose))).init();

    info!("Tagscope aligner v{}", env!("CARGO_PKG_VERSION"));

    let config = AlignConfig::from(cli);
    let stdout = io::stdout();
    commands::run_align(&config, stdout.lock()).map_err(|e| {
        failure_context(
            e,
            format!(
                "aligning {} against {}",
                config.reader_path.display(),
                config.tag_path.display()
            ),
        )
    })
}
