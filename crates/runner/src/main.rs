pub mod bench;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, error};

use cli::Cli;
use error::Error;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::setup_logging(cli.verbose, cli.quiet) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        error!("{}", e);
        if !e.is_reported() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

/// Loads configuration, applies CLI overrides and runs the benchmark against stdout.
fn run(cli: &Cli) -> Result<(), Error> {
    let mut config = config::load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    debug!(?config, seed = cli.seed, "Resolved configuration.");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    bench::run_benchmark(&config, cli.seed, &mut out)?;
    out.flush()?;
    Ok(())
}
