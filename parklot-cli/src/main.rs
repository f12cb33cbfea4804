//! Parklot CLI - interactive menu for the parking lot simulator

mod cli;
mod config;
mod error;
mod menu;
mod output;
mod session;

use clap::Parser;
use cli::Args;
use config::Config;
use output::OutputFormatter;
use parklot::Lot;
use session::Session;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = Config::from_args(args).and_then(run) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr so it never mixes with menu output
///
/// - `quiet`: logging off
/// - `verbose`: debug level
fn init_tracing(quiet: bool, verbose: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(config: Config) -> Result<(), error::CliError> {
    init_tracing(config.quiet, config.verbose);
    debug!(?config, "resolved configuration");

    let input = config.open_input()?;
    let output = OutputFormatter::new(std::io::stdout().lock(), config.quiet);

    let mut session = Session::new(Lot::new(config.capacity), input, output);
    session.run()?;

    let (lot, _) = session.into_parts();
    debug!(
        occupied = lot.occupied_count(),
        available = lot.available_count(),
        "lot closed"
    );
    Ok(())
}
