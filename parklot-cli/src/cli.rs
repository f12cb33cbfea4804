//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Number of spots when neither the flag nor the environment sets one
pub const DEFAULT_CAPACITY: u16 = 30;

/// Largest lot the simulator accepts
pub const MAX_CAPACITY: u16 = 1000;

/// Parking lot simulator with a numbered text menu
#[derive(Parser, Debug)]
#[command(name = "parklot", about = "Simulate a parking lot from a text menu", version)]
pub struct Args {
    /// Number of spots in the lot (falls back to PARKLOT_CAPACITY, then 30)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=MAX_CAPACITY as i64))]
    pub capacity: Option<u16>,

    /// Read menu input from this file instead of stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Quiet mode - no menu or prompts, only results; logging off
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}
