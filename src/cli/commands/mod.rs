//! Command implementations for the heliostat splitter CLI
//!
//! This module contains the main command execution logic, logging setup, and
//! final report rendering. Each command is implemented in its own module:
//! - `split`: split generation workflow with CSV output
//! - `inspect`: per-heliostat observation counts and eligibility report

pub mod inspect;
pub mod shared;
pub mod split;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the heliostat splitter
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Split(split_args) => split::run_split(split_args),
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
    }
}
