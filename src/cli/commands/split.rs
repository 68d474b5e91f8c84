//! Split command implementation
//!
//! This module contains the complete split generation workflow: argument
//! validation, metadata loading, split computation, CSV output, and the
//! final report.

use super::shared::setup_logging;
use crate::app::services::dataset_splitter::{DatasetSplitter, SplitResult};
use crate::cli::args::{OutputFormat, SplitArgs};
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Split command runner
///
/// Orchestrates the full workflow:
/// 1. Set up logging and validate arguments
/// 2. Load the calibration metadata
/// 3. Compute the requested split
/// 4. Write the split CSV and report the outcome
pub fn run_split(args: SplitArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting heliostat splitter");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let output_dir = args.resolve_output_dir();
    info!("Writing splits to {}", output_dir.display());

    let splitter = DatasetSplitter::from_metadata_file(&args.input_file, &output_dir)?;
    let result = splitter.get_dataset_splits(
        args.split_type,
        args.training_size,
        args.validation_size,
        args.show_progress(),
    )?;

    let output_file = splitter.write_splits(&result, args.minimal)?;

    report_split(&args, &result, &output_file, start_time.elapsed().as_secs_f64())?;

    Ok(())
}

/// JSON-serializable view of a completed split run
#[derive(Debug, Serialize)]
struct SplitReport<'a> {
    request: &'a crate::config::SplitRequest,
    stats: &'a crate::app::services::dataset_splitter::SplitStats,
    output_file: String,
    elapsed_seconds: f64,
}

/// Render the final report in the requested output format
fn report_split(
    args: &SplitArgs,
    result: &SplitResult,
    output_file: &Path,
    elapsed_seconds: f64,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            let report = SplitReport {
                request: &result.request,
                stats: &result.stats,
                output_file: output_file.display().to_string(),
                elapsed_seconds,
            };
            let rendered = serde_json::to_string_pretty(&report)
                .map_err(|e| Error::data_validation(format!("Failed to render report: {}", e)))?;
            println!("{}", rendered);
        }
        OutputFormat::Human => {
            if args.quiet {
                return Ok(());
            }

            let stats = &result.stats;
            println!();
            println!("{}", "Split complete".green().bold());
            println!(
                "  Strategy:    {} (train {}, validation {})",
                result.request.split_type, result.request.training_size,
                result.request.validation_size
            );
            println!(
                "  Heliostats:  {} split, {} below minimum, {} under quota",
                stats.heliostats_split.to_string().green(),
                stats.heliostats_dropped.to_string().yellow(),
                stats.heliostats_invalidated.to_string().yellow()
            );
            println!(
                "  Rows:        {} train / {} test / {} validation ({} excluded)",
                stats.train_rows, stats.test_rows, stats.validation_rows,
                stats.excluded_rows()
            );
            println!("  Output:      {}", output_file.display());
            println!("  Elapsed:     {:.2}s", elapsed_seconds);
        }
    }

    Ok(())
}
