//! Inspect command implementation
//!
//! Reports per-heliostat observation counts and whether each heliostat would
//! be eligible for a split with the given sizes, without computing one.

use super::shared::setup_logging;
use crate::app::services::dataset_splitter::eligibility::meets_minimum_size;
use crate::app::services::metadata_loader::load_metadata;
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

/// Per-heliostat entry of the inspection report
#[derive(Debug, Serialize)]
struct HeliostatSummary {
    heliostat_id: String,
    observations: usize,
    eligible: bool,
}

/// JSON-serializable inspection report
#[derive(Debug, Serialize)]
struct InspectReport {
    training_size: usize,
    validation_size: usize,
    minimum_group_size: usize,
    total_observations: usize,
    eligible_heliostats: usize,
    heliostats: Vec<HeliostatSummary>,
}

/// Inspect command runner
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;
    args.validate()?;

    let loaded = load_metadata(&args.input_file)?;
    info!("{}", loaded.stats.summary());

    let mut group_sizes: BTreeMap<String, usize> = BTreeMap::new();
    for observation in &loaded.observations {
        *group_sizes.entry(observation.heliostat_id.clone()).or_default() += 1;
    }

    let heliostats: Vec<HeliostatSummary> = group_sizes
        .into_iter()
        .map(|(heliostat_id, observations)| HeliostatSummary {
            heliostat_id,
            observations,
            eligible: meets_minimum_size(observations, args.training_size, args.validation_size),
        })
        .collect();

    let report = InspectReport {
        training_size: args.training_size,
        validation_size: args.validation_size,
        minimum_group_size: args.training_size + 2 * args.validation_size,
        total_observations: loaded.observations.len(),
        eligible_heliostats: heliostats.iter().filter(|h| h.eligible).count(),
        heliostats,
    };

    match args.output_format {
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&report)
                .map_err(|e| Error::data_validation(format!("Failed to render report: {}", e)))?;
            println!("{}", rendered);
        }
        OutputFormat::Human => print_human_report(&report),
    }

    Ok(())
}

/// Render the human-readable inspection table
fn print_human_report(report: &InspectReport) {
    println!();
    println!(
        "{} ({} observations, minimum group size {})",
        "Heliostat eligibility".bold(),
        report.total_observations,
        report.minimum_group_size
    );
    println!();
    println!("  {:<12} {:>12}  {}", "Heliostat", "Observations", "Eligible");

    for heliostat in &report.heliostats {
        let marker = if heliostat.eligible {
            "yes".green()
        } else {
            "no".red()
        };
        println!(
            "  {:<12} {:>12}  {}",
            heliostat.heliostat_id, heliostat.observations, marker
        );
    }

    println!();
    println!(
        "{} of {} heliostats eligible for training size {} and validation size {}",
        report.eligible_heliostats.to_string().green(),
        report.heliostats.len(),
        report.training_size,
        report.validation_size
    );
}
