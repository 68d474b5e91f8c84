//! Metadata file loading and per-record parsing
//!
//! This module reads a calibration metadata CSV into typed observations,
//! deriving azimuth/elevation from the sun-position vector when the table does
//! not carry precomputed angles, and enforcing the image-id primary-key
//! invariant.

use super::column_mapping::{AngleColumns, ColumnMapping};
use super::field_parsers::{
    parse_required_datetime, parse_required_f64, parse_required_i64, parse_required_string,
};
use super::stats::LoadStats;
use crate::app::models::{Observation, sun_vector_to_angles};
use crate::constants::columns;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Result of loading one metadata file
#[derive(Debug, Clone)]
pub struct MetadataLoadResult {
    /// Parsed observations in file order
    pub observations: Vec<Observation>,
    /// Loading statistics
    pub stats: LoadStats,
}

/// Load a calibration metadata CSV into typed observations
///
/// # Errors
/// * `Error::FileNotFound` if the input file does not exist
/// * `Error::MissingColumns` if required columns are absent
/// * `Error::CsvParsing` / `Error::DataValidation` for malformed records
pub fn load_metadata(input_file: &Path) -> Result<MetadataLoadResult> {
    if !input_file.is_file() {
        return Err(Error::file_not_found(input_file.display().to_string()));
    }

    let file_name = input_file.display().to_string();
    info!("Loading calibration metadata from {}", file_name);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(input_file)
        .map_err(|e| Error::csv_parsing(&file_name, "Failed to open metadata file", Some(e)))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::csv_parsing(&file_name, "Failed to read header row", Some(e)))?
        .clone();
    let mapping = ColumnMapping::from_headers(&file_name, &headers)?;
    debug!("Resolved column mapping: {:?}", mapping);

    let mut observations = Vec::new();
    let mut stats = LoadStats::new();
    let mut seen_ids = HashSet::new();
    let mut heliostats = HashSet::new();

    for (row_index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            Error::csv_parsing(
                &file_name,
                format!("Failed to read record {}", row_index + 1),
                Some(e),
            )
        })?;

        let (observation, derived) = parse_observation_record(&record, &mapping)?;

        if !seen_ids.insert(observation.image_id) {
            return Err(Error::data_validation(format!(
                "Duplicate image id {} in '{}': the id column is a primary key",
                observation.image_id, file_name
            )));
        }

        heliostats.insert(observation.heliostat_id.clone());
        if derived {
            stats.derived_angles += 1;
        }
        observations.push(observation);
    }

    stats.rows_loaded = observations.len();
    stats.heliostat_count = heliostats.len();
    info!("{}", stats.summary());

    Ok(MetadataLoadResult {
        observations,
        stats,
    })
}

/// Parse a single observation record
///
/// Returns the observation and whether its angles were derived from a
/// sun-position vector.
fn parse_observation_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
) -> Result<(Observation, bool)> {
    let image_id = parse_required_i64(record, mapping.image_id, columns::ID)?;
    let heliostat_id = parse_required_string(record, mapping.heliostat_id, columns::HELIOSTAT_ID)?;
    let created_at = parse_required_datetime(record, mapping.created_at, columns::CREATED_AT)?;

    let (azimuth, elevation, derived) = match mapping.angles {
        AngleColumns::Direct { azimuth, elevation } => {
            let azimuth = parse_required_f64(record, azimuth, columns::AZIMUTH)?;
            let elevation = parse_required_f64(record, elevation, columns::ELEVATION)?;
            (azimuth, elevation, false)
        }
        AngleColumns::SunVector { east, north, up } => {
            let east = parse_required_f64(record, east, columns::SUN_POS_E)?;
            let north = parse_required_f64(record, north, columns::SUN_POS_N)?;
            let up = parse_required_f64(record, up, columns::SUN_POS_U)?;
            let (azimuth, elevation) = sun_vector_to_angles(east, north, up);
            (azimuth, elevation, true)
        }
    };

    let observation = Observation::new(image_id, heliostat_id, created_at, azimuth, elevation)?;
    Ok((observation, derived))
}
