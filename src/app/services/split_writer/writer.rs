//! CSV writer for split results
//!
//! The output schema is either minimal (`Id`, `HeliostatId`, `Split`) or
//! extended with the helper columns (`Azimuth`, `Elevation`, `CreatedAt`)
//! that downstream plots and sanity checks use.

use crate::app::services::dataset_splitter::SplitResult;
use crate::constants::{METADATA_DATETIME_FORMAT, columns};
use crate::{Error, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write a split result as a CSV file into the output directory
///
/// Returns the path of the written file. The file name is derived from the
/// request parameters (see
/// [`SplitRequest::output_filename`](crate::config::SplitRequest::output_filename)).
pub fn write_split_csv(
    result: &SplitResult,
    output_dir: &Path,
    minimal: bool,
) -> Result<PathBuf> {
    let path = output_dir.join(result.request.output_filename());
    let mut df = assemble_dataframe(result, minimal)?;

    let file = File::create(&path)
        .map_err(|e| Error::io(format!("Failed to create split file {}", path.display()), e))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(&mut df)
        .map_err(|e| {
            Error::split_writing(
                format!("Failed to write split file {}", path.display()),
                e,
            )
        })?;

    info!(
        "Wrote {} split rows to {}",
        result.assignments.len(),
        path.display()
    );

    Ok(path)
}

/// Assemble the output table from the labeled assignments
fn assemble_dataframe(result: &SplitResult, minimal: bool) -> Result<DataFrame> {
    let ids: Vec<i64> = result
        .assignments
        .iter()
        .map(|a| a.observation.image_id)
        .collect();
    let heliostat_ids: Vec<&str> = result
        .assignments
        .iter()
        .map(|a| a.observation.heliostat_id.as_str())
        .collect();
    let labels: Vec<&str> = result.assignments.iter().map(|a| a.label.as_str()).collect();

    let mut table_columns = vec![
        Column::new(columns::ID.into(), ids),
        Column::new(columns::HELIOSTAT_ID.into(), heliostat_ids),
    ];

    if !minimal {
        let azimuths: Vec<f64> = result
            .assignments
            .iter()
            .map(|a| a.observation.azimuth)
            .collect();
        let elevations: Vec<f64> = result
            .assignments
            .iter()
            .map(|a| a.observation.elevation)
            .collect();
        let created_at: Vec<String> = result
            .assignments
            .iter()
            .map(|a| {
                a.observation
                    .created_at
                    .format(METADATA_DATETIME_FORMAT)
                    .to_string()
            })
            .collect();

        table_columns.push(Column::new(columns::AZIMUTH.into(), azimuths));
        table_columns.push(Column::new(columns::ELEVATION.into(), elevations));
        table_columns.push(Column::new(columns::CREATED_AT.into(), created_at));
    }

    table_columns.push(Column::new(columns::SPLIT.into(), labels));

    DataFrame::new(table_columns)
        .map_err(|e| Error::split_writing("Failed to assemble split table", e))
}
