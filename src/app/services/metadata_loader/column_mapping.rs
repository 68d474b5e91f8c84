//! Header scanning and column mapping for calibration metadata files
//!
//! The metadata table must carry an image id, a heliostat id, a capture
//! timestamp, and a sun position: either precomputed azimuth/elevation angles
//! or a 3D east/north/up sun vector. Header matching is case-insensitive
//! because exported tables are not consistent about capitalization.

use crate::constants::columns;
use crate::{Error, Result};
use csv::StringRecord;

/// Where the sun position lives in the input table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleColumns {
    /// Precomputed azimuth/elevation angle columns
    Direct { azimuth: usize, elevation: usize },
    /// 3D sun-position vector columns; angles are derived during parsing
    SunVector { east: usize, north: usize, up: usize },
}

/// Resolved column indices for one metadata file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub image_id: usize,
    pub heliostat_id: usize,
    pub created_at: usize,
    pub angles: AngleColumns,
}

impl ColumnMapping {
    /// Build a column mapping from a header record
    ///
    /// Fails with a schema error listing every missing required column.
    /// Precomputed angle columns are preferred over the sun vector when both
    /// are present.
    pub fn from_headers(file: &str, headers: &StringRecord) -> Result<Self> {
        let mut missing = Vec::new();

        let image_id = find_column(headers, columns::ID);
        let heliostat_id = find_column(headers, columns::HELIOSTAT_ID);
        let created_at = find_column(headers, columns::CREATED_AT);

        if image_id.is_none() {
            missing.push(columns::ID.to_string());
        }
        if heliostat_id.is_none() {
            missing.push(columns::HELIOSTAT_ID.to_string());
        }
        if created_at.is_none() {
            missing.push(columns::CREATED_AT.to_string());
        }

        let angles = resolve_angle_columns(headers, &mut missing);

        if !missing.is_empty() {
            return Err(Error::missing_columns(file, missing));
        }

        // The options are all Some once the missing list is empty
        match (image_id, heliostat_id, created_at, angles) {
            (Some(image_id), Some(heliostat_id), Some(created_at), Some(angles)) => Ok(Self {
                image_id,
                heliostat_id,
                created_at,
                angles,
            }),
            _ => Err(Error::invariant_violation(
                "Column mapping resolution produced an empty index despite passing validation"
                    .to_string(),
            )),
        }
    }
}

/// Find a column index by case-insensitive header name
fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}

/// Resolve the sun-position columns, extending `missing` when neither the
/// angle pair nor the vector triple is complete
fn resolve_angle_columns(
    headers: &StringRecord,
    missing: &mut Vec<String>,
) -> Option<AngleColumns> {
    let azimuth = find_column(headers, columns::AZIMUTH);
    let elevation = find_column(headers, columns::ELEVATION);

    if let (Some(azimuth), Some(elevation)) = (azimuth, elevation) {
        return Some(AngleColumns::Direct { azimuth, elevation });
    }

    let east = find_column(headers, columns::SUN_POS_E);
    let north = find_column(headers, columns::SUN_POS_N);
    let up = find_column(headers, columns::SUN_POS_U);

    if let (Some(east), Some(north), Some(up)) = (east, north, up) {
        return Some(AngleColumns::SunVector { east, north, up });
    }

    // Report the incomplete set the file appears to be aiming for: a partial
    // angle pair wins over a partial vector, an untouched file reports the
    // canonical angle pair
    if azimuth.is_some() || elevation.is_some() || (east.is_none() && north.is_none() && up.is_none())
    {
        if azimuth.is_none() {
            missing.push(columns::AZIMUTH.to_string());
        }
        if elevation.is_none() {
            missing.push(columns::ELEVATION.to_string());
        }
    } else {
        if east.is_none() {
            missing.push(columns::SUN_POS_E.to_string());
        }
        if north.is_none() {
            missing.push(columns::SUN_POS_N.to_string());
        }
        if up.is_none() {
            missing.push(columns::SUN_POS_U.to_string());
        }
    }

    None
}
