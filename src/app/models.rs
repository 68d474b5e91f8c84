//! Data models for heliostat calibration metadata
//!
//! This module contains the core data structures for representing per-image
//! calibration observations and the enumerated split vocabulary (split types,
//! split labels, solstice seasons).

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Observation Structure
// =============================================================================

/// One row of calibration metadata: a single captured image of one heliostat
///
/// The sun position is stored as azimuth/elevation angles in degrees. When the
/// input table carries a 3D sun-position vector instead, the angles are
/// derived during loading via [`sun_vector_to_angles`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Unique image identifier - primary key across the whole table
    pub image_id: i64,

    /// Identifier of the owning heliostat (short alphanumeric code, e.g. "AA23")
    pub heliostat_id: String,

    /// Capture instant (naive input timestamps are interpreted as UTC)
    pub created_at: DateTime<Utc>,

    /// Sun azimuth angle in degrees
    pub azimuth: f64,

    /// Sun elevation angle in degrees
    pub elevation: f64,
}

impl Observation {
    /// Create a new observation with validation
    pub fn new(
        image_id: i64,
        heliostat_id: String,
        created_at: DateTime<Utc>,
        azimuth: f64,
        elevation: f64,
    ) -> Result<Self> {
        let observation = Self {
            image_id,
            heliostat_id,
            created_at,
            azimuth,
            elevation,
        };

        observation.validate()?;
        Ok(observation)
    }

    /// Validate observation data for consistency and valid ranges
    pub fn validate(&self) -> Result<()> {
        if self.heliostat_id.trim().is_empty() {
            return Err(Error::data_validation(format!(
                "Observation {} has an empty heliostat id",
                self.image_id
            )));
        }

        if !self.azimuth.is_finite() || !self.elevation.is_finite() {
            return Err(Error::data_validation(format!(
                "Observation {} has a non-finite sun position (azimuth {}, elevation {})",
                self.image_id, self.azimuth, self.elevation
            )));
        }

        // Elevation is a vertical angle and cannot leave this range
        if !(-90.0..=90.0).contains(&self.elevation) {
            return Err(Error::data_validation(format!(
                "Observation {} has invalid elevation {}: must be between -90 and 90 degrees",
                self.image_id, self.elevation
            )));
        }

        Ok(())
    }
}

/// Derive sun azimuth and elevation angles (degrees) from an east/north/up
/// sun-position vector
///
/// Azimuth is measured from the negated north axis so that solar noon at the
/// site maps to an azimuth near zero.
pub fn sun_vector_to_angles(east: f64, north: f64, up: f64) -> (f64, f64) {
    let azimuth = east.atan2(-north).to_degrees();
    let elevation = up.atan2((east * east + north * north).sqrt()).to_degrees();
    (azimuth, elevation)
}

// =============================================================================
// Split Vocabulary
// =============================================================================

/// Benchmark split label assigned to one observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitLabel {
    Train,
    Test,
    Validation,
}

impl SplitLabel {
    /// Get the label value as it appears in the output table
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitLabel::Train => crate::constants::split_labels::TRAIN,
            SplitLabel::Test => crate::constants::split_labels::TEST,
            SplitLabel::Validation => crate::constants::split_labels::VALIDATION,
        }
    }
}

impl fmt::Display for SplitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of supported split strategies
///
/// Each variant dispatches to one pure partition function; there is no open
/// registration mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SplitType {
    /// Head/tail of the azimuth-sorted group: extreme sun angles bracket training
    Azimuth,
    /// Training near the winter solstice, validation near the summer solstice
    Solstice,
    /// Most isolated points in (azimuth, elevation) space go to validation
    NearestNeighbor,
}

impl SplitType {
    /// Get the strategy name as used in CLI arguments and output file names
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitType::Azimuth => "azimuth",
            SplitType::Solstice => "solstice",
            SplitType::NearestNeighbor => "nearest-neighbor",
        }
    }
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "azimuth" => Ok(SplitType::Azimuth),
            "solstice" => Ok(SplitType::Solstice),
            "nearest-neighbor" => Ok(SplitType::NearestNeighbor),
            other => Err(Error::unknown_split_type(other)),
        }
    }
}

/// Solstice season used to anchor the solstice distance computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    /// Month of this season's solstice anchor date
    pub fn solstice_month(&self) -> u32 {
        match self {
            Season::Summer => crate::constants::SUMMER_SOLSTICE_MONTH,
            Season::Winter => crate::constants::WINTER_SOLSTICE_MONTH,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Summer => f.write_str("summer"),
            Season::Winter => f.write_str("winter"),
        }
    }
}

impl FromStr for Season {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "summer" => Ok(Season::Summer),
            "winter" => Ok(Season::Winter),
            other => Err(Error::unknown_season(other)),
        }
    }
}
