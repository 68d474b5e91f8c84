//! Application constants for the heliostat splitter
//!
//! This module contains column names, split label values, solstice anchor
//! dates, and file naming helpers used throughout the application.

// =============================================================================
// Column Name Constants
// =============================================================================

/// Column names in the calibration metadata and split output tables
pub mod columns {
    /// Unique image identifier (primary key)
    pub const ID: &str = "Id";

    /// Identifier of the heliostat that produced the image
    pub const HELIOSTAT_ID: &str = "HeliostatId";

    /// Capture timestamp of the image
    pub const CREATED_AT: &str = "CreatedAt";

    /// Sun azimuth angle in degrees
    pub const AZIMUTH: &str = "Azimuth";

    /// Sun elevation angle in degrees
    pub const ELEVATION: &str = "Elevation";

    /// East component of the 3D sun-position vector
    pub const SUN_POS_E: &str = "SunPosE";

    /// North component of the 3D sun-position vector
    pub const SUN_POS_N: &str = "SunPosN";

    /// Up component of the 3D sun-position vector
    pub const SUN_POS_U: &str = "SunPosU";

    /// Assigned benchmark split label
    pub const SPLIT: &str = "Split";
}

// =============================================================================
// Split Constants
// =============================================================================

/// Accepted split type names, as used in CLI arguments and output file names
pub const SPLIT_TYPE_NAMES: &[&str] = &["azimuth", "solstice", "nearest-neighbor"];

/// Split label values as they appear in the output table
pub mod split_labels {
    pub const TRAIN: &str = "train";
    pub const TEST: &str = "test";
    pub const VALIDATION: &str = "validation";
}

// =============================================================================
// Solstice Anchor Constants
// =============================================================================

/// Day of month of both solstice anchors
pub const SOLSTICE_DAY_OF_MONTH: u32 = 21;

/// Month of the summer solstice anchor (June)
pub const SUMMER_SOLSTICE_MONTH: u32 = 6;

/// Month of the winter solstice anchor (December)
pub const WINTER_SOLSTICE_MONTH: u32 = 12;

/// Hour of day of both solstice anchors (noon)
pub const SOLSTICE_HOUR: u32 = 12;

// =============================================================================
// Data Format Constants
// =============================================================================

/// Datetime format used in the metadata and split output tables
pub const METADATA_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Helper Functions
// =============================================================================

/// Get the output file name for a split, derived deterministically from its
/// parameters so that repeated invocations overwrite the same file
pub fn benchmark_split_filename(
    split_type: &str,
    training_size: usize,
    validation_size: usize,
) -> String {
    format!("benchmark_split-{split_type}_train-{training_size}_validation-{validation_size}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_split_filename() {
        assert_eq!(
            benchmark_split_filename("azimuth", 10, 30),
            "benchmark_split-azimuth_train-10_validation-30.csv"
        );
        assert_eq!(
            benchmark_split_filename("solstice", 100, 30),
            "benchmark_split-solstice_train-100_validation-30.csv"
        );
    }

    #[test]
    fn test_split_type_names_cover_labels() {
        assert_eq!(SPLIT_TYPE_NAMES.len(), 3);
        assert!(SPLIT_TYPE_NAMES.contains(&"azimuth"));
        assert!(SPLIT_TYPE_NAMES.contains(&"solstice"));
        assert!(SPLIT_TYPE_NAMES.contains(&"nearest-neighbor"));
    }
}
