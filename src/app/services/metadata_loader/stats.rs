//! Loading statistics for metadata ingestion

use serde::Serialize;

/// Statistics for one metadata loading pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Number of observation rows loaded
    pub rows_loaded: usize,
    /// Number of rows whose angles were derived from a sun-position vector
    pub derived_angles: usize,
    /// Number of distinct heliostats in the table
    pub heliostat_count: usize,
}

impl LoadStats {
    /// Create new empty loading statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} observations across {} heliostats ({} with derived angles)",
            self.rows_loaded, self.heliostat_count, self.derived_angles
        )
    }
}
