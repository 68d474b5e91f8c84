//! Splitting statistics

use serde::Serialize;

/// Statistics for one splitting run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitStats {
    /// Total number of input observations
    pub total_observations: usize,
    /// Number of heliostat groups in the input
    pub heliostats_total: usize,
    /// Number of heliostats that produced a published split
    pub heliostats_split: usize,
    /// Number of heliostats dropped by the minimum-count pre-filter
    pub heliostats_dropped: usize,
    /// Number of heliostats excluded by the post-labeling quota check
    pub heliostats_invalidated: usize,
    /// Number of rows labeled train
    pub train_rows: usize,
    /// Number of rows labeled test
    pub test_rows: usize,
    /// Number of rows labeled validation
    pub validation_rows: usize,
}

impl SplitStats {
    /// Create new empty splitting statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of labeled output rows
    pub fn labeled_rows(&self) -> usize {
        self.train_rows + self.test_rows + self.validation_rows
    }

    /// Number of input observations that did not make it into the output
    pub fn excluded_rows(&self) -> usize {
        self.total_observations.saturating_sub(self.labeled_rows())
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Split {} of {} heliostats ({} below minimum, {} under quota) | \
             {} rows labeled: {} train, {} test, {} validation",
            self.heliostats_split,
            self.heliostats_total,
            self.heliostats_dropped,
            self.heliostats_invalidated,
            self.labeled_rows(),
            self.train_rows,
            self.test_rows,
            self.validation_rows
        )
    }
}
