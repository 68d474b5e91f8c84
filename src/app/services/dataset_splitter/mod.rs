//! Dataset splitting engine
//!
//! This module partitions per-image calibration observations into
//! train/test/validation benchmark splits, independently per heliostat.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`splitter`] - Main DatasetSplitter struct and pipeline orchestration
//! - [`strategies`] - Pure per-group partition functions, one per split type
//! - [`solstice`] - Time distance to the nearest solstice anchor
//! - [`eligibility`] - Minimum-count pre-filter and quota enforcement
//! - [`stats`] - Splitting statistics
//!
//! # Pipeline
//!
//! For each heliostat group the splitter:
//!
//! 1. Drops the group when it has fewer than `training_size + 2 *
//!    validation_size` observations (the test set must be at least as large
//!    as the validation set).
//! 2. Applies the requested strategy, a pure function of the group and the
//!    two size parameters.
//! 3. Re-counts the labels and excludes the group entirely when ties or
//!    overlapping selections left the train or test set under quota.
//!
//! Groups share no state, so the per-group computation is order-independent
//! and the aggregated output is deterministic.

pub mod eligibility;
pub mod solstice;
pub mod splitter;
pub mod stats;
pub mod strategies;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use splitter::{DatasetSplitter, LabeledObservation, SplitResult};
pub use stats::SplitStats;

// Re-export utility functions that might be useful externally
pub use eligibility::{LabelCounts, count_labels, meets_minimum_size};
pub use solstice::nearest_solstice_distance;
