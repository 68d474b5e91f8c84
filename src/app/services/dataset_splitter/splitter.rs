//! Main dataset splitter implementation and pipeline orchestration
//!
//! This module contains the DatasetSplitter struct and coordinates the
//! per-heliostat splitting pipeline: grouping, the minimum-count pre-filter,
//! strategy dispatch, the post-labeling quota check, and aggregation into a
//! deterministic output table.

use super::eligibility::{count_labels, meets_minimum_size};
use super::stats::SplitStats;
use super::strategies::partition_group;
use crate::app::models::{Observation, SplitLabel, SplitType};
use crate::app::services::metadata_loader::load_metadata;
use crate::app::services::split_writer::write_split_csv;
use crate::config::SplitRequest;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One labeled output row: an observation and its assigned split
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledObservation {
    pub observation: Observation,
    pub label: SplitLabel,
}

/// Result of one splitting run
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// The request that produced this result
    pub request: SplitRequest,
    /// Labeled rows, ordered by heliostat id and the strategy's canonical
    /// sort order within each heliostat
    pub assignments: Vec<LabeledObservation>,
    /// Splitting statistics
    pub stats: SplitStats,
}

/// Dataset splitter for heliostat calibration metadata
///
/// The splitter owns the loaded metadata table and the configured output
/// directory. The output directory is used only when persisting a result;
/// the split computation itself is pure and in-memory.
///
/// # Example
///
/// ```rust,no_run
/// use heliostat_splitter::{DatasetSplitter, SplitType};
/// use std::path::Path;
///
/// # fn example() -> heliostat_splitter::Result<()> {
/// let splitter =
///     DatasetSplitter::from_metadata_file(Path::new("calibration_metadata.csv"), "splits")?;
/// let result = splitter.get_dataset_splits(SplitType::Azimuth, 10, 30, false)?;
/// let path = splitter.write_splits(&result, false)?;
/// println!("Wrote {} rows to {}", result.assignments.len(), path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DatasetSplitter {
    /// Loaded calibration observations
    observations: Vec<Observation>,
    /// Directory split files are written into
    output_dir: PathBuf,
}

impl DatasetSplitter {
    /// Create a splitter from already-loaded observations
    ///
    /// The output directory is created if absent (idempotent).
    pub fn new(observations: Vec<Observation>, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", output_dir.display()),
                e,
            )
        })?;

        Ok(Self {
            observations,
            output_dir,
        })
    }

    /// Create a splitter by loading a calibration metadata file
    ///
    /// # Errors
    /// * `Error::FileNotFound` if the metadata file does not exist
    /// * `Error::MissingColumns` if required columns are absent
    pub fn from_metadata_file(
        input_file: &Path,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let loaded = load_metadata(input_file)?;
        Self::new(loaded.observations, output_dir)
    }

    /// Get the loaded observations
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Get the configured output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Compute the dataset splits for the requested strategy and sizes
    ///
    /// Every heliostat group is processed independently:
    ///
    /// 1. Groups with fewer than `training_size + 2 * validation_size`
    ///    observations are dropped (counted, not an error).
    /// 2. The strategy labels the remaining groups.
    /// 3. Groups whose train or test set ended up under quota are excluded
    ///    entirely, so a published heliostat is never partially labeled.
    ///
    /// # Errors
    /// * `Error::Configuration` for non-positive sizes
    /// * `Error::DataInsufficiency` when no heliostat survives
    /// * `Error::InvariantViolation` if the final verification ever fails
    pub fn get_dataset_splits(
        &self,
        split_type: SplitType,
        training_size: usize,
        validation_size: usize,
        show_progress: bool,
    ) -> Result<SplitResult> {
        let request = SplitRequest::new(split_type, training_size, validation_size)?;

        info!(
            "Computing '{}' splits (training size {}, validation size {}) for {} observations",
            request.split_type, request.training_size, request.validation_size,
            self.observations.len()
        );

        // BTreeMap fixes the heliostat iteration order
        let mut groups: BTreeMap<String, Vec<Observation>> = BTreeMap::new();
        for observation in &self.observations {
            groups
                .entry(observation.heliostat_id.clone())
                .or_default()
                .push(observation.clone());
        }

        let mut stats = SplitStats {
            total_observations: self.observations.len(),
            heliostats_total: groups.len(),
            ..SplitStats::new()
        };

        let progress_bar = if show_progress {
            Some(Self::create_split_progress_bar(groups.len() as u64))
        } else {
            None
        };

        let mut assignments: Vec<LabeledObservation> = Vec::new();

        for (heliostat_id, group) in groups {
            if let Some(pb) = &progress_bar {
                pb.set_message(format!("Splitting heliostat {}", heliostat_id));
            }

            if !meets_minimum_size(group.len(), request.training_size, request.validation_size) {
                debug!(
                    "Dropping heliostat {}: {} observations, need at least {}",
                    heliostat_id,
                    group.len(),
                    request.minimum_group_size()
                );
                stats.heliostats_dropped += 1;
                if let Some(pb) = &progress_bar {
                    pb.inc(1);
                }
                continue;
            }

            let labeled = partition_group(
                request.split_type,
                group,
                request.training_size,
                request.validation_size,
            )?;

            let counts = count_labels(&labeled);
            if !counts.satisfies_quotas(request.training_size, request.validation_size) {
                warn!(
                    "Excluding heliostat {}: split left {} train and {} test rows, \
                     need {} and {}",
                    heliostat_id,
                    counts.train,
                    counts.test,
                    request.training_size,
                    request.validation_size
                );
                stats.heliostats_invalidated += 1;
                if let Some(pb) = &progress_bar {
                    pb.inc(1);
                }
                continue;
            }

            stats.heliostats_split += 1;
            stats.train_rows += counts.train;
            stats.test_rows += counts.test;
            stats.validation_rows += counts.validation;
            assignments.extend(
                labeled
                    .into_iter()
                    .map(|(observation, label)| LabeledObservation { observation, label }),
            );

            if let Some(pb) = &progress_bar {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_with_message(format!("Split {} heliostats", stats.heliostats_split));
        }

        if assignments.is_empty() {
            return Err(Error::data_insufficiency(format!(
                "No heliostat has the {} observations required for a '{}' split with \
                 training size {} and validation size {}",
                request.minimum_group_size(),
                request.split_type,
                request.training_size,
                request.validation_size
            )));
        }

        verify_coverage_guarantee(&assignments, &request)?;

        info!("{}", stats.summary());

        Ok(SplitResult {
            request,
            assignments,
            stats,
        })
    }

    /// Persist a split result as a CSV file in the output directory
    ///
    /// `minimal` drops the helper columns (azimuth, elevation, timestamp)
    /// from the output, leaving the pure id-to-split assignment table.
    pub fn write_splits(&self, result: &SplitResult, minimal: bool) -> Result<PathBuf> {
        write_split_csv(result, &self.output_dir, minimal)
    }

    /// Create a progress bar for the per-heliostat split loop
    fn create_split_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }
}

/// Verify the published-split guarantee over the aggregated assignments
///
/// The quota check already excluded every violating heliostat, so a failure
/// here is a bug in the pipeline itself; it must surface as an error rather
/// than as a silently unbalanced benchmark.
fn verify_coverage_guarantee(
    assignments: &[LabeledObservation],
    request: &SplitRequest,
) -> Result<()> {
    let mut counts: BTreeMap<&str, super::eligibility::LabelCounts> = BTreeMap::new();
    for assignment in assignments {
        let entry = counts
            .entry(assignment.observation.heliostat_id.as_str())
            .or_default();
        match assignment.label {
            SplitLabel::Train => entry.train += 1,
            SplitLabel::Test => entry.test += 1,
            SplitLabel::Validation => entry.validation += 1,
        }
    }

    for (heliostat_id, label_counts) in counts {
        if !label_counts.meets_guarantee(request.training_size, request.validation_size) {
            return Err(Error::invariant_violation(format!(
                "Heliostat {} was published with {} train, {} test, {} validation rows, \
                 violating the coverage guarantee for training size {} and validation size {}",
                heliostat_id,
                label_counts.train,
                label_counts.test,
                label_counts.validation,
                request.training_size,
                request.validation_size
            )));
        }
    }

    Ok(())
}
