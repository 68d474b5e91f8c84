//! Per-group partition strategies
//!
//! Each strategy is a pure, stateless function from one heliostat group and
//! the two size parameters to a labeled row sequence. The returned order is
//! the strategy's canonical sort order, which fixes the row order of the
//! aggregated output table.
//!
//! The strategies themselves never fail on undersized input: they label
//! whatever they are given, head/tail windows may overlap, and the
//! later-applied validation assignment wins on overlap. Restoring the public
//! coverage guarantee is the job of the quota check in the splitter pipeline.

use super::solstice::nearest_solstice_distance;
use crate::Result;
use crate::app::models::{Observation, Season, SplitLabel, SplitType};

/// Partition one heliostat group with the requested strategy
pub fn partition_group(
    split_type: SplitType,
    group: Vec<Observation>,
    training_size: usize,
    validation_size: usize,
) -> Result<Vec<(Observation, SplitLabel)>> {
    match split_type {
        SplitType::Azimuth => Ok(azimuth_split(group, training_size, validation_size)),
        SplitType::Solstice => solstice_split(group, training_size, validation_size),
        SplitType::NearestNeighbor => Ok(nearest_neighbor_split(
            group,
            training_size,
            validation_size,
        )),
    }
}

/// Azimuth strategy: sort by `(azimuth, created_at)` ascending; the head of
/// the sort trains, the tail validates, the middle tests
///
/// The extreme sun angles bracket the training set so that a model trained on
/// them interpolates rather than extrapolates over the test set.
pub fn azimuth_split(
    mut group: Vec<Observation>,
    training_size: usize,
    validation_size: usize,
) -> Vec<(Observation, SplitLabel)> {
    group.sort_by(|a, b| {
        a.azimuth
            .total_cmp(&b.azimuth)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.image_id.cmp(&b.image_id))
    });

    let n = group.len();
    let mut labels = vec![SplitLabel::Test; n];
    for label in labels.iter_mut().take(training_size.min(n)) {
        *label = SplitLabel::Train;
    }
    // Applied after the training head: on overlap the validation tail wins
    for label in labels.iter_mut().skip(n.saturating_sub(validation_size)) {
        *label = SplitLabel::Validation;
    }

    group.into_iter().zip(labels).collect()
}

/// Solstice strategy: training data is collected near the winter solstice,
/// validation data near the summer solstice, everything else tests
///
/// Train and validation selection use two independent sorts of the same
/// group. A row qualifying for both top-N sets ends up in validation because
/// the validation assignment is applied second; this is the documented rule,
/// not an accident of ordering.
pub fn solstice_split(
    group: Vec<Observation>,
    training_size: usize,
    validation_size: usize,
) -> Result<Vec<(Observation, SplitLabel)>> {
    let mut rows = Vec::with_capacity(group.len());
    for observation in group {
        let winter = nearest_solstice_distance(observation.created_at, Season::Winter)?;
        let summer = nearest_solstice_distance(observation.created_at, Season::Summer)?;
        rows.push((observation, winter, summer));
    }

    let n = rows.len();
    let mut labels = vec![SplitLabel::Test; n];

    let mut winter_order: Vec<usize> = (0..n).collect();
    winter_order.sort_by(|&a, &b| {
        rows[a]
            .1
            .cmp(&rows[b].1)
            .then_with(|| rows[a].0.created_at.cmp(&rows[b].0.created_at))
            .then_with(|| rows[a].0.image_id.cmp(&rows[b].0.image_id))
    });
    for &index in winter_order.iter().take(training_size) {
        labels[index] = SplitLabel::Train;
    }

    let mut summer_order: Vec<usize> = (0..n).collect();
    summer_order.sort_by(|&a, &b| {
        rows[a]
            .2
            .cmp(&rows[b].2)
            .then_with(|| rows[a].0.created_at.cmp(&rows[b].0.created_at))
            .then_with(|| rows[a].0.image_id.cmp(&rows[b].0.image_id))
    });
    for &index in summer_order.iter().take(validation_size) {
        labels[index] = SplitLabel::Validation;
    }

    // Canonical order: ascending distance to the summer solstice
    let mut labeled: Vec<((Observation, i64, i64), SplitLabel)> =
        rows.into_iter().zip(labels).collect();
    labeled.sort_by(|((obs_a, _, summer_a), _), ((obs_b, _, summer_b), _)| {
        summer_a
            .cmp(summer_b)
            .then_with(|| obs_a.created_at.cmp(&obs_b.created_at))
            .then_with(|| obs_a.image_id.cmp(&obs_b.image_id))
    });

    Ok(labeled
        .into_iter()
        .map(|((observation, _, _), label)| (observation, label))
        .collect())
}

/// Nearest-neighbor strategy: the most isolated points in
/// (azimuth, elevation) space validate, the next block trains, the rest test
///
/// Isolation is each observation's Euclidean distance to its nearest other
/// observation. Self-pairs are excluded by image id, not by value: two
/// observations with identical angles but different ids form a valid
/// zero-distance pair.
pub fn nearest_neighbor_split(
    group: Vec<Observation>,
    training_size: usize,
    validation_size: usize,
) -> Vec<(Observation, SplitLabel)> {
    let n = group.len();

    let mut min_distances = vec![f64::INFINITY; n];
    for i in 0..n {
        for j in 0..n {
            if group[i].image_id == group[j].image_id {
                continue;
            }
            let d_azimuth = group[i].azimuth - group[j].azimuth;
            let d_elevation = group[i].elevation - group[j].elevation;
            let distance = (d_azimuth * d_azimuth + d_elevation * d_elevation).sqrt();
            if distance < min_distances[i] {
                min_distances[i] = distance;
            }
        }
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        min_distances[b]
            .total_cmp(&min_distances[a])
            .then_with(|| group[a].created_at.cmp(&group[b].created_at))
            .then_with(|| group[a].image_id.cmp(&group[b].image_id))
    });

    let mut slots: Vec<Option<Observation>> = group.into_iter().map(Some).collect();
    let mut labeled = Vec::with_capacity(n);
    for (rank, &index) in order.iter().enumerate() {
        let label = if rank < validation_size {
            SplitLabel::Validation
        } else if rank < validation_size + training_size {
            SplitLabel::Train
        } else {
            SplitLabel::Test
        };
        if let Some(observation) = slots[index].take() {
            labeled.push((observation, label));
        }
    }

    labeled
}
