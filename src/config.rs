//! Split request configuration and validation.
//!
//! Provides the parameter object carried through a single splitting run:
//! the strategy, the per-heliostat training quota, and the per-heliostat
//! validation quota (which doubles as the minimum test-set size).

use crate::app::models::SplitType;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters of one splitting run
///
/// `validation_size` is used twice by design: as the validation quota and as
/// the floor below which the leftover test set is considered insufficient, so
/// that the test set is never smaller than the validation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRequest {
    /// Strategy used to partition each heliostat group
    pub split_type: SplitType,

    /// Minimum number of observations allocated to training per heliostat
    pub training_size: usize,

    /// Minimum number of observations allocated to validation per heliostat,
    /// and the minimum size of the remaining test set
    pub validation_size: usize,
}

impl SplitRequest {
    /// Create a new split request with validation
    pub fn new(split_type: SplitType, training_size: usize, validation_size: usize) -> Result<Self> {
        if training_size == 0 {
            return Err(Error::configuration(
                "Training size must be a positive integer".to_string(),
            ));
        }

        if validation_size == 0 {
            return Err(Error::configuration(
                "Validation size must be a positive integer".to_string(),
            ));
        }

        Ok(Self {
            split_type,
            training_size,
            validation_size,
        })
    }

    /// Minimum number of observations a heliostat group needs to be eligible:
    /// training quota, validation quota, and an equally-sized test floor
    pub fn minimum_group_size(&self) -> usize {
        self.training_size + 2 * self.validation_size
    }

    /// Deterministic output file name for this request
    pub fn output_filename(&self) -> String {
        crate::constants::benchmark_split_filename(
            self.split_type.as_str(),
            self.training_size,
            self.validation_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_request_validation() {
        assert!(SplitRequest::new(SplitType::Azimuth, 3, 3).is_ok());
        assert!(SplitRequest::new(SplitType::Azimuth, 0, 3).is_err());
        assert!(SplitRequest::new(SplitType::Solstice, 3, 0).is_err());
    }

    #[test]
    fn test_minimum_group_size() {
        let request = SplitRequest::new(SplitType::Azimuth, 3, 3).unwrap();
        assert_eq!(request.minimum_group_size(), 9);

        let request = SplitRequest::new(SplitType::Solstice, 10, 30).unwrap();
        assert_eq!(request.minimum_group_size(), 70);
    }

    #[test]
    fn test_output_filename() {
        let request = SplitRequest::new(SplitType::NearestNeighbor, 10, 30).unwrap();
        assert_eq!(
            request.output_filename(),
            "benchmark_split-nearest-neighbor_train-10_validation-30.csv"
        );
    }
}
