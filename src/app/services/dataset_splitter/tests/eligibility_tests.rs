//! Tests for eligibility filtering and quota counting

use super::observation;
use crate::app::models::SplitLabel;
use crate::app::services::dataset_splitter::eligibility::{
    LabelCounts, count_labels, meets_minimum_size,
};

#[test]
fn test_minimum_size_boundary() {
    // Threshold is training + validation + an equally-sized test floor
    assert!(meets_minimum_size(9, 3, 3));
    assert!(!meets_minimum_size(8, 3, 3));

    assert!(meets_minimum_size(70, 10, 30));
    assert!(!meets_minimum_size(69, 10, 30));
}

#[test]
fn test_count_labels() {
    let labeled = vec![
        (observation(1, "AA23", "2023-06-01 10:00:00", 1.0, 45.0), SplitLabel::Train),
        (observation(2, "AA23", "2023-06-02 10:00:00", 2.0, 45.0), SplitLabel::Train),
        (observation(3, "AA23", "2023-06-03 10:00:00", 3.0, 45.0), SplitLabel::Test),
        (observation(4, "AA23", "2023-06-04 10:00:00", 4.0, 45.0), SplitLabel::Validation),
    ];

    let counts = count_labels(&labeled);
    assert_eq!(counts.train, 2);
    assert_eq!(counts.test, 1);
    assert_eq!(counts.validation, 1);
}

#[test]
fn test_quota_checks() {
    let counts = LabelCounts {
        train: 3,
        test: 3,
        validation: 3,
    };
    assert!(counts.satisfies_quotas(3, 3));
    assert!(counts.meets_guarantee(3, 3));
    assert!(!counts.satisfies_quotas(4, 3));
    assert!(!counts.satisfies_quotas(3, 4));

    // The quota check ignores the validation count, the full guarantee does not
    let no_validation = LabelCounts {
        train: 3,
        test: 3,
        validation: 0,
    };
    assert!(no_validation.satisfies_quotas(3, 3));
    assert!(!no_validation.meets_guarantee(3, 3));
}
