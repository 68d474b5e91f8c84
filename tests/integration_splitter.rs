//! Integration tests for the full splitting workflow
//!
//! These tests exercise the complete pipeline from a metadata CSV on disk
//! through split computation to the written split file, the contract that
//! downstream benchmark consumers depend on.

use heliostat_splitter::app::services::metadata_loader::load_metadata;
use heliostat_splitter::{DatasetSplitter, Error, SplitType};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A calibration campaign of one heliostat with ten observations spanning
/// two winters and one summer, plus helpers to shrink it
const METADATA_HEADER: &str = "Id,HeliostatId,CreatedAt,Azimuth,Elevation";

const AA23_ROWS: &[&str] = &[
    "222963,AA23,2023-06-16 09:48:04,-6.400352313789926,62.3279159365105",
    "225295,AA23,2023-06-27 05:39:56,81.83915757811221,37.04787945593409",
    "212358,AA23,2023-05-31 06:35:41,66.41160685040921,45.213616680026576",
    "203321,AA23,2023-05-13 12:00:13,-56.13534862708945,46.12541005936384",
    "199617,AA23,2023-04-21 10:37:26,-24.27562868172698,48.83409042343407",
    "246253,AA23,2023-09-07 09:30:42,0.6579483837589489,45.16393436924701",
    "253429,AA23,2023-09-26 10:16:52,-15.977388041420308,36.73122895223354",
    "254084,AA23,2023-10-06 09:57:10,-10.322274676749569,33.49675640446808",
    "77399,AA23,2022-03-05 14:29:04,-58.76801724645433,15.887782919284154",
    "62302,AA23,2022-01-18 13:44:45,-42.01706826036833,8.527271132686408",
];

fn write_metadata(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("calibration_metadata.csv");
    let mut content = String::from(METADATA_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    std::fs::write(&path, content).expect("failed to write metadata fixture");
    path
}

fn count_labels(content: &str, label: &str) -> usize {
    content
        .lines()
        .skip(1)
        .filter(|line| line.ends_with(&format!(",{}", label)))
        .count()
}

#[test]
fn test_end_to_end_azimuth_split() {
    let dir = TempDir::new().unwrap();
    let metadata = write_metadata(dir.path(), AA23_ROWS);
    let output_dir = dir.path().join("splits");

    let splitter = DatasetSplitter::from_metadata_file(&metadata, &output_dir).unwrap();
    let result = splitter
        .get_dataset_splits(SplitType::Azimuth, 3, 3, false)
        .unwrap();
    let output_file = splitter.write_splits(&result, true).unwrap();

    assert_eq!(
        output_file.file_name().unwrap().to_string_lossy(),
        "benchmark_split-azimuth_train-3_validation-3.csv"
    );

    let content = std::fs::read_to_string(&output_file).unwrap();
    assert_eq!(content.lines().next().unwrap(), "Id,HeliostatId,Split");
    assert_eq!(count_labels(&content, "train"), 3);
    assert_eq!(count_labels(&content, "test"), 4);
    assert_eq!(count_labels(&content, "validation"), 3);

    // The extreme azimuth rows land where the strategy puts them
    assert!(content.contains("77399,AA23,train"));
    assert!(content.contains("225295,AA23,validation"));
}

#[test]
fn test_nine_observations_meet_the_threshold_exactly() {
    let dir = TempDir::new().unwrap();
    // Nine observations with training and validation size 3: the threshold
    // is 3 + 2 * 3 = 9, so the heliostat is retained with a 3/3/3 split
    let rows: Vec<&str> = AA23_ROWS.iter().copied().take(9).collect();
    let metadata = write_metadata(dir.path(), &rows);

    let splitter =
        DatasetSplitter::from_metadata_file(&metadata, dir.path().join("splits")).unwrap();
    let result = splitter
        .get_dataset_splits(SplitType::Azimuth, 3, 3, false)
        .unwrap();

    assert_eq!(result.stats.train_rows, 3);
    assert_eq!(result.stats.test_rows, 3);
    assert_eq!(result.stats.validation_rows, 3);
    assert_eq!(result.assignments.len(), 9);
}

#[test]
fn test_eight_observations_exclude_the_heliostat() {
    let dir = TempDir::new().unwrap();
    let rows: Vec<&str> = AA23_ROWS.iter().copied().take(8).collect();
    let metadata = write_metadata(dir.path(), &rows);

    let splitter =
        DatasetSplitter::from_metadata_file(&metadata, dir.path().join("splits")).unwrap();

    // The only heliostat is excluded, so there is nothing to publish
    let error = splitter
        .get_dataset_splits(SplitType::Azimuth, 3, 3, false)
        .unwrap_err();
    assert!(matches!(error, Error::DataInsufficiency { .. }));

    // No partial output was written
    assert_eq!(
        std::fs::read_dir(dir.path().join("splits")).unwrap().count(),
        0
    );
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let metadata = write_metadata(dir.path(), AA23_ROWS);

    let splitter =
        DatasetSplitter::from_metadata_file(&metadata, dir.path().join("splits")).unwrap();

    let first = splitter
        .get_dataset_splits(SplitType::Solstice, 3, 3, false)
        .unwrap();
    let first_path = splitter.write_splits(&first, false).unwrap();
    let first_bytes = std::fs::read(&first_path).unwrap();

    let second = splitter
        .get_dataset_splits(SplitType::Solstice, 3, 3, false)
        .unwrap();
    let second_path = splitter.write_splits(&second, false).unwrap();
    let second_bytes = std::fs::read(&second_path).unwrap();

    assert_eq!(first_path, second_path);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_solstice_split_matches_reference_assignments() {
    let dir = TempDir::new().unwrap();
    let metadata = write_metadata(dir.path(), AA23_ROWS);

    let splitter =
        DatasetSplitter::from_metadata_file(&metadata, dir.path().join("splits")).unwrap();
    let result = splitter
        .get_dataset_splits(SplitType::Solstice, 3, 3, false)
        .unwrap();
    let output_file = splitter.write_splits(&result, true).unwrap();
    let content = std::fs::read_to_string(&output_file).unwrap();

    // Deep-winter captures train, midsummer captures validate
    for line in [
        "62302,AA23,train",
        "77399,AA23,train",
        "254084,AA23,train",
        "222963,AA23,validation",
        "225295,AA23,validation",
        "212358,AA23,validation",
        "203321,AA23,test",
        "199617,AA23,test",
        "246253,AA23,test",
        "253429,AA23,test",
    ] {
        assert!(content.contains(line), "missing line: {line}");
    }
}

#[test]
fn test_missing_metadata_file() {
    let dir = TempDir::new().unwrap();
    let error = DatasetSplitter::from_metadata_file(
        Path::new("/nonexistent/calibration_metadata.csv"),
        dir.path().join("splits"),
    )
    .unwrap_err();

    assert!(matches!(error, Error::FileNotFound { .. }));
}

#[test]
fn test_invalid_split_type_fails_before_touching_data() {
    // The strategy vocabulary is closed: an unknown name never reaches the
    // splitter because parsing it already fails, naming the accepted set
    let error = "not_a_real_strategy".parse::<SplitType>().unwrap_err();
    assert!(matches!(error, Error::UnknownSplitType { .. }));

    let message = error.to_string();
    for accepted in ["azimuth", "solstice", "nearest-neighbor"] {
        assert!(message.contains(accepted));
    }
}

#[test]
fn test_sun_vector_metadata_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calibration_metadata.csv");

    // Twelve captures described only by their sun vector
    let mut content = String::from("Id,HeliostatId,CreatedAt,SunPosE,SunPosN,SunPosU\n");
    for i in 0..12 {
        content.push_str(&format!(
            "{},AA39,2023-{:02}-15 10:30:00,{},-1.0,{}\n",
            100 + i,
            i + 1,
            -0.6 + 0.1 * f64::from(i),
            0.4 + 0.05 * f64::from(i),
        ));
    }
    std::fs::write(&path, content).unwrap();

    let loaded = load_metadata(&path).unwrap();
    assert_eq!(loaded.stats.derived_angles, 12);

    let splitter = DatasetSplitter::new(loaded.observations, dir.path().join("splits")).unwrap();
    let result = splitter
        .get_dataset_splits(SplitType::NearestNeighbor, 3, 3, false)
        .unwrap();

    assert_eq!(result.stats.heliostats_split, 1);
    assert_eq!(result.assignments.len(), 12);
    assert_eq!(result.stats.validation_rows, 3);
    assert!(result.stats.train_rows >= 3);
}
