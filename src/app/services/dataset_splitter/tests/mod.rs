//! Tests for the dataset splitting engine

pub mod eligibility_tests;

use crate::app::models::Observation;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Create a test observation from a naive timestamp string
pub fn observation(
    image_id: i64,
    heliostat_id: &str,
    timestamp: &str,
    azimuth: f64,
    elevation: f64,
) -> Observation {
    let naive = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S")
        .expect("test timestamp must parse");
    Observation::new(
        image_id,
        heliostat_id.to_string(),
        DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc),
        azimuth,
        elevation,
    )
    .expect("test observation must validate")
}

/// A real ten-observation calibration campaign of one heliostat, spanning two
/// winters and one summer
///
/// With training size 3 and validation size 3 the expected assignments are
/// known for both the azimuth strategy (train {77399, 203321, 62302},
/// validation {246253, 212358, 225295}) and the solstice strategy (train
/// {62302, 77399, 254084}, validation {222963, 225295, 212358}).
pub fn reference_group() -> Vec<Observation> {
    vec![
        observation(222963, "AA23", "2023-06-16 09:48:04", -6.400352313789926, 62.3279159365105),
        observation(225295, "AA23", "2023-06-27 05:39:56", 81.83915757811221, 37.04787945593409),
        observation(212358, "AA23", "2023-05-31 06:35:41", 66.41160685040921, 45.213616680026576),
        observation(203321, "AA23", "2023-05-13 12:00:13", -56.13534862708945, 46.12541005936384),
        observation(199617, "AA23", "2023-04-21 10:37:26", -24.27562868172698, 48.83409042343407),
        observation(246253, "AA23", "2023-09-07 09:30:42", 0.6579483837589489, 45.16393436924701),
        observation(253429, "AA23", "2023-09-26 10:16:52", -15.977388041420308, 36.73122895223354),
        observation(254084, "AA23", "2023-10-06 09:57:10", -10.322274676749569, 33.49675640446808),
        observation(77399, "AA23", "2022-03-05 14:29:04", -58.76801724645433, 15.887782919284154),
        observation(62302, "AA23", "2022-01-18 13:44:45", -42.01706826036833, 8.527271132686408),
    ]
}
