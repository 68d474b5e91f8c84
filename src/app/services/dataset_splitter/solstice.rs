//! Time distance to the nearest solstice anchor
//!
//! The solstice strategy stratifies observations by how close they were
//! captured to the seasonal extremes of the sun's yearly path. Both anchors
//! are fixed calendar dates at noon (June 21 and December 21); astronomical
//! solstice drift of a few hours is irrelevant at the day-scale granularity
//! of calibration campaigns.

use crate::app::models::Season;
use crate::constants::{SOLSTICE_DAY_OF_MONTH, SOLSTICE_HOUR};
use crate::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// The solstice anchor instant of a given year and season
pub fn solstice_anchor(year: i32, season: Season) -> Result<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, season.solstice_month(), SOLSTICE_DAY_OF_MONTH)
        .and_then(|date| date.and_hms_opt(SOLSTICE_HOUR, 0, 0))
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
        .ok_or_else(|| {
            Error::data_validation(format!(
                "Cannot construct the {} solstice anchor for year {}",
                season, year
            ))
        })
}

/// Absolute time distance in seconds from a timestamp to the nearest
/// occurrence of the given season's solstice
///
/// The previous, current, and next year's anchors are all evaluated so that
/// timestamps shortly after New Year measure against the December just past,
/// not the December eleven months ahead.
pub fn nearest_solstice_distance(timestamp: DateTime<Utc>, season: Season) -> Result<i64> {
    let year = timestamp.year();
    let mut nearest = i64::MAX;

    for candidate_year in [year - 1, year, year + 1] {
        let anchor = solstice_anchor(candidate_year, season)?;
        let distance = (timestamp - anchor).num_seconds().abs();
        nearest = nearest.min(distance);
    }

    Ok(nearest)
}
