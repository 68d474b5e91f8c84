//! Typed field parsing for calibration metadata records
//!
//! This module provides helper functions for parsing the individual fields of
//! a CSV record with proper error context (field name and offending value).

use crate::constants::METADATA_DATETIME_FORMAT;
use crate::{Error, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use csv::StringRecord;

/// Get a required field from a CSV record by mapped column index
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    index: usize,
    field_name: &str,
) -> Result<&'a str> {
    let value = record.get(index).ok_or_else(|| {
        Error::data_validation(format!(
            "Record is missing a value for column '{}' (index {})",
            field_name, index
        ))
    })?;

    if value.is_empty() {
        return Err(Error::data_validation(format!(
            "Record has an empty value for required column '{}'",
            field_name
        )));
    }

    Ok(value)
}

/// Parse a required i64 field from a CSV record
pub fn parse_required_i64(record: &StringRecord, index: usize, field_name: &str) -> Result<i64> {
    let value_str = get_required_field(record, index, field_name)?;

    value_str.parse::<i64>().map_err(|e| {
        Error::data_validation(format!(
            "Invalid integer format for {}: '{}' ({})",
            field_name, value_str, e
        ))
    })
}

/// Parse a required f64 field from a CSV record
pub fn parse_required_f64(record: &StringRecord, index: usize, field_name: &str) -> Result<f64> {
    let value_str = get_required_field(record, index, field_name)?;

    value_str.parse::<f64>().map_err(|e| {
        Error::data_validation(format!(
            "Invalid floating-point format for {}: '{}' ({})",
            field_name, value_str, e
        ))
    })
}

/// Parse a required string field from a CSV record
pub fn parse_required_string(
    record: &StringRecord,
    index: usize,
    field_name: &str,
) -> Result<String> {
    let value_str = get_required_field(record, index, field_name)?;
    Ok(value_str.to_string())
}

/// Parse a required datetime field from a CSV record
///
/// Accepts the standard naive metadata format (interpreted as UTC), its
/// `T`-separated variant, and RFC 3339 timestamps with an explicit offset.
pub fn parse_required_datetime(
    record: &StringRecord,
    index: usize,
    field_name: &str,
) -> Result<DateTime<Utc>> {
    let value_str = get_required_field(record, index, field_name)?;

    if let Ok(naive) = NaiveDateTime::parse_from_str(value_str, METADATA_DATETIME_FORMAT) {
        Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
    } else if let Ok(naive) = NaiveDateTime::parse_from_str(value_str, "%Y-%m-%dT%H:%M:%S") {
        Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
    } else if let Ok(dt) = DateTime::parse_from_rfc3339(value_str) {
        Ok(dt.with_timezone(&Utc))
    } else if let Ok(dt) = DateTime::parse_from_str(value_str, "%Y-%m-%d %H:%M:%S %z") {
        Ok(dt.with_timezone(&Utc))
    } else {
        Err(Error::datetime_parsing(format!(
            "Invalid datetime format for {}: '{}' (expected 'YYYY-MM-DD HH:MM:SS' or an RFC 3339 timestamp)",
            field_name, value_str
        )))
    }
}
