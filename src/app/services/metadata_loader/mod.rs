//! Calibration metadata loading
//!
//! This module reads the per-image calibration metadata table from CSV into
//! typed [`Observation`](crate::app::models::Observation) records. It handles
//! header/column mapping, typed field parsing, and derivation of sun
//! azimuth/elevation angles from 3D sun-position vectors when the table does
//! not carry precomputed angles.
//!
//! The module is organized into logical components:
//! - [`loader`] - File-level loading and per-record parsing
//! - [`column_mapping`] - Header scanning and required-column validation
//! - [`field_parsers`] - Typed field parsing helpers with error context
//! - [`stats`] - Loading statistics

pub mod column_mapping;
pub mod field_parsers;
pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{AngleColumns, ColumnMapping};
pub use loader::{MetadataLoadResult, load_metadata};
pub use stats::LoadStats;
