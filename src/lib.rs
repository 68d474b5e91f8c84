//! Heliostat Splitter Library
//!
//! A Rust library for partitioning heliostat calibration metadata into
//! reproducible train/test/validation benchmark splits.
//!
//! This library provides tools for:
//! - Loading per-image calibration metadata from CSV files
//! - Deriving sun azimuth/elevation angles from 3D sun-position vectors
//! - Partitioning observations per heliostat with azimuth, solstice, and
//!   nearest-neighbor strategies
//! - Enforcing minimum-count eligibility so every published split is balanced
//! - Writing deterministic, idempotently named split files for downstream
//!   benchmark consumers

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dataset_splitter;
        pub mod metadata_loader;
        pub mod split_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Observation, Season, SplitLabel, SplitType};
pub use app::services::dataset_splitter::DatasetSplitter;
pub use config::SplitRequest;

/// Result type alias for the heliostat splitter
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for splitting operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Input metadata is missing required columns
    #[error("Metadata file '{file}' is missing required column(s): {}", .missing_columns.join(", "))]
    MissingColumns {
        file: String,
        missing_columns: Vec<String>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unknown split type requested
    #[error(
        "Unknown split type '{split_type}'. The split type must be one of: {}",
        crate::constants::SPLIT_TYPE_NAMES.join(", ")
    )]
    UnknownSplitType { split_type: String },

    /// Unknown solstice season requested
    #[error("Unknown season '{season}'. The season must be either 'summer' or 'winter'")]
    UnknownSeason { season: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing { message: String },

    /// No heliostat retained enough observations to publish a split
    #[error("Insufficient data: {message}")]
    DataInsufficiency { message: String },

    /// A published split violated its own coverage guarantee
    #[error("Internal invariant violation: {message}")]
    InvariantViolation { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Split output writing error
    #[error("Split writing error: {message}")]
    SplitWriting {
        message: String,
        #[source]
        source: polars::error::PolarsError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing-columns schema error
    pub fn missing_columns(file: impl Into<String>, missing_columns: Vec<String>) -> Self {
        Self::MissingColumns {
            file: file.into(),
            missing_columns,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown split type error
    pub fn unknown_split_type(split_type: impl Into<String>) -> Self {
        Self::UnknownSplitType {
            split_type: split_type.into(),
        }
    }

    /// Create an unknown season error
    pub fn unknown_season(season: impl Into<String>) -> Self {
        Self::UnknownSeason {
            season: season.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
        }
    }

    /// Create a data insufficiency error
    pub fn data_insufficiency(message: impl Into<String>) -> Self {
        Self::DataInsufficiency {
            message: message.into(),
        }
    }

    /// Create an invariant violation error
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a split writing error
    pub fn split_writing(message: impl Into<String>, source: polars::error::PolarsError) -> Self {
        Self::SplitWriting {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: error.to_string(),
        }
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(error: polars::error::PolarsError) -> Self {
        Self::SplitWriting {
            message: "DataFrame operation failed".to_string(),
            source: error,
        }
    }
}
