//! Command-line argument definitions for the heliostat splitter
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::models::SplitType;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the heliostat splitter
///
/// Partitions heliostat calibration metadata into reproducible
/// train/test/validation benchmark splits.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "heliostat-splitter",
    version,
    about = "Generate train/test/validation benchmark splits from heliostat calibration metadata",
    long_about = "Partitions a heliostat field's per-image calibration metadata into \
                  reproducible train/test/validation benchmark splits. Each heliostat is \
                  split independently with a choice of sun-geometry strategies, heliostats \
                  with insufficient data are excluded, and the output file name encodes the \
                  split parameters so repeated runs are idempotent."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the heliostat splitter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Compute a benchmark split and write it as a CSV file (main command)
    Split(SplitArgs),
    /// Report per-heliostat observation counts and split eligibility
    Inspect(InspectArgs),
}

/// Arguments for the split command (main split generation)
#[derive(Debug, Clone, Parser)]
pub struct SplitArgs {
    /// Path to the calibration metadata CSV file
    ///
    /// Must contain Id, HeliostatId, CreatedAt columns and a sun position:
    /// either Azimuth/Elevation angles or a SunPosE/SunPosN/SunPosU vector.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the calibration metadata CSV file"
    )]
    pub input_file: PathBuf,

    /// Output directory for generated split files
    ///
    /// Will be created if it doesn't exist. If not specified, defaults to a
    /// splits directory under the user's local data directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory for generated split files"
    )]
    pub output_dir: Option<PathBuf>,

    /// Split strategy to apply per heliostat
    #[arg(
        short = 's',
        long = "split-type",
        value_enum,
        help = "Split strategy to apply per heliostat"
    )]
    pub split_type: SplitType,

    /// Number of observations allocated to training per heliostat
    #[arg(
        short = 't',
        long = "training-size",
        value_name = "COUNT",
        help = "Number of observations allocated to training per heliostat"
    )]
    pub training_size: usize,

    /// Number of observations allocated to validation per heliostat
    ///
    /// Also acts as the minimum size of the remaining test set, so a
    /// heliostat needs training-size + 2 * validation-size observations.
    #[arg(
        long = "validation-size",
        value_name = "COUNT",
        help = "Number of observations allocated to validation per heliostat"
    )]
    pub validation_size: usize,

    /// Write only the Id, HeliostatId and Split columns
    ///
    /// By default the output keeps the azimuth, elevation and timestamp
    /// helper columns used by downstream plots.
    #[arg(long = "minimal", help = "Write only the Id, HeliostatId and Split columns")]
    pub minimal: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the final report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the final report"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the inspect command (per-heliostat eligibility report)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Path to the calibration metadata CSV file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the calibration metadata CSV file"
    )]
    pub input_file: PathBuf,

    /// Training size used for the eligibility assessment
    #[arg(
        short = 't',
        long = "training-size",
        value_name = "COUNT",
        default_value_t = 10,
        help = "Training size used for the eligibility assessment"
    )]
    pub training_size: usize,

    /// Validation size used for the eligibility assessment
    #[arg(
        long = "validation-size",
        value_name = "COUNT",
        default_value_t = 30,
        help = "Validation size used for the eligibility assessment"
    )]
    pub validation_size: usize,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl SplitArgs {
    /// Validate the split command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_file.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_file.display()
            )));
        }

        if !self.input_file.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_file.display()
            )));
        }

        if self.training_size == 0 {
            return Err(Error::configuration(
                "Training size must be greater than 0".to_string(),
            ));
        }

        if self.validation_size == 0 {
            return Err(Error::configuration(
                "Validation size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve the output directory, falling back to the user's data directory
    pub fn resolve_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_local_dir()
                .map(|dir| dir.join("heliostat-splitter").join("splits"))
                .unwrap_or_else(|| PathBuf::from("splits")),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_file.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_file.display()
            )));
        }

        if self.training_size == 0 || self.validation_size == 0 {
            return Err(Error::configuration(
                "Training and validation sizes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn split_args(input_file: PathBuf) -> SplitArgs {
        SplitArgs {
            input_file,
            output_dir: None,
            split_type: SplitType::Azimuth,
            training_size: 10,
            validation_size: 30,
            minimal: false,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }

    #[test]
    fn test_split_args_validation() {
        let input = NamedTempFile::new().unwrap();
        let args = split_args(input.path().to_path_buf());
        assert!(args.validate().is_ok());

        let mut invalid = args.clone();
        invalid.training_size = 0;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.validation_size = 0;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.input_file = PathBuf::from("/nonexistent/metadata.csv");
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let input = NamedTempFile::new().unwrap();
        let mut args = split_args(input.path().to_path_buf());

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let input = NamedTempFile::new().unwrap();
        let mut args = split_args(input.path().to_path_buf());

        assert!(args.show_progress());
        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_resolve_output_dir_prefers_explicit_path() {
        let input = NamedTempFile::new().unwrap();
        let mut args = split_args(input.path().to_path_buf());
        args.output_dir = Some(PathBuf::from("/tmp/splits"));

        assert_eq!(args.resolve_output_dir(), PathBuf::from("/tmp/splits"));
    }

    #[test]
    fn test_split_type_cli_values() {
        use clap::ValueEnum;

        let values: Vec<String> = SplitType::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();

        assert_eq!(values, vec!["azimuth", "solstice", "nearest-neighbor"]);
    }
}
