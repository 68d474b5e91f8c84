use clap::Parser;
use heliostat_splitter::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - the report has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Heliostat Splitter - Benchmark Split Generator");
    println!("==============================================");
    println!();
    println!("Partition heliostat calibration metadata into reproducible");
    println!("train/test/validation benchmark splits.");
    println!();
    println!("USAGE:");
    println!("    heliostat-splitter <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    split       Compute a benchmark split and write it as CSV (main command)");
    println!("    inspect     Report per-heliostat observation counts and eligibility");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Azimuth split with 10 training and 30 validation samples per heliostat:");
    println!("    heliostat-splitter split --input calibration_metadata.csv \\");
    println!("                             --split-type azimuth --training-size 10 \\");
    println!("                             --validation-size 30");
    println!();
    println!("    # Check which heliostats would survive those sizes:");
    println!("    heliostat-splitter inspect --input calibration_metadata.csv \\");
    println!("                               --training-size 10 --validation-size 30");
    println!();
    println!("For detailed help on any command, use:");
    println!("    heliostat-splitter <COMMAND> --help");
}
