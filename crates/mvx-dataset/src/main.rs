use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    doctor::{self, DoctorArgs},
    extract::{self, ExtractArgs},
    version::{self, VersionArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "mvx-dataset", about = "Modal validation experiment dataset builder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate experiment result files into one CSV dataset.
    Extract(ExtractArgs),
    /// Check an experiment tree for missing or unexpected result files.
    Doctor(DoctorArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Extract(args) => extract::run(&args),
        Command::Doctor(args) => doctor::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
