use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use mvx_extract::{build_dataset, to_canonical_json_bytes};
use mvx_table::write_csv;

use super::load_config;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Root of the experiment tree to aggregate.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Destination CSV file for the assembled dataset.
    #[arg(long)]
    pub out: PathBuf,
    /// Optional YAML configuration overriding the reference grid.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Optional path for a JSON extraction report.
    #[arg(long)]
    pub report: Option<PathBuf>,
    /// Suppress warnings about blocks recovered as missing.
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: &ExtractArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref())?;
    let (table, report) =
        build_dataset(&config, &args.root).map_err(|err| Box::new(err) as Box<dyn Error>)?;

    if !args.quiet {
        for cell in &report.defaulted {
            eprintln!("warning: {}", cell);
        }
    }

    write_csv(&table, &args.out).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    if let Some(path) = &args.report {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json =
            to_canonical_json_bytes(&report).map_err(|err| Box::new(err) as Box<dyn Error>)?;
        fs::write(path, json)?;
    }

    println!(
        "wrote {} rows x {} columns to {}",
        report.rows,
        report.columns,
        args.out.display()
    );
    println!("dataset hash: {}", report.dataset_hash);
    Ok(())
}
