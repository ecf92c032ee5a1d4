use std::collections::BTreeSet;
use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;
use mvx_extract::{layout, to_canonical_json_bytes, ExtractConfig};
use serde::Serialize;
use walkdir::WalkDir;

use super::load_config;

const LISTING_LIMIT: usize = 8;

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Root of the experiment tree to inspect.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Optional YAML configuration overriding the reference grid.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Emit only JSON without additional context.
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: String,
    ok: bool,
    detail: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    status: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(args: &DoctorArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref())?;
    let report = diagnose(&config, &args.root)?;
    let json = to_canonical_json_bytes(&report).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    let rendered = String::from_utf8(json)?;
    if args.quiet {
        println!("{}", rendered);
    } else {
        println!("mvx-dataset doctor status: {}", report.status);
        println!("{}", rendered);
    }
    if report.status != "ok" {
        return Err("one or more checks failed".into());
    }
    Ok(())
}

fn diagnose(config: &ExtractConfig, root: &Path) -> Result<DoctorReport, Box<dyn Error>> {
    config
        .validate()
        .map_err(|err| Box::new(err) as Box<dyn Error>)?;
    let root = root.canonicalize()?;
    let mut checks = Vec::new();
    let mut expected = BTreeSet::new();

    let stages = [
        ("generated formulas", layout::expected_formula_files(config, &root)),
        ("formula metadata", layout::expected_metadata_files(config, &root)),
        ("asymptotic validity", layout::expected_asymptotic_files(config, &root)),
        ("validation counts", layout::expected_validation_files(config, &root)),
    ];
    for (name, files) in stages {
        checks.push(check_stage(name, &files));
        expected.extend(files);
    }
    checks.push(check_strays(config, &root, &expected));

    let mut status = "ok";
    if checks.iter().any(|check| !check.ok) {
        status = "needs-attention";
    }
    Ok(DoctorReport {
        status: status.into(),
        checks,
    })
}

fn check_stage(name: &str, files: &[PathBuf]) -> DoctorCheck {
    let missing: Vec<&PathBuf> = files.iter().filter(|path| !path.exists()).collect();
    if missing.is_empty() {
        return DoctorCheck {
            name: name.into(),
            ok: true,
            detail: format!("{} of {} files present", files.len(), files.len()),
        };
    }
    let mut listed: Vec<String> = missing
        .iter()
        .take(LISTING_LIMIT)
        .map(|path| path.display().to_string())
        .collect();
    if missing.len() > LISTING_LIMIT {
        listed.push(format!("and {} more", missing.len() - LISTING_LIMIT));
    }
    DoctorCheck {
        name: name.into(),
        ok: false,
        detail: format!(
            "{} of {} files present; missing {}",
            files.len() - missing.len(),
            files.len(),
            listed.join(", ")
        ),
    }
}

fn check_strays(config: &ExtractConfig, root: &Path, expected: &BTreeSet<PathBuf>) -> DoctorCheck {
    let mut strays = Vec::new();
    for dir in [&config.formulas_dir, &config.asymptotic_dir, &config.validated_dir] {
        let base = root.join(dir);
        if !base.exists() {
            continue;
        }
        for entry in WalkDir::new(&base).into_iter().filter_map(|entry| entry.ok()) {
            if entry.file_type().is_file() && !expected.contains(entry.path()) {
                strays.push(entry.path().display().to_string());
            }
        }
    }
    strays.sort();
    if strays.is_empty() {
        return DoctorCheck {
            name: "unexpected files".into(),
            ok: true,
            detail: "none found".into(),
        };
    }
    let shown = strays.len().min(LISTING_LIMIT);
    let mut listed = strays[..shown].join(", ");
    if strays.len() > shown {
        listed.push_str(&format!(", and {} more", strays.len() - shown));
    }
    DoctorCheck {
        name: "unexpected files".into(),
        ok: false,
        detail: format!("{} found: {}", strays.len(), listed),
    }
}
