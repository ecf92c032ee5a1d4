//! Path layout of an experiment tree.
//!
//! The generator writes batches into `formulas {batch}` directories with
//! one `depth {depth}.txt` file per depth (metadata under `metaData
//! {batch}`), and hand-picked formulas into `formulas 0/selected.txt`.
//! Directory names contain spaces; they come from the generator and are
//! not configurable.

use std::path::{Path, PathBuf};

use mvx_core::Logic;

use crate::config::ExtractConfig;

/// Generated formulas file for one batch and depth.
pub fn generated_formulas(cfg: &ExtractConfig, root: &Path, batch: u32, depth: u32) -> PathBuf {
    root.join(&cfg.formulas_dir)
        .join(format!("formulas {batch}"))
        .join(depth_file(depth))
}

/// Generated metadata file for one batch and depth.
pub fn generated_metadata(cfg: &ExtractConfig, root: &Path, batch: u32, depth: u32) -> PathBuf {
    root.join(&cfg.formulas_dir)
        .join(format!("metaData {batch}"))
        .join(depth_file(depth))
}

/// Hand-picked formulas file.
pub fn selected_formulas(cfg: &ExtractConfig, root: &Path) -> PathBuf {
    root.join(&cfg.selected_formulas_file)
}

/// Metadata file for the hand-picked formulas.
pub fn selected_metadata(cfg: &ExtractConfig, root: &Path) -> PathBuf {
    root.join(&cfg.selected_metadata_file)
}

/// Asymptotic validity file for one logic, batch and depth.
pub fn asymptotic_generated(
    cfg: &ExtractConfig,
    root: &Path,
    logic: Logic,
    batch: u32,
    depth: u32,
) -> PathBuf {
    root.join(&cfg.asymptotic_dir)
        .join(logic.as_str())
        .join(format!("formulas {batch}"))
        .join(depth_file(depth))
}

/// Asymptotic validity file for the hand-picked formulas of one logic.
pub fn asymptotic_selected(cfg: &ExtractConfig, root: &Path, logic: Logic) -> PathBuf {
    root.join(&cfg.asymptotic_dir)
        .join(logic.as_str())
        .join("formulas 0")
        .join("selected.txt")
}

/// Validation counts file for one logic, model size, batch and depth.
pub fn validation_generated(
    cfg: &ExtractConfig,
    root: &Path,
    logic: Logic,
    node_count: u32,
    batch: u32,
    depth: u32,
) -> PathBuf {
    root.join(&cfg.validated_dir)
        .join(logic.as_str())
        .join(node_count.to_string())
        .join(format!("formulas {batch}"))
        .join(depth_file(depth))
}

/// Validation counts file for the hand-picked formulas of one logic and
/// model size.
pub fn validation_selected(
    cfg: &ExtractConfig,
    root: &Path,
    logic: Logic,
    node_count: u32,
) -> PathBuf {
    root.join(&cfg.validated_dir)
        .join(logic.as_str())
        .join(node_count.to_string())
        .join("formulas 0")
        .join("selected.txt")
}

/// Every formula file the configured grid expects, selected last.
pub fn expected_formula_files(cfg: &ExtractConfig, root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for &batch in &cfg.batches {
        for &depth in &cfg.depths {
            files.push(generated_formulas(cfg, root, batch, depth));
        }
    }
    files.push(selected_formulas(cfg, root));
    files
}

/// Every metadata file the configured grid expects, selected last.
pub fn expected_metadata_files(cfg: &ExtractConfig, root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for &batch in &cfg.batches {
        for &depth in &cfg.depths {
            files.push(generated_metadata(cfg, root, batch, depth));
        }
    }
    files.push(selected_metadata(cfg, root));
    files
}

/// Every asymptotic validity file the configured grid expects.
pub fn expected_asymptotic_files(cfg: &ExtractConfig, root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for &logic in &cfg.logics {
        for &batch in &cfg.batches {
            for &depth in &cfg.depths {
                files.push(asymptotic_generated(cfg, root, logic, batch, depth));
            }
        }
        files.push(asymptotic_selected(cfg, root, logic));
    }
    files
}

/// Every validation counts file the configured grid expects.
pub fn expected_validation_files(cfg: &ExtractConfig, root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for &logic in &cfg.logics {
        for &node_count in &cfg.node_counts {
            for &batch in &cfg.batches {
                for &depth in &cfg.depths {
                    files.push(validation_generated(cfg, root, logic, node_count, batch, depth));
                }
            }
            files.push(validation_selected(cfg, root, logic, node_count));
        }
    }
    files
}

fn depth_file(depth: u32) -> String {
    format!("depth {depth}.txt")
}
