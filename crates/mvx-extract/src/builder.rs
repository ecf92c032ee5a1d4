//! End-to-end dataset assembly.

use std::path::Path;

use mvx_core::MvxError;
use mvx_table::Table;

use crate::asymptotic::extract_asymptotic;
use crate::config::ExtractConfig;
use crate::formulas::extract_formulas;
use crate::metadata::extract_metadata;
use crate::report::ExtractionReport;
use crate::trend::trend_columns;
use crate::validation::extract_validation;

/// Assembles the full dataset for an experiment tree.
///
/// Column blocks arrive in a fixed order: formulas, flags and depth,
/// asymptotic scores, validation counts, then the fitted trend flags.
/// Boolean flags are normalized once every block is in place. Absent or
/// corrupt files are recovered as missing blocks and listed in the
/// report; structural problems (wrong field counts, overfull blocks,
/// unparseable numbers) abort the build instead.
pub fn build_dataset(
    cfg: &ExtractConfig,
    root: &Path,
) -> Result<(Table, ExtractionReport), MvxError> {
    cfg.validate()?;
    let mut defaulted = Vec::new();
    let mut table = extract_formulas(cfg, root, &mut defaulted)?;
    table.adjoin(extract_metadata(cfg, root, &mut defaulted)?)?;
    table.adjoin(extract_asymptotic(cfg, root, &mut defaulted)?)?;
    table.adjoin(extract_validation(cfg, root, &mut defaulted)?)?;
    table.normalize_truth(&cfg.truth);
    let trends = trend_columns(&table, cfg)?;
    table.adjoin(trends)?;
    let report = ExtractionReport::summarize(&table, defaulted)?;
    Ok((table, report))
}
