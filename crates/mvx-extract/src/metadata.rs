//! Flag and depth extraction for every formula block.

use std::path::Path;

use mvx_core::MvxError;
use mvx_table::{Cell, Table};

use crate::config::ExtractConfig;
use crate::layout;
use crate::reader::{read_padded, read_records, ReadOutcome};
use crate::report::{DefaultReason, DefaultedCell, Stage};
use crate::schema;

/// Collects the per-logic tautology and contradiction flags plus the
/// depth column.
///
/// Generated metadata files carry only the flags; the depth is known from
/// the file's grid position and is attached as its own column before
/// padding, so padding rows stay missing in every column. The hand-picked
/// file carries its depth as a trailing field instead.
pub fn extract_metadata(
    cfg: &ExtractConfig,
    root: &Path,
    defaulted: &mut Vec<DefaultedCell>,
) -> Result<Table, MvxError> {
    let flag_columns = schema::metadata_flag_columns(&cfg.logics);
    let mut all_columns = flag_columns.clone();
    all_columns.push(schema::DEPTH_COLUMN.to_string());
    let mut out = Table::with_columns(&all_columns);
    for &batch in &cfg.batches {
        for &depth in &cfg.depths {
            let path = layout::generated_metadata(cfg, root, batch, depth);
            let (mut block, failure) = match read_records(&path, &flag_columns)? {
                ReadOutcome::Rows(block) => (block, None),
                ReadOutcome::Absent => (
                    Table::blank(&flag_columns, 0),
                    Some((DefaultReason::Absent, None)),
                ),
                ReadOutcome::Corrupt { detail } => (
                    Table::blank(&flag_columns, 0),
                    Some((DefaultReason::Corrupt, Some(detail))),
                ),
            };
            let depth_cells = vec![Cell::Number(f64::from(depth)); block.rows()];
            block.push_column(schema::DEPTH_COLUMN, depth_cells)?;
            block
                .pad_to(cfg.generated_rows)
                .map_err(|err| err.with_context("path", path.display().to_string()))?;
            if let Some((reason, detail)) = failure {
                defaulted.push(
                    DefaultedCell::new(Stage::Metadata, &path, reason, detail)
                        .with_batch_depth(batch, depth),
                );
            }
            out.append(block)?;
        }
    }
    let path = layout::selected_metadata(cfg, root);
    let (mut block, failure) = read_padded(&path, &all_columns, cfg.selected_rows)?;
    block
        .coerce_numeric(schema::DEPTH_COLUMN)
        .map_err(|err| err.with_context("path", path.display().to_string()))?;
    if let Some((reason, detail)) = failure {
        defaulted.push(DefaultedCell::new(Stage::Metadata, &path, reason, detail).with_selected());
    }
    out.append(block)?;
    Ok(out)
}
