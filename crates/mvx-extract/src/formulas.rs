//! Formula-name extraction: generated batches first, hand-picked last.

use std::path::Path;

use mvx_core::MvxError;
use mvx_table::Table;

use crate::config::ExtractConfig;
use crate::layout;
use crate::reader::read_padded;
use crate::report::{DefaultedCell, Stage};
use crate::schema;

/// Collects every formula name into the dataset's first column.
///
/// Blocks arrive in grid order (batches ascending, depths ascending
/// within each batch) and every block is padded to its canonical height,
/// so a formula's row index is a function of the grid alone.
pub fn extract_formulas(
    cfg: &ExtractConfig,
    root: &Path,
    defaulted: &mut Vec<DefaultedCell>,
) -> Result<Table, MvxError> {
    let columns = vec![schema::FORMULA_COLUMN.to_string()];
    let mut out = Table::with_columns(&columns);
    for &batch in &cfg.batches {
        for &depth in &cfg.depths {
            let path = layout::generated_formulas(cfg, root, batch, depth);
            let (block, failure) = read_padded(&path, &columns, cfg.generated_rows)?;
            if let Some((reason, detail)) = failure {
                defaulted.push(
                    DefaultedCell::new(Stage::Formulas, &path, reason, detail)
                        .with_batch_depth(batch, depth),
                );
            }
            out.append(block)?;
        }
    }
    let path = layout::selected_formulas(cfg, root);
    let (block, failure) = read_padded(&path, &columns, cfg.selected_rows)?;
    if let Some((reason, detail)) = failure {
        defaulted.push(DefaultedCell::new(Stage::Formulas, &path, reason, detail).with_selected());
    }
    out.append(block)?;
    Ok(out)
}
