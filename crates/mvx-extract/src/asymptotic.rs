//! Asymptotic validity extraction, one scalar column per logic.

use std::path::Path;

use mvx_core::MvxError;
use mvx_table::Table;

use crate::config::ExtractConfig;
use crate::layout;
use crate::reader::read_padded;
use crate::report::{DefaultedCell, Stage};
use crate::schema;

/// Collects the asymptotic validity score of every formula under each
/// configured logic. Scores are coerced to numbers on the way in.
pub fn extract_asymptotic(
    cfg: &ExtractConfig,
    root: &Path,
    defaulted: &mut Vec<DefaultedCell>,
) -> Result<Table, MvxError> {
    let mut out = Table::new();
    for &logic in &cfg.logics {
        let columns = vec![schema::asymptotic_column(logic)];
        let mut acc = Table::with_columns(&columns);
        for &batch in &cfg.batches {
            for &depth in &cfg.depths {
                let path = layout::asymptotic_generated(cfg, root, logic, batch, depth);
                let (mut block, failure) = read_padded(&path, &columns, cfg.generated_rows)?;
                block
                    .coerce_numeric(&columns[0])
                    .map_err(|err| err.with_context("path", path.display().to_string()))?;
                if let Some((reason, detail)) = failure {
                    defaulted.push(
                        DefaultedCell::new(Stage::Asymptotic, &path, reason, detail)
                            .with_logic(logic)
                            .with_batch_depth(batch, depth),
                    );
                }
                acc.append(block)?;
            }
        }
        let path = layout::asymptotic_selected(cfg, root, logic);
        let (mut block, failure) = read_padded(&path, &columns, cfg.selected_rows)?;
        block
            .coerce_numeric(&columns[0])
            .map_err(|err| err.with_context("path", path.display().to_string()))?;
        if let Some((reason, detail)) = failure {
            defaulted.push(
                DefaultedCell::new(Stage::Asymptotic, &path, reason, detail)
                    .with_logic(logic)
                    .with_selected(),
            );
        }
        acc.append(block)?;
        out.adjoin(acc)?;
    }
    Ok(out)
}
