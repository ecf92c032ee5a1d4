//! Model-checker count extraction per logic and model size.

use std::path::Path;

use mvx_core::{MvxError, ValMetric};
use mvx_table::Table;

use crate::config::ExtractConfig;
use crate::layout;
use crate::reader::read_padded;
use crate::report::{DefaultedCell, Stage};
use crate::schema;

/// Collects the frame and model validation counts for every (logic,
/// model size) pair.
///
/// Raw records carry seven fields; only the two counts survive. Totals
/// and timings describe the validation run, not the formula, and would
/// only repeat the configuration.
pub fn extract_validation(
    cfg: &ExtractConfig,
    root: &Path,
    defaulted: &mut Vec<DefaultedCell>,
) -> Result<Table, MvxError> {
    let raw_columns: Vec<String> = schema::VALIDATION_RAW_COLUMNS
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut out = Table::new();
    for &logic in &cfg.logics {
        for &node_count in &cfg.node_counts {
            let frame_column = schema::value_column(ValMetric::Frame, logic, node_count);
            let model_column = schema::value_column(ValMetric::Model, logic, node_count);
            let mut acc = Table::with_columns(&[frame_column.clone(), model_column.clone()]);
            for &batch in &cfg.batches {
                for &depth in &cfg.depths {
                    let path =
                        layout::validation_generated(cfg, root, logic, node_count, batch, depth);
                    let (block, failure) = read_padded(&path, &raw_columns, cfg.generated_rows)?;
                    if let Some((reason, detail)) = failure {
                        defaulted.push(
                            DefaultedCell::new(Stage::Validation, &path, reason, detail)
                                .with_logic(logic)
                                .with_node_count(node_count)
                                .with_batch_depth(batch, depth),
                        );
                    }
                    acc.append(keep_counts(block, &path, &frame_column, &model_column)?)?;
                }
            }
            let path = layout::validation_selected(cfg, root, logic, node_count);
            let (block, failure) = read_padded(&path, &raw_columns, cfg.selected_rows)?;
            if let Some((reason, detail)) = failure {
                defaulted.push(
                    DefaultedCell::new(Stage::Validation, &path, reason, detail)
                        .with_logic(logic)
                        .with_node_count(node_count)
                        .with_selected(),
                );
            }
            acc.append(keep_counts(block, &path, &frame_column, &model_column)?)?;
            out.adjoin(acc)?;
        }
    }
    Ok(out)
}

fn keep_counts(
    block: Table,
    path: &Path,
    frame_column: &str,
    model_column: &str,
) -> Result<Table, MvxError> {
    let mut kept = block.select(&[schema::FRAMES_FIELD, schema::MODELS_FIELD])?;
    kept.rename(schema::FRAMES_FIELD, frame_column)?;
    kept.rename(schema::MODELS_FIELD, model_column)?;
    kept.coerce_numeric(frame_column)
        .map_err(|err| err.with_context("path", path.display().to_string()))?;
    kept.coerce_numeric(model_column)
        .map_err(|err| err.with_context("path", path.display().to_string()))?;
    Ok(kept)
}
