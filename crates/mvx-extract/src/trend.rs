//! Growth-trend flags fitted over the model-size axis.

use mvx_core::{ErrorInfo, MvxError, ValMetric};
use mvx_table::{Cell, Table};

use crate::config::ExtractConfig;
use crate::schema;

/// Least-squares slope of `points`. Returns `None` when fewer than two
/// points are present, or when all abscissae coincide.
pub fn fit_slope(points: &[(f64, f64)]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|&(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;
    let sxx: f64 = points.iter().map(|&(x, _)| (x - mean_x) * (x - mean_x)).sum();
    if sxx == 0.0 {
        return None;
    }
    let sxy: f64 = points.iter().map(|&(x, y)| (x - mean_x) * (y - mean_y)).sum();
    Some(sxy / sxx)
}

/// Fits one trend flag per (logic, metric) pair for every row, from the
/// validation counts already assembled in `table`.
///
/// Points are taken at the configured model sizes; missing cells drop out
/// of the fit rather than pinning it to zero. A row scores `1` on a
/// positive slope, or on a perfectly flat series that starts at the
/// metric's saturation count (the validator was already maxed out at the
/// smallest size, so no growth was observable). Everything else,
/// including rows with fewer than two present points, scores `0`.
pub fn trend_columns(table: &Table, cfg: &ExtractConfig) -> Result<Table, MvxError> {
    let mut out = Table::new();
    for &logic in &cfg.logics {
        for metric in ValMetric::ALL {
            let saturation = match metric {
                ValMetric::Frame => cfg.frame_saturation,
                ValMetric::Model => cfg.model_saturation,
            };
            let mut series = Vec::with_capacity(cfg.node_counts.len());
            for &node_count in &cfg.node_counts {
                let name = schema::value_column(metric, logic, node_count);
                let cells = table.column(&name)?;
                series.push((f64::from(node_count), name, cells));
            }
            let mut cells = Vec::with_capacity(table.rows());
            for row in 0..table.rows() {
                let mut points = Vec::with_capacity(series.len());
                for (node_count, name, column) in &series {
                    match &column[row] {
                        Cell::Number(value) => points.push((*node_count, *value)),
                        Cell::Missing => {}
                        Cell::Text(_) => {
                            return Err(MvxError::Table(
                                ErrorInfo::new(
                                    "trend-input",
                                    "validation column still holds raw text",
                                )
                                .with_context("column", name.as_str())
                                .with_context("row", row.to_string()),
                            ))
                        }
                    }
                }
                let first = series
                    .first()
                    .and_then(|(_, _, column)| column[row].as_number());
                cells.push(Cell::Number(trend_flag(first, fit_slope(&points), saturation)));
            }
            out.push_column(schema::trend_column(logic, metric), cells)?;
        }
    }
    Ok(out)
}

fn trend_flag(first: Option<f64>, slope: Option<f64>, saturation: f64) -> f64 {
    match slope {
        Some(slope) if slope > 0.0 => 1.0,
        Some(slope) if slope == 0.0 && first == Some(saturation) => 1.0,
        _ => 0.0,
    }
}
