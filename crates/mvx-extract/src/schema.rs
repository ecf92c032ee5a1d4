//! Dataset column naming.

use mvx_core::{Logic, ValMetric};

use crate::config::ExtractConfig;

/// Name of the formula column.
pub const FORMULA_COLUMN: &str = "formula";

/// Name of the depth column.
pub const DEPTH_COLUMN: &str = "depth";

/// Field names of a raw validation record, in file order. Only the two
/// count fields survive into the dataset; totals and timings are dropped.
pub const VALIDATION_RAW_COLUMNS: [&str; 7] = [
    "models",
    "total_models",
    "time_models",
    "frames",
    "total_frames",
    "total_valuations",
    "time_frames",
];

/// Raw validation field holding the frame count.
pub const FRAMES_FIELD: &str = "frames";

/// Raw validation field holding the model count.
pub const MODELS_FIELD: &str = "models";

/// Flag columns carried by metadata files: a tautology and a
/// contradiction flag per logic, in logic order.
pub fn metadata_flag_columns(logics: &[Logic]) -> Vec<String> {
    logics
        .iter()
        .flat_map(|logic| [format!("tautology_{logic}"), format!("contradiction_{logic}")])
        .collect()
}

/// Asymptotic validity column for one logic.
pub fn asymptotic_column(logic: Logic) -> String {
    format!("asymptotic_model_val_{logic}")
}

/// Validation count column for one metric, logic and model size.
pub fn value_column(metric: ValMetric, logic: Logic, node_count: u32) -> String {
    format!("{metric}_{logic}_{node_count}")
}

/// Trend flag column for one logic and metric.
pub fn trend_column(logic: Logic, metric: ValMetric) -> String {
    format!("trend_{logic}_{metric}")
}

/// Full dataset header for a configuration, in canonical order: formula,
/// flags, depth, asymptotic scores, validation counts, trend flags.
pub fn dataset_columns(cfg: &ExtractConfig) -> Vec<String> {
    let mut columns = vec![FORMULA_COLUMN.to_string()];
    columns.extend(metadata_flag_columns(&cfg.logics));
    columns.push(DEPTH_COLUMN.to_string());
    for &logic in &cfg.logics {
        columns.push(asymptotic_column(logic));
    }
    for &logic in &cfg.logics {
        for &node_count in &cfg.node_counts {
            for metric in ValMetric::ALL {
                columns.push(value_column(metric, logic, node_count));
            }
        }
    }
    for &logic in &cfg.logics {
        for metric in ValMetric::ALL {
            columns.push(trend_column(logic, metric));
        }
    }
    columns
}
