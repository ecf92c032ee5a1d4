//! Extraction pipeline assembling the modal-logic experiment dataset.

pub mod asymptotic;
pub mod builder;
pub mod config;
pub mod formulas;
pub mod hash;
pub mod layout;
pub mod metadata;
pub mod reader;
pub mod report;
pub mod schema;
pub mod serde;
pub mod trend;
pub mod validation;

pub use builder::build_dataset;
pub use config::ExtractConfig;
pub use hash::stable_hash_string;
pub use reader::{read_padded, read_records, ReadOutcome};
pub use report::{DefaultReason, DefaultedCell, ExtractionReport, Stage};
pub use serde::{from_json_slice, to_canonical_json_bytes};
pub use trend::{fit_slope, trend_columns};
