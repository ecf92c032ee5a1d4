#![deny(missing_docs)]
#![doc = "Core error taxonomy and shared identifiers for the MVX dataset tools."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;

pub use errors::{ErrorInfo, MvxError};

/// Modal logic covered by the experiment grid.
///
/// The variant names double as the suffixes used in dataset column names,
/// so their spelling is part of the output schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Logic {
    /// Goedel-Loeb provability logic.
    GL,
    /// Reflexive transitive frames.
    S4,
    /// Transitive frames.
    K4,
}

impl Logic {
    /// Returns the column-name suffix for the logic.
    pub fn as_str(&self) -> &'static str {
        match self {
            Logic::GL => "GL",
            Logic::S4 => "S4",
            Logic::K4 => "K4",
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation metric recorded by the model checker for each formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValMetric {
    /// Count of frames on which the formula was valid.
    Frame,
    /// Count of models on which the formula was valid.
    Model,
}

impl ValMetric {
    /// Returns the column-name fragment for the metric.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValMetric::Frame => "frame",
            ValMetric::Model => "model",
        }
    }

    /// Both metrics in the order they appear in dataset columns.
    pub const ALL: [ValMetric; 2] = [ValMetric::Frame, ValMetric::Model];
}

impl fmt::Display for ValMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
