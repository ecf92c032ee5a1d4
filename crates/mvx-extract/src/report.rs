//! Run report accompanying every assembled dataset.

use std::fmt;
use std::path::Path;

use chrono::Utc;
use mvx_core::{Logic, MvxError};
use mvx_table::Table;
use serde::{Deserialize, Serialize};

use crate::hash::stable_hash_string;

/// Extraction stage that produced a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Formula names.
    Formulas,
    /// Tautology and contradiction flags plus depth.
    Metadata,
    /// Asymptotic validity scores.
    Asymptotic,
    /// Model-checker validation counts.
    Validation,
}

impl Stage {
    /// Returns the stage name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Formulas => "formulas",
            Stage::Metadata => "metadata",
            Stage::Asymptotic => "asymptotic",
            Stage::Validation => "validation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a block was replaced by missing markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultReason {
    /// The file does not exist.
    Absent,
    /// The file exists but could not be decoded.
    Corrupt,
}

impl DefaultReason {
    /// Returns the reason name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultReason::Absent => "absent",
            DefaultReason::Corrupt => "corrupt",
        }
    }
}

impl fmt::Display for DefaultReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One grid cell whose block had to be filled with missing markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultedCell {
    /// Stage owning the block.
    pub stage: Stage,
    /// True when the block belongs to the hand-picked formulas.
    #[serde(default)]
    pub selected: bool,
    /// Generation batch, for blocks from the generated grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<u32>,
    /// Formula nesting depth, for blocks from the generated grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    /// Logic, for asymptotic and validation blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logic: Option<Logic>,
    /// Model size, for validation blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_count: Option<u32>,
    /// File the block would have come from.
    pub path: String,
    /// What happened to the file.
    pub reason: DefaultReason,
    /// Decoder diagnostic, for corrupt files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl DefaultedCell {
    /// Starts a record for a defaulted block with no grid coordinates.
    pub fn new(stage: Stage, path: &Path, reason: DefaultReason, detail: Option<String>) -> Self {
        Self {
            stage,
            selected: false,
            batch: None,
            depth: None,
            logic: None,
            node_count: None,
            path: path.display().to_string(),
            reason,
            detail,
        }
    }

    /// Marks the block as belonging to the hand-picked formulas.
    pub fn with_selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Sets the generation batch and depth.
    pub fn with_batch_depth(mut self, batch: u32, depth: u32) -> Self {
        self.batch = Some(batch);
        self.depth = Some(depth);
        self
    }

    /// Sets the logic.
    pub fn with_logic(mut self, logic: Logic) -> Self {
        self.logic = Some(logic);
        self
    }

    /// Sets the validated model size.
    pub fn with_node_count(mut self, node_count: u32) -> Self {
        self.node_count = Some(node_count);
        self
    }
}

impl fmt::Display for DefaultedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "defaulted {} block", self.stage)?;
        let mut parts = Vec::new();
        if self.selected {
            parts.push("selected".to_string());
        }
        if let Some(batch) = self.batch {
            parts.push(format!("batch {batch}"));
        }
        if let Some(depth) = self.depth {
            parts.push(format!("depth {depth}"));
        }
        if let Some(logic) = self.logic {
            parts.push(logic.to_string());
        }
        if let Some(node_count) = self.node_count {
            parts.push(format!("{node_count} nodes"));
        }
        if !parts.is_empty() {
            write!(f, " ({})", parts.join(", "))?;
        }
        write!(f, ": {} at {}", self.reason, self.path)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}

/// Summary of one dataset build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// RFC 3339 timestamp of the build.
    pub created_at: String,
    /// Rows in the assembled dataset.
    pub rows: usize,
    /// Columns in the assembled dataset.
    pub columns: usize,
    /// Stable hash of the assembled dataset.
    pub dataset_hash: String,
    /// Blocks that had to be filled with missing markers.
    pub defaulted: Vec<DefaultedCell>,
}

impl ExtractionReport {
    /// Builds the report for an assembled dataset.
    pub fn summarize(table: &Table, defaulted: Vec<DefaultedCell>) -> Result<Self, MvxError> {
        Ok(Self {
            created_at: Utc::now().to_rfc3339(),
            rows: table.rows(),
            columns: table.width(),
            dataset_hash: stable_hash_string(table)?,
            defaulted,
        })
    }
}
