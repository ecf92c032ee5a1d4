//! Rectangular table of named columns.
//!
//! Blocks produced by the extraction steps are glued together with
//! [`Table::append`] (rows) and [`Table::adjoin`] (columns); both refuse
//! any operation that would leave the table ragged.

use mvx_core::{ErrorInfo, MvxError};
use serde::{Deserialize, Serialize};

/// Single table cell: explicit missing marker, raw text, or finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// No value was observed for this position.
    Missing,
    /// Raw text exactly as read from an input file.
    Text(String),
    /// Finite numeric value.
    Number(f64),
}

impl Cell {
    /// Returns true for the missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Returns the numeric value, if the cell holds one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Renders the cell as a CSV field: missing becomes the empty field,
    /// whole numbers print without a fractional part.
    pub fn to_field(&self) -> String {
        match self {
            Cell::Missing => String::new(),
            Cell::Text(raw) => raw.clone(),
            Cell::Number(value) => {
                if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
                    format!("{}", *value as i64)
                } else {
                    value.to_string()
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Column {
    pub(crate) name: String,
    pub(crate) cells: Vec<Cell>,
}

/// Rectangular table assembled from extraction blocks.
///
/// Column names are expected to be distinct; every mutating operation
/// keeps all columns at the same height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Table {
    pub(crate) columns: Vec<Column>,
}

impl Table {
    /// Creates a table with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a zero-row table with the given column names declared.
    pub fn with_columns<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            columns: names
                .iter()
                .map(|name| Column {
                    name: name.as_ref().to_string(),
                    cells: Vec::new(),
                })
                .collect(),
        }
    }

    /// Creates a fully missing block of the given height.
    pub fn blank<S: AsRef<str>>(names: &[S], rows: usize) -> Self {
        Self {
            columns: names
                .iter()
                .map(|name| Column {
                    name: name.as_ref().to_string(),
                    cells: vec![Cell::Missing; rows],
                })
                .collect(),
        }
    }

    /// Builds a table from row-major cells, checking every row width.
    pub fn from_rows<S: AsRef<str>>(names: &[S], rows: Vec<Vec<Cell>>) -> Result<Self, MvxError> {
        let mut table = Self::with_columns(names);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != table.columns.len() {
                return Err(MvxError::Table(
                    ErrorInfo::new("row-width", "row width does not match the declared columns")
                        .with_context("row", idx.to_string())
                        .with_context("expected", table.columns.len().to_string())
                        .with_context("found", row.len().to_string()),
                ));
            }
            for (column, cell) in table.columns.iter_mut().zip(row) {
                column.cells.push(cell);
            }
        }
        Ok(table)
    }

    /// Number of rows (all columns have the same height).
    pub fn rows(&self) -> usize {
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns true when the table declares a column with the given name.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Returns the cells of a column.
    pub fn column(&self, name: &str) -> Result<&[Cell], MvxError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.cells.as_slice())
            .ok_or_else(|| unknown_column(name))
    }

    /// Appends a new column, which must match the current row count.
    pub fn push_column(&mut self, name: impl Into<String>, cells: Vec<Cell>) -> Result<(), MvxError> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(duplicate_column(&name));
        }
        if !self.columns.is_empty() && cells.len() != self.rows() {
            return Err(MvxError::Table(
                ErrorInfo::new("column-length", "column height does not match the table")
                    .with_context("column", name)
                    .with_context("rows", self.rows().to_string())
                    .with_context("found", cells.len().to_string()),
            ));
        }
        self.columns.push(Column { name, cells });
        Ok(())
    }

    /// Appends the rows of `block` below this table. The block must carry
    /// exactly the same column names in the same order.
    pub fn append(&mut self, block: Table) -> Result<(), MvxError> {
        if self.column_names() != block.column_names() {
            return Err(MvxError::Schema(
                ErrorInfo::new("append-columns", "block columns do not match the table")
                    .with_context("expected", self.column_names().join(","))
                    .with_context("found", block.column_names().join(",")),
            ));
        }
        for (column, incoming) in self.columns.iter_mut().zip(block.columns) {
            column.cells.extend(incoming.cells);
        }
        Ok(())
    }

    /// Adjoins the columns of `block` to the right of this table. Row
    /// counts must agree and no column name may repeat. Adjoining onto a
    /// table with no columns adopts the block wholesale.
    pub fn adjoin(&mut self, block: Table) -> Result<(), MvxError> {
        if self.columns.is_empty() {
            self.columns = block.columns;
            return Ok(());
        }
        if block.rows() != self.rows() {
            return Err(MvxError::Table(
                ErrorInfo::new("adjoin-rows", "row counts differ between blocks")
                    .with_context("left", self.rows().to_string())
                    .with_context("right", block.rows().to_string()),
            ));
        }
        for incoming in block.columns {
            if self.has_column(&incoming.name) {
                return Err(duplicate_column(&incoming.name));
            }
            self.columns.push(incoming);
        }
        Ok(())
    }

    /// Copies the named columns into a new table, in the requested order.
    pub fn select(&self, names: &[&str]) -> Result<Table, MvxError> {
        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            let cells = self.column(name)?;
            columns.push(Column {
                name: (*name).to_string(),
                cells: cells.to_vec(),
            });
        }
        Ok(Table { columns })
    }

    /// Renames a column in place.
    pub fn rename(&mut self, from: &str, to: impl Into<String>) -> Result<(), MvxError> {
        let to = to.into();
        if to != from && self.has_column(&to) {
            return Err(duplicate_column(&to));
        }
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.name == from)
            .ok_or_else(|| unknown_column(from))?;
        column.name = to;
        Ok(())
    }

    /// Extends every column with missing markers until the table is
    /// `target` rows tall. Padding never discards data: a table already
    /// taller than `target` is an error.
    pub fn pad_to(&mut self, target: usize) -> Result<(), MvxError> {
        if self.columns.is_empty() {
            if target == 0 {
                return Ok(());
            }
            return Err(MvxError::Table(
                ErrorInfo::new("pad-empty", "cannot pad a table with no columns")
                    .with_context("target", target.to_string()),
            ));
        }
        let rows = self.rows();
        if rows > target {
            return Err(MvxError::Table(
                ErrorInfo::new("pad-overflow", "block is taller than its padding target")
                    .with_context("rows", rows.to_string())
                    .with_context("target", target.to_string()),
            ));
        }
        for column in &mut self.columns {
            column.cells.resize(target, Cell::Missing);
        }
        Ok(())
    }

    /// Coerces every text cell of a column to a finite number. Fields
    /// that trim to nothing become missing markers; anything else that
    /// fails to parse, or parses to a non-finite value, is an error.
    pub fn coerce_numeric(&mut self, name: &str) -> Result<(), MvxError> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| unknown_column(name))?;
        for (row, cell) in column.cells.iter_mut().enumerate() {
            let replacement = match cell {
                Cell::Text(raw) => {
                    let trimmed = raw.trim();
                    if trimmed.is_empty() {
                        Cell::Missing
                    } else {
                        match trimmed.parse::<f64>() {
                            Ok(value) if value.is_finite() => Cell::Number(value),
                            Ok(_) => {
                                return Err(MvxError::Coerce(
                                    ErrorInfo::new("non-finite", "field parses to a non-finite number")
                                        .with_context("column", name)
                                        .with_context("row", row.to_string())
                                        .with_context("value", trimmed),
                                ))
                            }
                            Err(_) => {
                                return Err(MvxError::Coerce(
                                    ErrorInfo::new("not-numeric", "field does not parse as a number")
                                        .with_context("column", name)
                                        .with_context("row", row.to_string())
                                        .with_context("value", trimmed),
                                ))
                            }
                        }
                    }
                }
                _ => continue,
            };
            *cell = replacement;
        }
        Ok(())
    }

    pub(crate) fn row_fields(&self, row: usize) -> Vec<String> {
        self.columns.iter().map(|c| c.cells[row].to_field()).collect()
    }
}

fn unknown_column(name: &str) -> MvxError {
    MvxError::Schema(
        ErrorInfo::new("unknown-column", "no column with this name").with_context("column", name),
    )
}

fn duplicate_column(name: &str) -> MvxError {
    MvxError::Schema(
        ErrorInfo::new("duplicate-column", "column name already present")
            .with_context("column", name),
    )
}
