//! Raw record reader with typed recovery outcomes.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::ReaderBuilder;
use mvx_core::{ErrorInfo, MvxError};
use mvx_table::{Cell, Table};

use crate::report::DefaultReason;

/// Result of reading one experiment file.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    /// The file parsed; the block is as tall as the file was.
    Rows(Table),
    /// The file is not there: that part of the experiment never ran.
    Absent,
    /// The file exists but cannot be decoded into records.
    Corrupt {
        /// Decoder diagnostic, carried into the run report.
        detail: String,
    },
}

/// Reads a whole experiment file into a block with the given column names.
///
/// Fields arrive as raw text (empty fields as missing markers) and no type
/// is inferred beyond that. Completely blank records are skipped. A record
/// with the wrong field count is not recoverable: the file belongs to a
/// different layout, and guessing would misalign every block after it.
pub fn read_records(path: &Path, columns: &[String]) -> Result<ReadOutcome, MvxError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(ReadOutcome::Absent),
        Err(err) => {
            return Ok(ReadOutcome::Corrupt {
                detail: err.to_string(),
            })
        }
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                return Ok(ReadOutcome::Corrupt {
                    detail: err.to_string(),
                })
            }
        };
        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() != columns.len() {
            return Err(MvxError::Schema(
                ErrorInfo::new("record-width", "unexpected field count in record")
                    .with_context("path", path.display().to_string())
                    .with_context("record", idx.to_string())
                    .with_context("expected", columns.len().to_string())
                    .with_context("found", record.len().to_string()),
            ));
        }
        rows.push(record.iter().map(field_cell).collect());
    }
    Ok(ReadOutcome::Rows(Table::from_rows(columns, rows)?))
}

/// Reads a block and forces it to the canonical height. Absent or corrupt
/// files yield a fully missing block plus the reason, so a single bad file
/// can never change the dataset's shape.
pub fn read_padded(
    path: &Path,
    columns: &[String],
    rows: usize,
) -> Result<(Table, Option<(DefaultReason, Option<String>)>), MvxError> {
    match read_records(path, columns)? {
        ReadOutcome::Rows(mut block) => {
            block
                .pad_to(rows)
                .map_err(|err| err.with_context("path", path.display().to_string()))?;
            Ok((block, None))
        }
        ReadOutcome::Absent => Ok((
            Table::blank(columns, rows),
            Some((DefaultReason::Absent, None)),
        )),
        ReadOutcome::Corrupt { detail } => Ok((
            Table::blank(columns, rows),
            Some((DefaultReason::Corrupt, Some(detail))),
        )),
    }
}

fn field_cell(field: &str) -> Cell {
    if field.is_empty() {
        Cell::Missing
    } else {
        Cell::Text(field.to_string())
    }
}
