//! CSV export for assembled tables.

use std::fs;
use std::path::Path;

use csv::WriterBuilder;
use mvx_core::{ErrorInfo, MvxError};

use crate::table::Table;

/// Writes the table as headered CSV. Missing cells become empty fields;
/// whole numbers print without a fractional part.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), MvxError> {
    ensure_parent(path)?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|err| {
            MvxError::Serde(
                ErrorInfo::new("export-open", "failed to open CSV output")
                    .with_context("path", path.display().to_string())
                    .with_hint(err.to_string()),
            )
        })?;
    writer
        .write_record(table.column_names())
        .map_err(|err| wrap_csv("export-header", err))?;
    for row in 0..table.rows() {
        writer
            .write_record(table.row_fields(row))
            .map_err(|err| wrap_csv("export-row", err))?;
    }
    writer
        .flush()
        .map_err(|err| wrap_csv("export-flush", err.into()))?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), MvxError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            MvxError::Serde(
                ErrorInfo::new("export-create", "failed to create output directory")
                    .with_context("path", parent.display().to_string())
                    .with_hint(err.to_string()),
            )
        })?
    }
    Ok(())
}

fn wrap_csv(code: &str, err: csv::Error) -> MvxError {
    MvxError::Serde(ErrorInfo::new(code, "CSV export failure").with_hint(err.to_string()))
}
