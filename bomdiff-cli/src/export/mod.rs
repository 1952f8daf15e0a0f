//! Output writers for the diff table
//!
//! CSV is always produced. The spreadsheet is optional: it needs the `xlsx`
//! feature compiled in and a destination path, and is skipped otherwise. A
//! failed spreadsheet write is reported, never returned as an error.

pub mod csv_exporter;
#[cfg(feature = "xlsx")]
pub mod xlsx;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::bom::DiffTable;

pub use csv_exporter::export_diff_to_csv;

/// Whether this build can write spreadsheets
pub const fn xlsx_available() -> bool {
    cfg!(feature = "xlsx")
}

/// Why the spreadsheet was not written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XlsxSkip {
    /// No destination was given
    NoPath,
    /// Built without the `xlsx` feature
    Unavailable,
    /// Writing the workbook failed; holds the error chain
    Failed(String),
}

/// Files produced by `write_outputs`
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenOutputs {
    pub csv: PathBuf,
    pub xlsx: Result<PathBuf, XlsxSkip>,
}

/// Write CSV unconditionally and XLSX when possible
pub fn write_outputs(
    table: &DiffTable,
    csv_path: &Path,
    xlsx_path: Option<&Path>,
) -> Result<WrittenOutputs> {
    export_diff_to_csv(table, csv_path)?;

    let xlsx = match xlsx_path {
        None => Err(XlsxSkip::NoPath),
        Some(_) if !xlsx_available() => {
            log::warn!("Skipped XLSX (built without spreadsheet support)");
            Err(XlsxSkip::Unavailable)
        }
        Some(path) => match write_xlsx(table, path) {
            Ok(()) => Ok(absolute(path)),
            Err(e) => {
                log::warn!("Skipped XLSX ({:#})", e);
                Err(XlsxSkip::Failed(format!("{:#}", e)))
            }
        },
    };

    Ok(WrittenOutputs {
        csv: absolute(csv_path),
        xlsx,
    })
}

#[cfg(feature = "xlsx")]
fn write_xlsx(table: &DiffTable, path: &Path) -> Result<()> {
    xlsx::export_diff_to_xlsx(table, path)
}

#[cfg(not(feature = "xlsx"))]
fn write_xlsx(_table: &DiffTable, _path: &Path) -> Result<()> {
    Ok(())
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
