//! CSV export of the diff table

use anyhow::{Context, Result};
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::bom::{DiffTable, OUTPUT_COLUMNS};

/// UTF-8 byte-order mark so spreadsheet apps detect the encoding
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write the diff table as UTF-8 CSV with a BOM
pub fn export_diff_to_csv(table: &DiffTable, file_path: &Path) -> Result<()> {
    let mut file = File::create(file_path)
        .with_context(|| format!("Failed to create CSV file: {}", file_path.display()))?;
    file.write_all(UTF8_BOM)
        .context("Failed to write CSV byte-order mark")?;

    let mut wtr = Writer::from_writer(file);

    wtr.write_record(OUTPUT_COLUMNS)
        .context("Failed to write CSV header")?;

    for row in &table.rows {
        wtr.write_record(table.render_row(row))
            .with_context(|| format!("Failed to write item: {}", row.item_name))?;
    }

    wtr.flush().context("Failed to flush CSV writer")?;

    log::info!("CSV file exported to: {}", file_path.display());
    Ok(())
}
