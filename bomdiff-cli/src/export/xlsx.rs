//! Spreadsheet export of the diff table (cargo feature `xlsx`)

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use crate::bom::{DiffTable, NumberFormat, OUTPUT_COLUMNS, QtyColumn};

pub const SHEET_NAME: &str = "A_minus_B";

/// Write the diff table to a single-sheet workbook
pub fn export_diff_to_xlsx(table: &DiffTable, file_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, name) in OUTPUT_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }

    let integer = Format::new().set_num_format("0");
    let decimal = Format::new().set_num_format("General");
    let format_for = |column: QtyColumn| match table.format_of(column) {
        NumberFormat::Integer => &integer,
        NumberFormat::Decimal => &decimal,
    };

    for (idx, row) in table.rows.iter().enumerate() {
        let r = (idx + 1) as u32;

        if let Some(item_id) = row.item_id {
            sheet.write_number(r, 0, item_id as f64)?;
        }
        sheet.write_string(r, 1, &row.item_name)?;
        write_qty(sheet, r, 2, row.qty_a, format_for(QtyColumn::A))?;
        write_qty(sheet, r, 3, row.qty_b, format_for(QtyColumn::B))?;
        write_qty(sheet, r, 4, row.diff, format_for(QtyColumn::Diff))?;
    }

    sheet.autofit();

    workbook
        .save(file_path)
        .with_context(|| format!("Failed to save Excel file: {}", file_path.display()))?;

    log::info!("Excel file exported to: {}", file_path.display());
    Ok(())
}

fn write_qty(sheet: &mut Worksheet, row: u32, col: u16, value: f64, format: &Format) -> Result<()> {
    sheet.write_number_with_format(row, col, value, format)?;
    Ok(())
}
