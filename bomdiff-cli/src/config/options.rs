//! Options for a single diff run

use std::path::PathBuf;

/// Default CSV file name, written to the current directory when no path is given
pub const DEFAULT_CSV_NAME: &str = "bomdiff_A_minus_B.csv";

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Sum absolute line quantities so reversal/credit lines count as occurrences
    pub count_absolute_line_qty: bool,
    /// CSV destination (always written)
    pub csv_path: PathBuf,
    /// Optional spreadsheet destination
    pub xlsx_path: Option<PathBuf>,
    /// Run the negative-line audit before diffing
    pub diagnostics: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            count_absolute_line_qty: true,
            csv_path: PathBuf::from(DEFAULT_CSV_NAME),
            xlsx_path: None,
            diagnostics: false,
        }
    }
}
