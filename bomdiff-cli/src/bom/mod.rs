//! Bill-of-materials diff pipeline
//!
//! fetch lines (bulk or fallback) -> aggregate per item -> outer-join A and B
//! -> drop zero differences -> sort.

pub mod aggregate;
pub mod audit;
pub mod diff;
pub mod lines;
pub mod models;
pub mod probe;
pub mod values;
pub mod verify;

pub use aggregate::aggregate;
pub use audit::negative_lines;
pub use diff::{compare_groups, diff, diff_lines};
pub use lines::{fetch_lines, lines_from_record, lines_from_rows};
pub use models::{
    AggregatedRow, DiffRow, DiffTable, Group, LineRecord, NumberFormat, OUTPUT_COLUMNS, QtyColumn,
    RetrievalMode,
};
pub use probe::{CatalogProbe, check_connectivity, probe_catalogs, select_mode};
pub use verify::{VerificationReport, verify_sales_orders};
