//! Line, aggregate and diff table types

use std::cmp::Ordering;
use std::fmt;

/// How line data is retrieved for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalMode {
    /// One SuiteQL query covering every requested ID
    Bulk,
    /// One REST Records lookup per requested ID
    Fallback,
}

impl fmt::Display for RetrievalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrievalMode::Bulk => write!(f, "SuiteQL"),
            RetrievalMode::Fallback => write!(f, "REST Records"),
        }
    }
}

/// Which side of the comparison a set of IDs belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    A,
    B,
}

impl Group {
    pub fn label(&self) -> &'static str {
        match self {
            Group::A => "Group A",
            Group::B => "Group B",
        }
    }
}

/// One non-mainline, open line of a sales order
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    pub record_id: i64,
    pub item_id: Option<i64>,
    pub item_name: String,
    pub quantity: f64,
}

/// Grouping key: item identity as seen by both retrieval paths
pub type ItemKey = (Option<i64>, String);

#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedRow {
    pub item_id: Option<i64>,
    pub item_name: String,
    pub total_quantity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiffRow {
    pub item_id: Option<i64>,
    pub item_name: String,
    pub qty_a: f64,
    pub qty_b: f64,
    pub diff: f64,
}

impl DiffRow {
    /// Output ordering: item name, then item id with absent ids last
    pub fn output_order(&self, other: &Self) -> Ordering {
        self.item_name
            .cmp(&other.item_name)
            .then_with(|| match (self.item_id, other.item_id) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    }
}

/// Presentation of one numeric column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Every value in the column is whole
    Integer,
    Decimal,
}

impl NumberFormat {
    pub fn for_column<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        if values.into_iter().all(|v| v.fract() == 0.0) {
            NumberFormat::Integer
        } else {
            NumberFormat::Decimal
        }
    }

    /// Plain positional notation; negative zero renders as zero
    pub fn render(&self, value: f64) -> String {
        // -0.0 + 0.0 == +0.0
        let value = value + 0.0;
        match self {
            NumberFormat::Integer => format!("{}", value),
            NumberFormat::Decimal if value.is_finite() && value.fract() == 0.0 => {
                format!("{}.0", value)
            }
            NumberFormat::Decimal => format!("{}", value),
        }
    }
}

/// Quantity columns of the diff table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QtyColumn {
    A,
    B,
    Diff,
}

/// Output column headers in their fixed order
pub const OUTPUT_COLUMNS: [&str; 5] = ["item_id", "item_name", "qty_A", "qty_B", "diff_A_minus_B"];

/// Sorted, zero-free diff rows plus per-column number formats
#[derive(Debug, Clone, PartialEq)]
pub struct DiffTable {
    pub rows: Vec<DiffRow>,
    pub qty_a_format: NumberFormat,
    pub qty_b_format: NumberFormat,
    pub diff_format: NumberFormat,
}

impl DiffTable {
    /// Build a table, deciding each column's format from its values
    pub fn new(rows: Vec<DiffRow>) -> Self {
        Self {
            qty_a_format: NumberFormat::for_column(rows.iter().map(|r| r.qty_a)),
            qty_b_format: NumberFormat::for_column(rows.iter().map(|r| r.qty_b)),
            diff_format: NumberFormat::for_column(rows.iter().map(|r| r.diff)),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn format_of(&self, column: QtyColumn) -> NumberFormat {
        match column {
            QtyColumn::A => self.qty_a_format,
            QtyColumn::B => self.qty_b_format,
            QtyColumn::Diff => self.diff_format,
        }
    }

    /// String cells for one row, in `OUTPUT_COLUMNS` order
    pub fn render_row(&self, row: &DiffRow) -> [String; 5] {
        [
            row.item_id.map(|id| id.to_string()).unwrap_or_default(),
            row.item_name.clone(),
            self.qty_a_format.render(row.qty_a),
            self.qty_b_format.render(row.qty_b),
            self.diff_format.render(row.diff),
        ]
    }
}
