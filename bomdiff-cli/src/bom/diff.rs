//! A minus B comparison of two aggregated groups

use anyhow::{Context, Result};
use std::collections::BTreeMap;

use super::aggregate::aggregate;
use super::lines::fetch_lines;
use super::models::{AggregatedRow, DiffRow, DiffTable, Group, ItemKey, LineRecord, RetrievalMode};
use crate::api::ErpApi;

/// Outer-join two aggregated tables and keep the non-zero differences.
///
/// Items missing on one side count as 0 there. Rows are sorted by item name,
/// then item id.
pub fn diff(group_a: &[AggregatedRow], group_b: &[AggregatedRow]) -> DiffTable {
    let mut joined: BTreeMap<ItemKey, (f64, f64)> = BTreeMap::new();

    for row in group_a {
        joined
            .entry((row.item_id, row.item_name.clone()))
            .or_insert((0.0, 0.0))
            .0 += row.total_quantity;
    }
    for row in group_b {
        joined
            .entry((row.item_id, row.item_name.clone()))
            .or_insert((0.0, 0.0))
            .1 += row.total_quantity;
    }

    let mut rows: Vec<DiffRow> = joined
        .into_iter()
        .filter_map(|((item_id, item_name), (qty_a, qty_b))| {
            let diff = qty_a - qty_b;
            (diff != 0.0).then_some(DiffRow {
                item_id,
                item_name,
                qty_a,
                qty_b,
                diff,
            })
        })
        .collect();

    rows.sort_by(DiffRow::output_order);
    DiffTable::new(rows)
}

/// Aggregate both line sets and diff them
pub fn diff_lines(
    lines_a: &[LineRecord],
    lines_b: &[LineRecord],
    count_absolute_line_qty: bool,
) -> DiffTable {
    diff(
        &aggregate(lines_a, count_absolute_line_qty),
        &aggregate(lines_b, count_absolute_line_qty),
    )
}

/// Fetch both groups with the same retrieval mode and compute A minus B
pub async fn compare_groups(
    api: &dyn ErpApi,
    mode: RetrievalMode,
    group_a: &[i64],
    group_b: &[i64],
    count_absolute_line_qty: bool,
) -> Result<DiffTable> {
    let lines_a = fetch_lines(api, mode, group_a)
        .await
        .with_context(|| format!("Failed to fetch {} lines", Group::A.label()))?;
    let lines_b = fetch_lines(api, mode, group_b)
        .await
        .with_context(|| format!("Failed to fetch {} lines", Group::B.label()))?;

    let table = diff_lines(&lines_a, &lines_b, count_absolute_line_qty);
    log::info!("Rows in A - B with non-zero diff: {}", table.len());
    Ok(table)
}
