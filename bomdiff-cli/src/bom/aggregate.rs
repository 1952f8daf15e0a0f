//! Per-item quantity totals within one group

use std::collections::BTreeMap;

use super::models::{AggregatedRow, ItemKey, LineRecord};

/// Sum line quantities per `(item_id, item_name)`.
///
/// With `count_absolute_line_qty`, negative lines (reversals, credits) count as
/// positive occurrences instead of cancelling out other lines of the same item.
pub fn aggregate(lines: &[LineRecord], count_absolute_line_qty: bool) -> Vec<AggregatedRow> {
    let mut totals: BTreeMap<ItemKey, f64> = BTreeMap::new();

    for line in lines {
        let qty = if count_absolute_line_qty {
            line.quantity.abs()
        } else {
            line.quantity
        };
        *totals
            .entry((line.item_id, line.item_name.clone()))
            .or_insert(0.0) += qty;
    }

    totals
        .into_iter()
        .map(|((item_id, item_name), total_quantity)| AggregatedRow {
            item_id,
            item_name,
            total_quantity,
        })
        .collect()
}
