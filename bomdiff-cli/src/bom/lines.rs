//! Line extraction for both retrieval modes
//!
//! Bulk mode reads every requested order's lines with one SuiteQL query.
//! Fallback mode fetches each sales order through REST Records, one at a time,
//! and walks its `item` sublist. Both produce the same `LineRecord` shape.

use anyhow::{Context, Result};
use serde_json::Value;

use super::models::{LineRecord, RetrievalMode};
use super::values::{non_empty_str, parse_id, parse_quantity};
use crate::api::query::sales_order_lines_query;
use crate::api::{ErpApi, Row};
use crate::input::dedup_ids;

/// REST record type for sales orders
pub const SALES_ORDER_RECORD: &str = "salesorder";

/// Fetch the lines of `ids` using the run's retrieval mode.
///
/// Each order contributes its lines once, however often its ID is repeated.
pub async fn fetch_lines(
    api: &dyn ErpApi,
    mode: RetrievalMode,
    ids: &[i64],
) -> Result<Vec<LineRecord>> {
    let ids = dedup_ids(ids);
    match mode {
        RetrievalMode::Bulk => fetch_lines_bulk(api, &ids).await,
        RetrievalMode::Fallback => fetch_lines_fallback(api, &ids).await,
    }
}

pub async fn fetch_lines_bulk(api: &dyn ErpApi, ids: &[i64]) -> Result<Vec<LineRecord>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = api
        .suiteql(&sales_order_lines_query(ids))
        .await
        .context("Failed to fetch sales order lines via SuiteQL")?;

    let lines = lines_from_rows(&rows);
    log::info!("Fetched {} lines for {} orders (SuiteQL)", lines.len(), ids.len());
    Ok(lines)
}

pub async fn fetch_lines_fallback(api: &dyn ErpApi, ids: &[i64]) -> Result<Vec<LineRecord>> {
    let mut lines = Vec::new();

    for &id in ids {
        let record = api
            .get_record(SALES_ORDER_RECORD, id)
            .await
            .with_context(|| format!("Failed to fetch sales order {} via REST Records", id))?;

        match record {
            Some(record) => lines.extend(lines_from_record(id, &record)),
            None => log::warn!("Sales order {} not found; skipping", id),
        }
    }

    log::info!(
        "Fetched {} lines for {} orders (REST Records)",
        lines.len(),
        ids.len()
    );
    Ok(lines)
}

/// Convert SuiteQL rows (`so_id`, `item_id`, `item_name`, `line_qty`) to lines
pub fn lines_from_rows(rows: &[Row]) -> Vec<LineRecord> {
    rows.iter().filter_map(line_from_row).collect()
}

fn line_from_row(row: &Row) -> Option<LineRecord> {
    let Some(record_id) = parse_id(row.get("so_id")) else {
        log::warn!("Skipping SuiteQL line without a usable so_id: {:?}", row.get("so_id"));
        return None;
    };

    Some(LineRecord {
        record_id,
        item_id: parse_id(row.get("item_id")),
        item_name: non_empty_str(row.get("item_name"))
            .unwrap_or_default()
            .to_string(),
        quantity: parse_quantity(row.get("line_qty")),
    })
}

/// Extract open lines from an expanded REST sales order
pub fn lines_from_record(record_id: i64, record: &Value) -> Vec<LineRecord> {
    sublist_lines(record)
        .iter()
        .filter(|line| line.get("isClosed").and_then(Value::as_bool) != Some(true))
        .map(|line| {
            let item = line.get("item").filter(|v| v.is_object());
            let field = |key: &str| item.and_then(|i| i.get(key));

            LineRecord {
                record_id,
                item_id: parse_id(field("id")).or_else(|| parse_id(field("value"))),
                item_name: non_empty_str(field("refName"))
                    .or_else(|| non_empty_str(field("text")))
                    .or_else(|| non_empty_str(field("name")))
                    .unwrap_or_default()
                    .to_string(),
                quantity: parse_quantity(line.get("quantity")),
            }
        })
        .collect()
}

/// The `item` sublist: either a bare array or a collection object with `items`
fn sublist_lines(record: &Value) -> &[Value] {
    match record.get("item") {
        Some(Value::Array(lines)) => lines,
        Some(Value::Object(collection)) => match collection.get("items") {
            Some(Value::Array(lines)) => lines,
            _ => &[],
        },
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeErp, closed_line, line};
    use serde_json::json;

    #[test]
    fn test_record_lines_skip_closed_and_coerce() {
        let record = json!({
            "id": "100",
            "item": {
                "items": [
                    {"item": {"id": "11", "refName": "BOLT-10"}, "quantity": 3, "isClosed": false},
                    {"item": {"id": "12", "refName": "NUT-10"}, "quantity": 5, "isClosed": true},
                    {"item": {"value": "13", "text": "WASHER"}, "quantity": "2.5"},
                    {"item": {"id": "14", "name": "SPRING"}, "quantity": "n/a"},
                    {"quantity": 1}
                ]
            }
        });

        let lines = lines_from_record(100, &record);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].item_id, Some(11));
        assert_eq!(lines[0].item_name, "BOLT-10");
        assert_eq!(lines[1].item_id, Some(13));
        assert_eq!(lines[1].item_name, "WASHER");
        assert_eq!(lines[1].quantity, 2.5);
        assert_eq!(lines[2].item_name, "SPRING");
        assert_eq!(lines[2].quantity, 0.0);
        assert_eq!(lines[3].item_id, None);
        assert_eq!(lines[3].item_name, "");
    }

    #[test]
    fn test_record_lines_accept_bare_array_sublist() {
        let record = json!({
            "item": [
                {"item": {"id": 7, "refName": "GEAR"}, "quantity": -2}
            ]
        });

        let lines = lines_from_record(5, &record);

        assert_eq!(
            lines,
            vec![LineRecord {
                record_id: 5,
                item_id: Some(7),
                item_name: "GEAR".to_string(),
                quantity: -2.0,
            }]
        );
    }

    #[test]
    fn test_id_field_preferred_over_value() {
        let record = json!({
            "item": [{"item": {"id": "1", "value": "2", "refName": "A"}, "quantity": 1}]
        });

        assert_eq!(lines_from_record(1, &record)[0].item_id, Some(1));
    }

    #[test]
    fn test_record_without_sublist_has_no_lines() {
        assert!(lines_from_record(1, &json!({"id": "1"})).is_empty());
        assert!(lines_from_record(1, &json!({"item": "oops"})).is_empty());
    }

    #[test]
    fn test_rows_with_null_quantity_default_to_zero() {
        let rows: Vec<Row> = vec![
            json!({"so_id": "1", "item_id": "10", "item_name": "A", "line_qty": null}),
            json!({"so_id": "1", "item_id": null, "item_name": null, "line_qty": "4"}),
            json!({"so_id": null, "item_id": "10", "item_name": "A", "line_qty": "1"}),
        ]
        .into_iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect();

        let lines = lines_from_rows(&rows);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, 0.0);
        assert_eq!(lines[1].item_id, None);
        assert_eq!(lines[1].item_name, "");
        assert_eq!(lines[1].quantity, 4.0);
    }

    #[tokio::test]
    async fn test_bulk_issues_one_query() {
        let api = FakeErp::new()
            .order(1, vec![line(10, "A", 2.0), closed_line(11, "B", 9.0)])
            .order(2, vec![line(10, "A", 1.0)]);

        let lines = fetch_lines(&api, RetrievalMode::Bulk, &[1, 2]).await.unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(api.query_calls(), 1);
        assert_eq!(api.record_calls(), 0);
    }

    #[tokio::test]
    async fn test_bulk_with_no_ids_skips_query() {
        let api = FakeErp::new();

        let lines = fetch_lines(&api, RetrievalMode::Bulk, &[]).await.unwrap();

        assert!(lines.is_empty());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_fallback_fetches_each_id_and_skips_missing() {
        let api = FakeErp::new()
            .order(1, vec![line(10, "A", 2.0), closed_line(11, "B", 9.0)])
            .order(2, vec![line(12, "C", 1.0)]);

        let lines = fetch_lines(&api, RetrievalMode::Fallback, &[1, 99, 2])
            .await
            .unwrap();

        assert_eq!(api.record_calls(), 3);
        assert_eq!(api.query_calls(), 0);
        assert_eq!(
            lines.iter().map(|l| l.item_id).collect::<Vec<_>>(),
            vec![Some(10), Some(12)]
        );
    }

    #[tokio::test]
    async fn test_repeated_ids_are_requested_once() {
        let api = FakeErp::new().order(1, vec![line(10, "A", 2.0)]);

        fetch_lines(&api, RetrievalMode::Bulk, &[1, 1]).await.unwrap();
        fetch_lines(&api, RetrievalMode::Fallback, &[1, 1]).await.unwrap();

        let calls = api.calls();
        assert!(matches!(&calls[0], Call::Query(q) if q.contains("IN (1)")));
        assert_eq!(api.record_calls(), 1);
    }

    #[tokio::test]
    async fn test_fallback_aborts_on_access_error() {
        let api = FakeErp::new()
            .order(1, vec![line(10, "A", 2.0)])
            .fail_record(2);

        let err = fetch_lines(&api, RetrievalMode::Fallback, &[1, 2])
            .await
            .unwrap_err();

        assert!(format!("{:#}", err).contains("HTTP 403"));
    }

    #[tokio::test]
    async fn test_bulk_failure_surfaces_status() {
        let api = FakeErp::new().deny_table("transactionline");

        let err = fetch_lines(&api, RetrievalMode::Bulk, &[1]).await.unwrap_err();
        let api_err = err
            .downcast_ref::<crate::error::BomDiffError>()
            .expect("typed API error");

        assert_eq!(api_err.status(), Some(400));
    }
}
