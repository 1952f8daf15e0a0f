//! In-memory ERP used by unit tests
//!
//! Serves both SuiteQL rows and REST Records from the same order data, so the
//! two retrieval paths can be compared against each other.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use crate::api::query::CONNECTIVITY_CHECK;
use crate::api::{ErpApi, Row};
use crate::bom::values::parse_quantity;
use crate::error::BomDiffError;

#[derive(Debug, Clone)]
pub struct FakeLine {
    pub item_id: Option<i64>,
    pub item_name: Option<String>,
    pub quantity: Value,
    pub closed: bool,
}

pub fn line(item_id: i64, item_name: &str, quantity: f64) -> FakeLine {
    FakeLine {
        item_id: Some(item_id),
        item_name: Some(item_name.to_string()),
        quantity: json!(quantity),
        closed: false,
    }
}

pub fn closed_line(item_id: i64, item_name: &str, quantity: f64) -> FakeLine {
    FakeLine {
        closed: true,
        ..line(item_id, item_name, quantity)
    }
}

#[derive(Debug, Clone)]
struct FakeOrder {
    tran_id: String,
    sales_order: bool,
    lines: Vec<FakeLine>,
}

/// Calls observed by the fake, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Query(String),
    Record(i64),
}

#[derive(Default)]
pub struct FakeErp {
    orders: BTreeMap<i64, FakeOrder>,
    denied_tables: HashSet<String>,
    failing_records: HashSet<i64>,
    offline: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeErp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(mut self, id: i64, lines: Vec<FakeLine>) -> Self {
        self.orders.insert(
            id,
            FakeOrder {
                tran_id: format!("SO{}", id),
                sales_order: true,
                lines,
            },
        );
        self
    }

    /// A transaction that exists but is not a sales order
    pub fn other_transaction(mut self, id: i64) -> Self {
        self.orders.insert(
            id,
            FakeOrder {
                tran_id: format!("INV{}", id),
                sales_order: false,
                lines: Vec::new(),
            },
        );
        self
    }

    /// Queries touching this table fail as if the role lacked access
    pub fn deny_table(mut self, table: &str) -> Self {
        self.denied_tables.insert(table.to_string());
        self
    }

    /// REST lookups of this record fail with 403
    pub fn fail_record(mut self, id: i64) -> Self {
        self.failing_records.insert(id);
        self
    }

    /// Every SuiteQL call fails
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn record_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Record(_)))
            .count()
    }

    pub fn query_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Query(_)))
            .count()
    }

    fn denied(&self, query: &str) -> Option<&str> {
        self.denied_tables
            .iter()
            .find(|t| query.contains(&format!("\"{}\"", t)))
            .map(String::as_str)
    }

    fn line_rows(&self, query: &str) -> Vec<Row> {
        let negatives_only = query.contains("quantity < 0");
        let mut rows = Vec::new();

        for id in parse_in_list(query) {
            let Some(order) = self.orders.get(&id) else {
                continue;
            };
            for l in &order.lines {
                if negatives_only {
                    if parse_quantity(Some(&l.quantity)) >= 0.0 {
                        continue;
                    }
                } else if l.closed {
                    continue;
                }
                rows.push(to_row(json!({
                    "so_id": id.to_string(),
                    "item_id": l.item_id.map(|i| i.to_string()),
                    "item_name": l.item_name,
                    "line_qty": l.quantity,
                })));
            }
        }

        if negatives_only {
            rows.sort_by_key(|r| {
                (
                    r["so_id"].as_str().unwrap_or_default().to_string(),
                    r["item_name"].as_str().unwrap_or_default().to_string(),
                )
            });
        }
        rows
    }

    fn verify_rows(&self, query: &str) -> Vec<Row> {
        parse_in_list(query)
            .into_iter()
            .filter_map(|id| {
                let order = self.orders.get(&id)?;
                order.sales_order.then(|| {
                    to_row(json!({
                        "id": id.to_string(),
                        "tranid": order.tran_id,
                        "type": "SalesOrd",
                    }))
                })
            })
            .collect()
    }
}

#[async_trait]
impl ErpApi for FakeErp {
    async fn suiteql(&self, query: &str) -> Result<Vec<Row>> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Query(query.trim().to_string()));

        if self.offline {
            return Err(BomDiffError::api(503, "suiteql", "Service Unavailable", Some(query)).into());
        }
        if let Some(table) = self.denied(query) {
            let body = format!("Invalid search query. Record '{}' was not found.", table);
            return Err(BomDiffError::api(400, "suiteql", &body, Some(query)).into());
        }

        let q = query.trim();
        if q == CONNECTIVITY_CHECK {
            return Ok(vec![to_row(json!({ "ok": 1 }))]);
        }
        if q.starts_with("SELECT 1 FROM") {
            return Ok(vec![to_row(json!({ "expr1": 1 }))]);
        }
        if q.contains(r#"FROM "transactionline""#) {
            return Ok(self.line_rows(q));
        }
        if q.contains(r#"FROM "transaction""#) {
            return Ok(self.verify_rows(q));
        }
        Err(anyhow!("unexpected query: {}", q))
    }

    async fn get_record(&self, record_type: &str, id: i64) -> Result<Option<Value>> {
        self.calls.lock().unwrap().push(Call::Record(id));
        assert_eq!(record_type, "salesorder");

        if self.failing_records.contains(&id) {
            let endpoint = format!("record/{}/{}", record_type, id);
            return Err(BomDiffError::api(403, endpoint, "Permission Violation", None).into());
        }

        let Some(order) = self.orders.get(&id).filter(|o| o.sales_order) else {
            return Ok(None);
        };

        let items: Vec<Value> = order
            .lines
            .iter()
            .map(|l| {
                let mut item = serde_json::Map::new();
                if let Some(item_id) = l.item_id {
                    item.insert("id".to_string(), json!(item_id.to_string()));
                }
                if let Some(name) = &l.item_name {
                    item.insert("refName".to_string(), json!(name));
                }
                json!({
                    "item": item,
                    "quantity": l.quantity,
                    "isClosed": l.closed,
                })
            })
            .collect();

        Ok(Some(json!({
            "id": id.to_string(),
            "tranId": order.tran_id,
            "item": {
                "links": [],
                "items": items,
                "totalResults": order.lines.len(),
            },
        })))
    }
}

fn to_row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        _ => Row::new(),
    }
}

/// Distinct IDs from the first `IN (...)` clause of a query, as SQL would match them
fn parse_in_list(query: &str) -> Vec<i64> {
    let Some(start) = query.find("IN (") else {
        return Vec::new();
    };
    let rest = &query[start + 4..];
    let end = rest.find(')').unwrap_or(rest.len());
    let ids: Vec<i64> = rest[..end]
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    crate::input::dedup_ids(&ids)
}
