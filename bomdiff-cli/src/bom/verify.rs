//! Diagnostic check that each requested ID resolves to a sales order

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt;

use super::lines::SALES_ORDER_RECORD;
use super::models::RetrievalMode;
use super::values::{display_str, parse_id};
use crate::api::ErpApi;
use crate::api::query::verify_sales_orders_query;
use crate::input::dedup_ids;

/// How many resolved IDs the summary lists
const LISTED_FOUND: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    pub label: String,
    pub mode: RetrievalMode,
    pub requested: usize,
    /// Resolved IDs with their transaction numbers, in request order
    pub found: Vec<(i64, String)>,
    pub missing: Vec<i64>,
}

impl VerificationReport {
    pub fn all_found(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.requested == 0 {
            return write!(f, "{}: 0 IDs provided", self.label);
        }
        write!(
            f,
            "{} ({}): found {} Sales Orders out of {} IDs",
            self.label,
            self.mode,
            self.found.len(),
            self.requested
        )?;
        for (id, tran_id) in self.found.iter().take(LISTED_FOUND) {
            write!(f, "\n  {} → {}", id, tran_id)?;
        }
        if self.found.len() > LISTED_FOUND {
            write!(f, "\n  … and {} more", self.found.len() - LISTED_FOUND)?;
        }
        if !self.missing.is_empty() {
            let missing: Vec<String> = self.missing.iter().map(|id| id.to_string()).collect();
            write!(f, "\n  Missing: {}", missing.join(", "))?;
        }
        Ok(())
    }
}

/// Resolve `ids` as sales orders using the run's retrieval mode
pub async fn verify_sales_orders(
    api: &dyn ErpApi,
    mode: RetrievalMode,
    ids: &[i64],
    label: &str,
) -> Result<VerificationReport> {
    let unique = dedup_ids(ids);
    let ids = unique.as_slice();
    let found = if ids.is_empty() {
        Vec::new()
    } else {
        match mode {
            RetrievalMode::Bulk => resolve_bulk(api, ids).await?,
            RetrievalMode::Fallback => resolve_fallback(api, ids).await?,
        }
    };

    let missing = ids
        .iter()
        .copied()
        .filter(|id| !found.iter().any(|(f, _)| f == id))
        .collect();

    let report = VerificationReport {
        label: label.to_string(),
        mode,
        requested: ids.len(),
        found,
        missing,
    };
    log::info!("{}", report);
    Ok(report)
}

async fn resolve_bulk(api: &dyn ErpApi, ids: &[i64]) -> Result<Vec<(i64, String)>> {
    let rows = api
        .suiteql(&verify_sales_orders_query(ids))
        .await
        .context("Failed to verify sales order IDs via SuiteQL")?;

    let tran_ids: HashMap<i64, String> = rows
        .iter()
        .filter_map(|row| Some((parse_id(row.get("id"))?, display_str(row.get("tranid")))))
        .collect();

    Ok(ids
        .iter()
        .filter_map(|id| tran_ids.get(id).map(|t| (*id, t.clone())))
        .collect())
}

async fn resolve_fallback(api: &dyn ErpApi, ids: &[i64]) -> Result<Vec<(i64, String)>> {
    let mut found = Vec::new();
    for &id in ids {
        let record = api
            .get_record(SALES_ORDER_RECORD, id)
            .await
            .with_context(|| format!("Failed to verify sales order {} via REST Records", id))?;
        if let Some(record) = record {
            let tran_id = record
                .get("tranId")
                .or_else(|| record.get("tranid"))
                .map(|v| display_str(Some(v)))
                .unwrap_or_default();
            found.push((id, tran_id));
        }
    }
    Ok(found)
}
